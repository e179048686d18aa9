#[cfg(debug_assertions)]
use log::debug;
use rand::Rng;

use crate::canvas::{BBox, Canvas};
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::{Particle, ParticleSeed};
use crate::physic_engine::types::{Bounds, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionState {
    /// Au moins une particule est encore visible
    Active,
    /// Plus aucune particule : l'animation s'arrête
    Done,
}

/// Gerbe de particules issue d'une fusée.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub origin: Vec2,
    particles: Vec<Particle>,
    frames: u32,
}

impl Explosion {
    /// Crée `particles_per_explosion` particules à `origin` (coin haut-gauche
    /// de chaque visuel), avec vitesse et couleur aléatoires.
    pub fn explode<C: Canvas>(
        origin: Vec2,
        rng: &mut impl Rng,
        config: &PhysicConfig,
        canvas: &mut C,
    ) -> Self {
        let seeds: Vec<ParticleSeed> = (0..config.particles_per_explosion)
            .map(|_| {
                ParticleSeed::random(
                    rng,
                    config.particle_min_distance,
                    config.particle_max_distance,
                )
            })
            .collect();
        Self::from_seeds(origin, &seeds, config, canvas)
    }

    /// Crée une explosion à partir de paramètres déjà tirés.
    pub fn from_seeds<C: Canvas>(
        origin: Vec2,
        seeds: &[ParticleSeed],
        config: &PhysicConfig,
        canvas: &mut C,
    ) -> Self {
        let particles = seeds
            .iter()
            .map(|seed| {
                let shape =
                    canvas.create_oval(BBox::square(origin, config.particle_size), seed.color);
                Particle::new(shape, seed.vel, seed.color)
            })
            .collect();

        Self {
            origin,
            particles,
            frames: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Nombre de frames déjà jouées.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn state(&self) -> ExplosionState {
        if self.particles.is_empty() {
            ExplosionState::Done
        } else {
            ExplosionState::Active
        }
    }

    /// Avance toutes les particules d'une frame.
    ///
    /// Une particule dont le visuel a disparu est simplement oubliée. Les autres
    /// sont déplacées de `vel * particle_step_fraction` puis supprimées si leur
    /// coin haut-gauche sort de `bounds`.
    /// Supprime toutes les particules restantes et leurs formes.
    pub fn clear<C: Canvas>(&mut self, canvas: &mut C) {
        for p in self.particles.drain(..) {
            canvas.delete(p.shape);
        }
    }

    pub fn advance<C: Canvas>(
        &mut self,
        canvas: &mut C,
        bounds: Bounds,
        config: &PhysicConfig,
    ) -> ExplosionState {
        if self.particles.is_empty() {
            return ExplosionState::Done;
        }

        let fraction = config.particle_step_fraction;
        self.particles.retain(|p| {
            if canvas.coords(p.shape).is_none() {
                canvas.delete(p.shape);
                return false;
            }
            canvas.move_by(p.shape, p.step(fraction));
            match canvas.coords(p.shape) {
                Some(bbox) if bounds.contains(bbox.origin()) => true,
                _ => {
                    canvas.delete(p.shape);
                    false
                }
            }
        });
        self.frames += 1;

        let state = self.state();
        #[cfg(debug_assertions)]
        if state == ExplosionState::Done {
            debug!(
                "✨ Explosion at ({}, {}) done after {} frames",
                self.origin.x, self.origin.y, self.frames
            );
        }
        state
    }
}
