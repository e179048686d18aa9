use rand::Rng;

use crate::canvas::{PaletteColor, ShapeId};
use crate::physic_engine::types::Vec2;

/// Particule d'explosion.
///
/// Sa position n'est pas stockée ici : elle vit dans le canvas (via `shape`).
/// Couleur et vitesse sont figées à la création.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub shape: ShapeId,
    vel: Vec2,
    color: PaletteColor,
}

impl Particle {
    pub fn new(shape: ShapeId, vel: Vec2, color: PaletteColor) -> Self {
        Self { shape, vel, color }
    }

    /// Vecteur vitesse complet (dx, dy), avant application de la fraction par frame.
    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// Déplacement appliqué à chaque frame.
    #[inline]
    pub fn step(&self, fraction: f32) -> Vec2 {
        self.vel * fraction
    }
}

/// Paramètres tirés au hasard pour une particule, avant création du visuel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSeed {
    pub vel: Vec2,
    pub color: PaletteColor,
}

impl ParticleSeed {
    /// angle ~ U(0, 2π), distance ~ U(min, max), couleur ~ palette uniforme.
    pub fn random(rng: &mut impl Rng, min_distance: f32, max_distance: f32) -> Self {
        let angle = rng.random_range(0.0..(2.0 * std::f32::consts::PI));
        let distance = if min_distance < max_distance {
            rng.random_range(min_distance..max_distance)
        } else {
            min_distance
        };
        let color = PaletteColor::ALL[rng.random_range(0..PaletteColor::ALL.len())];

        Self {
            vel: Vec2::from_angle(angle) * distance,
            color,
        }
    }
}
