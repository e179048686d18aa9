#[cfg(debug_assertions)]
use log::debug;
use itertools::Itertools;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::canvas::{BBox, Canvas, PaletteColor, ShapeId};
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{Bounds, Vec2};

/// Compteur global pour générer des ID uniques pour les rockets
pub static ROCKET_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

pub const ROCKET_COLOR: PaletteColor = PaletteColor::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RocketState {
    /// La fusée monte vers sa hauteur cible
    Rising,
    /// Terminal : le visuel a été supprimé et l'explosion déclenchée
    Exploded,
}

/// Représentation d’une fusée
#[derive(Debug, Clone)]
pub struct Rocket {
    /// ID unique de la rocket
    pub id: u64,

    /// x est fixé au lancement, seul y évolue
    pub x: f32,
    pub y: f32,
    pub target_y: f32,

    pub shape: ShapeId,
    state: RocketState,
}

impl Rocket {
    /// Lance une nouvelle fusée depuis le bas du canvas.
    ///
    /// x est tiré uniformément (entier) dans `[margin, width - margin]`,
    /// la hauteur cible dans `[rocket_target_min_y, rocket_target_max_y]`.
    /// Si le canvas est trop étroit pour la marge, la fusée part du centre.
    pub fn spawn<C: Canvas>(
        rng: &mut impl Rng,
        bounds: Bounds,
        config: &PhysicConfig,
        canvas: &mut C,
    ) -> Self {
        let x = Self::random_x(rng, bounds.width, config.rocket_margin_x);
        let y = bounds.height;
        let target_y = Self::random_target(rng, config);

        Self::launch(x, y, target_y, config, canvas)
    }

    /// Lance une fusée avec des paramètres déjà tirés.
    pub fn launch<C: Canvas>(
        x: f32,
        y: f32,
        target_y: f32,
        config: &PhysicConfig,
        canvas: &mut C,
    ) -> Self {
        let half = Vec2::new(config.rocket_half_width, config.rocket_half_height);
        let shape = canvas.create_oval(BBox::centered(Vec2::new(x, y), half), ROCKET_COLOR);

        Self {
            id: ROCKET_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            x,
            y,
            target_y,
            shape,
            state: RocketState::Rising,
        }
    }

    fn random_x(rng: &mut impl Rng, width: f32, margin: f32) -> f32 {
        let lo = margin.ceil() as i64;
        let hi = (width - margin).floor() as i64;
        if lo > hi {
            return (width / 2.0).floor();
        }
        rng.random_range(lo..=hi) as f32
    }

    fn random_target(rng: &mut impl Rng, config: &PhysicConfig) -> f32 {
        let (lo, hi) = [config.rocket_target_min_y, config.rocket_target_max_y]
            .iter()
            .copied()
            .minmax()
            .into_option()
            .unwrap_or((0.0, 0.0));
        rng.random_range(lo.ceil() as i64..=hi.floor().max(lo.ceil()) as i64) as f32
    }

    #[inline]
    pub fn state(&self) -> RocketState {
        self.state
    }

    /// Point où l'explosion est déclenchée : la hauteur cible, pas le dernier y.
    #[inline]
    pub fn burst_point(&self) -> Vec2 {
        Vec2::new(self.x, self.target_y)
    }

    /// Avance la fusée d'une frame.
    ///
    /// Tant que `y > target_y` le visuel monte de `rocket_step` et l'état reste
    /// `Rising`. Sinon le visuel est supprimé (une seule fois) et l'état passe
    /// à `Exploded`. Appeler `advance` sur une fusée explosée ne fait rien.
    pub fn advance<C: Canvas>(&mut self, canvas: &mut C, config: &PhysicConfig) -> RocketState {
        if self.state == RocketState::Exploded {
            return RocketState::Exploded;
        }

        if self.y > self.target_y {
            canvas.move_by(self.shape, Vec2::new(0.0, -config.rocket_step));
            self.y -= config.rocket_step;
        } else {
            canvas.delete(self.shape);
            self.state = RocketState::Exploded;

            #[cfg(debug_assertions)]
            debug!(
                "💥 Rocket {} reached target at ({}, {})",
                self.id, self.x, self.target_y
            );
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Scene;
    use rand::SeedableRng;

    #[test]
    fn test_random_x_degenerate_width_uses_center() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for width in [0.0, 150.0, 199.0] {
            let x = Rocket::random_x(&mut rng, width, 100.0);
            assert_eq!(x, (width / 2.0f32).floor());
        }
    }

    #[test]
    fn test_random_target_inverted_range_is_normalized() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let config = PhysicConfig {
            rocket_target_min_y: 300.0,
            rocket_target_max_y: 100.0,
            ..PhysicConfig::default()
        };
        for _ in 0..100 {
            let t = Rocket::random_target(&mut rng, &config);
            assert!((100.0..=300.0).contains(&t));
        }
    }

    #[test]
    fn test_advance_after_explosion_is_noop() {
        let config = PhysicConfig::default();
        let mut scene = Scene::new();
        let mut rocket = Rocket::launch(400.0, 100.0, 150.0, &config, &mut scene);

        assert_eq!(rocket.advance(&mut scene, &config), RocketState::Exploded);
        let _ = scene.drain_commands();

        assert_eq!(rocket.advance(&mut scene, &config), RocketState::Exploded);
        assert!(scene.drain_commands().is_empty());
    }
}
