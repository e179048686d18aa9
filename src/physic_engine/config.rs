use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    /// Délai entre deux lancements de fusée (ms)
    pub spawn_interval_ms: u64,

    pub rocket_frame_ms: u64,
    /// Déplacement vertical d'une fusée à chaque frame (unités canvas)
    pub rocket_step: f32,
    pub rocket_margin_x: f32,
    pub rocket_target_min_y: f32,
    pub rocket_target_max_y: f32,
    pub rocket_half_width: f32,
    pub rocket_half_height: f32,

    pub particles_per_explosion: usize,
    pub particle_frame_ms: u64,
    pub particle_min_distance: f32,
    pub particle_max_distance: f32,
    /// Fraction du vecteur vitesse appliquée à chaque frame
    pub particle_step_fraction: f32,
    pub particle_size: f32,

    /// Durée maximale simulée par frame (ms), évite un rattrapage sans fin
    /// après un gel de la fenêtre.
    pub max_frame_ms: f32,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1000,
            rocket_frame_ms: 30,
            rocket_step: 10.0,
            rocket_margin_x: 100.0,
            rocket_target_min_y: 100.0,
            rocket_target_max_y: 300.0,
            rocket_half_width: 2.0,
            rocket_half_height: 10.0,
            particles_per_explosion: 30,
            particle_frame_ms: 50,
            particle_min_distance: 20.0,
            particle_max_distance: 100.0,
            particle_step_fraction: 0.1,
            particle_size: 5.0,
            max_frame_ms: 250.0,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        Ok(config.validated())
    }

    /// Remplace par leur valeur par défaut les champs qui bloqueraient
    /// l'animation : délai nul (tâche replanifiée à l'infini dans la même
    /// frame) ou pas nul/négatif (entité qui n'atteint jamais son état final).
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        fn fix_delay(name: &str, value: &mut u64, default: u64) {
            if *value == 0 {
                warn!("⚠️ {} = 0 is not allowed, falling back to {}", name, default);
                *value = default;
            }
        }
        fn fix_positive(name: &str, value: &mut f32, default: f32) {
            if !(value.is_finite() && *value > 0.0) {
                warn!("⚠️ {} = {} must be > 0, falling back to {}", name, value, default);
                *value = default;
            }
        }

        fix_delay("spawn_interval_ms", &mut self.spawn_interval_ms, defaults.spawn_interval_ms);
        fix_delay("rocket_frame_ms", &mut self.rocket_frame_ms, defaults.rocket_frame_ms);
        fix_delay("particle_frame_ms", &mut self.particle_frame_ms, defaults.particle_frame_ms);
        fix_positive("rocket_step", &mut self.rocket_step, defaults.rocket_step);
        fix_positive(
            "particle_step_fraction",
            &mut self.particle_step_fraction,
            defaults.particle_step_fraction,
        );

        self
    }
}
