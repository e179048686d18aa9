pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Bounds, Color, UpdateResult, Vec2};

pub mod rocket;
pub use self::rocket::{Rocket, RocketState};

pub mod particle;
pub use self::particle::{Particle, ParticleSeed};

pub mod explosion;
pub use self::explosion::{Explosion, ExplosionState};

pub mod scheduler;
pub use self::scheduler::{FrameScheduler, Task};

pub mod config;
pub use self::config::PhysicConfig;

pub mod physic_engine_generational_arena;
pub use self::physic_engine_generational_arena::PhysicEngineFireworks;
