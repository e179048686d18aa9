use generational_arena::{Arena, Index};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Canvas;
use crate::physic_engine::{
    config::PhysicConfig,
    explosion::{Explosion, ExplosionState},
    rocket::{Rocket, RocketState},
    scheduler::{FrameScheduler, Task},
    types::{Bounds, UpdateResult, Vec2},
    PhysicEngine,
};

/// Moteur de feux d'artifice : fusées et explosions vivantes, rangées dans
/// des arenas et animées par une file de tâches unique.
///
/// Chaque entité se replanifie elle-même tant qu'elle n'a pas atteint son
/// état terminal (`Exploded` / `Done`), exactement comme un callback
/// `after(ms, ...)` qui se resoumet.
#[derive(Debug)]
pub struct PhysicEngineFireworks<G: Rng = StdRng> {
    rockets: Arena<Rocket>,
    explosions: Arena<Explosion>,
    scheduler: FrameScheduler,

    /// Horloge simulée, fractions de ms comprises
    clock_ms: f64,
    started: bool,

    bounds: Bounds,
    rng: G,
    config: PhysicConfig,
}

impl PhysicEngineFireworks<StdRng> {
    pub fn new(config: &PhysicConfig, bounds: Bounds) -> Self {
        Self::with_rng(config, bounds, StdRng::from_os_rng())
    }

    /// Moteur reproductible, pour les tests et les captures.
    pub fn with_seed(config: &PhysicConfig, bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(config, bounds, StdRng::seed_from_u64(seed))
    }
}

impl<G: Rng> PhysicEngineFireworks<G> {
    pub fn with_rng(config: &PhysicConfig, bounds: Bounds, rng: G) -> Self {
        Self {
            rockets: Arena::new(),
            explosions: Arena::new(),
            scheduler: FrameScheduler::new(),
            clock_ms: 0.0,
            started: false,
            bounds,
            rng,
            config: config.clone().validated(),
        }
    }

    pub fn rockets(&self) -> impl Iterator<Item = &Rocket> {
        self.rockets.iter().map(|(_, r)| r)
    }

    pub fn explosions(&self) -> impl Iterator<Item = &Explosion> {
        self.explosions.iter().map(|(_, e)| e)
    }

    /// Particules encore vivantes, toutes explosions confondues.
    pub fn particles_count(&self) -> usize {
        self.explosions().map(Explosion::len).sum()
    }

    pub fn clock_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    fn run_task<C: Canvas>(&mut self, task: Task, canvas: &mut C, result: &mut UpdateResult) {
        match task {
            Task::SpawnRocket => {
                self.spawn_rocket(canvas, result);
                self.scheduler
                    .schedule_after(self.config.spawn_interval_ms, Task::SpawnRocket);
            }
            Task::AdvanceRocket(idx) => self.advance_rocket(idx, canvas, result),
            Task::AdvanceExplosion(idx) => self.advance_explosion(idx, canvas, result),
        }
    }

    fn spawn_rocket<C: Canvas>(&mut self, canvas: &mut C, result: &mut UpdateResult) -> Index {
        let rocket = Rocket::spawn(&mut self.rng, self.bounds, &self.config, canvas);
        self.insert_rocket(rocket, canvas, result)
    }

    fn insert_rocket<C: Canvas>(
        &mut self,
        rocket: Rocket,
        canvas: &mut C,
        result: &mut UpdateResult,
    ) -> Index {
        debug!(
            "🚀 Rocket {} spawned at ({}, {}), target y = {}",
            rocket.id, rocket.x, rocket.y, rocket.target_y
        );
        result.new_rockets.push(Vec2::new(rocket.x, rocket.y));

        let idx = self.rockets.insert(rocket);
        // première frame jouée immédiatement, sans attendre le scheduler
        self.advance_rocket(idx, canvas, result);
        idx
    }

    fn advance_rocket<C: Canvas>(&mut self, idx: Index, canvas: &mut C, result: &mut UpdateResult) {
        let Some(rocket) = self.rockets.get_mut(idx) else {
            return;
        };

        match rocket.advance(canvas, &self.config) {
            RocketState::Rising => {
                self.scheduler
                    .schedule_after(self.config.rocket_frame_ms, Task::AdvanceRocket(idx));
            }
            RocketState::Exploded => {
                let origin = rocket.burst_point();
                self.rockets.remove(idx);
                self.trigger_explosion(origin, canvas, result);
            }
        }
    }

    fn trigger_explosion<C: Canvas>(
        &mut self,
        origin: Vec2,
        canvas: &mut C,
        result: &mut UpdateResult,
    ) {
        let explosion = Explosion::explode(origin, &mut self.rng, &self.config, canvas);
        debug!(
            "💥 Explosion triggered at ({}, {}) with {} particles",
            origin.x,
            origin.y,
            explosion.len()
        );
        result.triggered_explosions.push(origin);

        let idx = self.explosions.insert(explosion);
        self.advance_explosion(idx, canvas, result);
    }

    fn advance_explosion<C: Canvas>(
        &mut self,
        idx: Index,
        canvas: &mut C,
        result: &mut UpdateResult,
    ) {
        let Some(explosion) = self.explosions.get_mut(idx) else {
            return;
        };

        match explosion.advance(canvas, self.bounds, &self.config) {
            ExplosionState::Active => {
                self.scheduler
                    .schedule_after(self.config.particle_frame_ms, Task::AdvanceExplosion(idx));
            }
            ExplosionState::Done => {
                self.explosions.remove(idx);
                result.finished_explosions += 1;
            }
        }
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl<G: Rng> PhysicEngine for PhysicEngineFireworks<G> {
    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.scheduler.schedule_after(0, Task::SpawnRocket);
        info!(
            "🎆 Fireworks started: one rocket every {} ms",
            self.config.spawn_interval_ms
        );
    }

    fn update<C: Canvas>(&mut self, dt: f32, canvas: &mut C) -> UpdateResult {
        let mut result = UpdateResult::default();

        let step_ms = (dt.max(0.0) * 1000.0).min(self.config.max_frame_ms.max(0.0));
        self.clock_ms += step_ms as f64;
        let horizon = self.clock_ms.floor() as u64;

        while let Some(task) = self.scheduler.pop_due(horizon) {
            self.run_task(task, canvas, &mut result);
        }
        self.scheduler.advance_to(horizon);

        result
    }

    fn close(&mut self) {
        self.scheduler.clear();
        self.rockets.clear();
        self.explosions.clear();
        self.started = false;
        debug!("PhysicEngineFireworks closed and reset.");
    }

    fn clear<C: Canvas>(&mut self, canvas: &mut C) {
        for (_, rocket) in self.rockets.iter() {
            canvas.delete(rocket.shape);
        }
        for (_, explosion) in self.explosions.iter_mut() {
            explosion.clear(canvas);
        }
        self.close();
    }

    fn reload_config(&mut self, config: &PhysicConfig) {
        self.config = config.clone().validated();
        info!("Physic config reloaded, applies to the next frames");
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    fn explosions_count(&self) -> usize {
        self.explosions.len()
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    /// Lance une fusée aux paramètres donnés, sans tirage aléatoire.
    fn launch_rocket_at<C: Canvas>(&mut self, x: f32, target_y: f32, canvas: &mut C) -> UpdateResult;
    /// Déclenche une explosion à `origin`, sans fusée.
    fn explode_at<C: Canvas>(&mut self, origin: Vec2, canvas: &mut C) -> UpdateResult;
    fn pending_tasks(&self) -> usize;
}

#[cfg(any(test, feature = "test_helpers"))]
impl<G: Rng> PhysicEngineTestHelpers for PhysicEngineFireworks<G> {
    fn launch_rocket_at<C: Canvas>(&mut self, x: f32, target_y: f32, canvas: &mut C) -> UpdateResult {
        let mut result = UpdateResult::default();
        let rocket = Rocket::launch(x, self.bounds.height, target_y, &self.config, canvas);
        self.insert_rocket(rocket, canvas, &mut result);
        result
    }

    fn explode_at<C: Canvas>(&mut self, origin: Vec2, canvas: &mut C) -> UpdateResult {
        let mut result = UpdateResult::default();
        self.trigger_explosion(origin, canvas, &mut result);
        result
    }

    fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }
}
