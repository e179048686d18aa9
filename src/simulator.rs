use crate::canvas::Scene;
use crate::physic_engine::{config::PhysicConfig, Bounds, PhysicEngine, UpdateResult};
use crate::renderer_engine::RendererEngine;
use crate::window_engine::{Resolution, WindowEngine, WindowInput};
use log::{debug, info, trace};
use std::time::{Duration, Instant};

pub const PHYSIC_CONFIG_PATH: &str = "assets/config/physic.toml";

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Boucle principale : fenêtre → physique → canvas → rendu.
pub struct Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngine,
    W: WindowEngine,
{
    renderer_engine: R,
    physic_engine: P,
    window_engine: W,
    scene: Scene,

    resolution: Resolution,
    screen_margin: u32,
    config_path: String,

    frames: u64,
    last_time: Instant,

    // Loop state
    fps_avg: f32,
    draw_commands: usize,
    last_log: Instant,
    first_frame: bool,
}

impl<R, P, W> Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngine,
    W: WindowEngine,
{
    pub fn new(
        renderer_engine: R,
        physic_engine: P,
        window_engine: W,
        resolution: Resolution,
        screen_margin: u32,
    ) -> Self {
        Self {
            renderer_engine,
            physic_engine,
            window_engine,
            scene: Scene::new(),
            resolution,
            screen_margin,
            config_path: PHYSIC_CONFIG_PATH.into(),
            frames: 0,
            last_time: Instant::now(),
            fps_avg: 0.0,
            draw_commands: 0,
            last_log: Instant::now(),
            first_frame: true,
        }
    }

    /// Chemin du fichier relu par la touche R.
    pub fn set_config_path(&mut self, path: impl Into<String>) {
        self.config_path = path.into();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Lance le premier tir ; les suivants sont planifiés par le moteur physique.
    pub fn start(&mut self) {
        self.physic_engine.start();
        self.last_time = Instant::now();
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.start();

        while self.step() {}

        Ok(())
    }

    /// Une frame, cadencée sur l'horloge réelle.
    pub fn step(&mut self) -> bool {
        let now = Instant::now();
        let delta = now.duration_since(self.last_time).as_secs_f32();
        self.last_time = now;
        self.step_with_dt(delta)
    }

    /// Une frame avec un `dt` imposé (secondes).
    pub fn step_with_dt(&mut self, delta: f32) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        for input in self.window_engine.poll_events() {
            match input {
                WindowInput::Close => self.window_engine.set_should_close(true),
                WindowInput::Resized(w, h) => self.renderer_engine.set_window_size(w, h),
                WindowInput::SelectResolution(r) => self.apply_resolution(r),
                WindowInput::ReloadConfig => self.reload_config(),
            }
        }
        if self.window_engine.should_close() {
            return false;
        }

        self.frames += 1;

        let update_result = self.physic_engine.update(delta, &mut self.scene);
        Self::log_update(&update_result);
        self.draw_commands += self.scene.drain_commands().len();

        let drawn = self.renderer_engine.render_frame(&self.scene);
        trace!("{} shapes drawn", drawn);

        if let Some(r) = self.window_engine.draw_resolution_menu(self.resolution) {
            self.apply_resolution(r);
        }

        self.window_engine.swap_buffers();

        self.log_stats(delta);

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        true
    }

    fn log_update(update_result: &UpdateResult) {
        for pos in &update_result.new_rockets {
            debug!("🚀 Rocket launched from ({}, {})", pos.x, pos.y);
        }
        for (i, origin) in update_result.triggered_explosions.iter().enumerate() {
            debug!(
                "💥 Explosion triggered: {} at ({}, {})",
                i, origin.x, origin.y
            );
        }
        if update_result.finished_explosions > 0 {
            debug!(
                "✨ {} explosion(s) faded out",
                update_result.finished_explosions
            );
        }
    }

    fn log_stats(&mut self, delta: f32) {
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        // moyenne pondérée EMA
        let alpha = 0.15;
        self.fps_avg = alpha * fps + (1.0 - alpha) * self.fps_avg;

        if self.last_log.elapsed() >= LOG_INTERVAL {
            info!(
                "FPS moyen (EMA): {:.2} | rockets: {} | explosions: {} | shapes: {} | draw commands: {}",
                self.fps_avg,
                self.physic_engine.rockets_count(),
                self.physic_engine.explosions_count(),
                self.scene.len(),
                self.draw_commands
            );
            self.draw_commands = 0;
            self.last_log = Instant::now();
        }
    }

    /// Change la taille de la fenêtre et du canvas sans toucher aux animations en cours.
    pub fn apply_resolution(&mut self, resolution: Resolution) {
        let screen = self.window_engine.screen_size();
        let (width, height) = resolution.fit_to_screen(screen, self.screen_margin);

        self.resolution = resolution;
        self.window_engine.set_size(width, height);
        self.physic_engine.set_bounds(Bounds::from((width, height)));
        self.renderer_engine
            .set_canvas_size(width as f32, height as f32);

        info!("🖥️ Resolution {}: {} x {}", resolution, width, height);
    }

    pub fn reload_config(&mut self) {
        let physic_config = PhysicConfig::from_file(&self.config_path).unwrap_or_default();
        info!("Physic config loaded:\n{:#?}", physic_config);

        self.physic_engine.reload_config(&physic_config);
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
        self.physic_engine.clear(&mut self.scene);
        let _ = self.scene.drain_commands();
        // Window engine cleanup happens automatically when dropped
    }
}
