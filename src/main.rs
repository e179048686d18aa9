// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::info;
use std::env;

use fireworks_canvas::physic_engine::{Bounds, PhysicConfig, PhysicEngineFireworks};
use fireworks_canvas::renderer_engine::Renderer;
use fireworks_canvas::simulator::PHYSIC_CONFIG_PATH;
use fireworks_canvas::utils::show_rust_core_dependencies;
use fireworks_canvas::window_engine::{GlfwWindowEngine, Resolution, WindowConfig, WindowEngine};
use fireworks_canvas::Simulator;

const WINDOW_CONFIG_PATH: &str = "assets/config/window.toml";

/// Main entry point for the Fireworks application.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Fireworks...");

    show_rust_core_dependencies();

    let physic_config = PhysicConfig::from_file(PHYSIC_CONFIG_PATH).unwrap_or_default();
    info!("Physic config loaded:\n{:#?}", physic_config);

    let window_config = WindowConfig::from_file(WINDOW_CONFIG_PATH).unwrap_or_default();
    info!("Window config loaded:\n{:#?}", window_config);

    // --------------------------
    // Résolution initiale
    // --------------------------
    let resolution = env::args()
        .nth(1) // priorité à l'argument CLI
        .or_else(|| env::var("FIREWORKS_RESOLUTION").ok())
        .map(|name| Resolution::from_name_or_default(&name))
        .unwrap_or(window_config.resolution);

    // --------------------------
    // Initialisation des moteurs
    // --------------------------
    // 1. Init Window & Context (taille nominale, ajustée à l'écran juste après)
    let (width, height) = resolution.dimensions();
    let mut window_engine = GlfwWindowEngine::init(width, height, &window_config.title)?;
    window_engine.set_center_on_screen(window_config.center_on_screen);

    let (width, height) =
        resolution.fit_to_screen(window_engine.screen_size(), window_config.screen_margin);
    window_engine.set_size(width, height);
    info!("🖥️ Resolution {}: {} x {}", resolution, width, height);

    // 2. Init Renderer (now that GL context is ready)
    let renderer_engine = Renderer::new(width, height)?;

    let physic_engine = PhysicEngineFireworks::new(&physic_config, Bounds::from((width, height)));

    // 3. Init Simulator
    let mut simulator = Simulator::new(
        renderer_engine,
        physic_engine,
        window_engine,
        resolution,
        window_config.screen_margin,
    );

    let run_result = simulator.run();
    simulator.close();

    run_result
}
