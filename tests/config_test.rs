use std::io::Write;

use fireworks_canvas::physic_engine::config::PhysicConfig;
use fireworks_canvas::window_engine::{Resolution, WindowConfig};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_physic_config_matches_reference_values() {
    let c = PhysicConfig::default();
    assert_eq!(c.spawn_interval_ms, 1000);
    assert_eq!(c.rocket_frame_ms, 30);
    assert_eq!(c.rocket_step, 10.0);
    assert_eq!(c.particles_per_explosion, 30);
    assert_eq!(c.particle_frame_ms, 50);
    assert_eq!(c.particle_step_fraction, 0.1);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_temp("spawn_interval_ms = 500\nparticles_per_explosion = 12\n");

    let config = PhysicConfig::from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.spawn_interval_ms, 500);
    assert_eq!(config.particles_per_explosion, 12);
    assert_eq!(config.rocket_frame_ms, PhysicConfig::default().rocket_frame_ms);
}

#[test]
fn test_invalid_file_is_an_error() {
    let file = write_temp("spawn_interval_ms = \"soon\"\n");
    assert!(PhysicConfig::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(PhysicConfig::from_file("does/not/exist.toml").is_err());
    assert!(WindowConfig::from_file("does/not/exist.toml").is_err());
}

#[test]
fn test_shipped_configs_parse() {
    let physic = PhysicConfig::from_file("assets/config/physic.toml").unwrap();
    assert_eq!(physic, PhysicConfig::default());

    let window = WindowConfig::from_file("assets/config/window.toml").unwrap();
    assert_eq!(window.resolution, Resolution::Hd);
}

#[test]
fn test_window_config_from_file() {
    let file = write_temp("title = \"Feu\"\nresolution = \"360P\"\ncenter_on_screen = false\n");

    let config = WindowConfig::from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.title, "Feu");
    assert_eq!(config.resolution, Resolution::P360);
    assert!(!config.center_on_screen);
}

#[test]
fn test_zero_delays_and_steps_fall_back_to_defaults() {
    let file = write_temp(
        "spawn_interval_ms = 0\nrocket_frame_ms = 0\nparticle_frame_ms = 0\n\
         rocket_step = -5.0\nparticle_step_fraction = 0.0\nparticles_per_explosion = 8\n",
    );

    let config = PhysicConfig::from_file(file.path().to_str().unwrap()).unwrap();
    let defaults = PhysicConfig::default();

    assert_eq!(config.spawn_interval_ms, defaults.spawn_interval_ms);
    assert_eq!(config.rocket_frame_ms, defaults.rocket_frame_ms);
    assert_eq!(config.particle_frame_ms, defaults.particle_frame_ms);
    assert_eq!(config.rocket_step, defaults.rocket_step);
    assert_eq!(config.particle_step_fraction, defaults.particle_step_fraction);
    // Les champs valides sont conservés
    assert_eq!(config.particles_per_explosion, 8);
}
