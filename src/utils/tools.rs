use log::info;

/// Version d'une dépendance suivie par `build.rs`, "Unknown" si absente.
fn tracked_version(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "Unknown",
    }
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    info!("  GL    version: {}", tracked_version(option_env!("GL")));
    info!("  GLFW  version: {}", tracked_version(option_env!("GLFW")));
    info!("  IMGUI version: {}", tracked_version(option_env!("IMGUI")));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_rust_core_dependencies_no_panic() {
        show_rust_core_dependencies();
    }

    #[test]
    fn test_tracked_version_fallback() {
        assert_eq!(tracked_version(None), "Unknown");
        assert_eq!(tracked_version(Some("")), "Unknown");
        assert_eq!(tracked_version(Some("0.14.0")), "0.14.0");
    }
}
