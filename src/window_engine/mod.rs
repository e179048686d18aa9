pub mod r#trait;
pub use r#trait::{WindowEngine, WindowInput};

pub mod glfw_window_engine;
pub use self::glfw_window_engine::GlfwWindowEngine;

pub mod resolution;
pub use self::resolution::Resolution;

pub mod config;
pub use self::config::WindowConfig;
