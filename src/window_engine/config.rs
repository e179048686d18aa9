use serde::Deserialize;

use crate::window_engine::resolution::{Resolution, DEFAULT_SCREEN_MARGIN};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub resolution: Resolution,
    pub screen_margin: u32,
    pub center_on_screen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fireworks".into(),
            resolution: Resolution::Hd,
            screen_margin: DEFAULT_SCREEN_MARGIN,
            center_on_screen: true,
        }
    }
}

impl WindowConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
