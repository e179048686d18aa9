use anyhow::anyhow;
use itertools::Itertools;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Marge retirée aux dimensions de l'écran pour que la fenêtre tienne (décorations, barre des tâches).
pub const DEFAULT_SCREEN_MARGIN: u32 = 50;

/// Résolutions nommées proposées dans le menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Resolution {
    #[serde(rename = "360P")]
    P360,
    #[default]
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "FULLHD")]
    FullHd,
    #[serde(rename = "2K")]
    K2,
    #[serde(rename = "4K")]
    K4,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::P360,
        Resolution::Hd,
        Resolution::FullHd,
        Resolution::K2,
        Resolution::K4,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resolution::P360 => "360P",
            Resolution::Hd => "HD",
            Resolution::FullHd => "FULLHD",
            Resolution::K2 => "2K",
            Resolution::K4 => "4K",
        }
    }

    /// (largeur, hauteur) nominales
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Resolution::P360 => (800, 600),
            Resolution::Hd => (1280, 720),
            Resolution::FullHd => (1920, 1080),
            Resolution::K2 => (2560, 1440),
            Resolution::K4 => (3840, 2160),
        }
    }

    /// Dimensions ramenées à `écran - margin` sur chaque axe.
    ///
    /// Sans écran connu, les dimensions nominales sont utilisées telles quelles.
    pub fn fit_to_screen(&self, screen: Option<(u32, u32)>, margin: u32) -> (u32, u32) {
        let (width, height) = self.dimensions();
        match screen {
            Some((sw, sh)) => (
                width.min(sw.saturating_sub(margin)),
                height.min(sh.saturating_sub(margin)),
            ),
            None => (width, height),
        }
    }

    /// Résolution par son nom ; un nom inconnu retombe sur HD.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|e| {
            log::warn!("⚠️ {}, falling back to {}", e, Resolution::default());
            Resolution::default()
        })
    }

    /// Résolution sélectionnée par une touche numérique (1 = 360P ... 5 = 4K).
    pub fn from_shortcut(digit: usize) -> Option<Self> {
        digit.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resolution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                anyhow!(
                    "Unknown resolution '{}' (expected one of: {})",
                    wanted,
                    Self::ALL.iter().map(Resolution::name).join(", ")
                )
            })
    }
}
