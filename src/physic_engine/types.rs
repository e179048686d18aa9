pub use glam::{Vec2, Vec4 as Color};

// ------------------------
// Bounds
// ------------------------
/// Zone visible du canvas, origine en haut à gauche, y vers le bas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Test rectangle unique (bornes incluses) : sortir sur un seul axe suffit.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl From<(u32, u32)> for Bounds {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}

// ------------------------
// UpdateResult
// ------------------------
/// Événements produits par un `update` du moteur physique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// Position de départ des fusées lancées pendant ce tick
    pub new_rockets: Vec<Vec2>,
    /// Origine des explosions déclenchées pendant ce tick
    pub triggered_explosions: Vec<Vec2>,
    /// Nombre d'explosions dont toutes les particules ont quitté la scène
    pub finished_explosions: usize,
}

impl UpdateResult {
    pub fn is_empty(&self) -> bool {
        self.new_rockets.is_empty()
            && self.triggered_explosions.is_empty()
            && self.finished_explosions == 0
    }
}
