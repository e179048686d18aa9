use crate::physic_engine::types::{Color, Vec2};

/// Identifiant d'une forme sur le canvas.
///
/// Les identifiants sont croissants et jamais réutilisés : une forme supprimée
/// reste absente pour toujours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

/// Boîte englobante alignée sur les axes (coordonnées canvas).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }

    /// Boîte centrée sur `center`, de demi-dimensions `half`.
    pub fn centered(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Boîte carrée dont le coin haut-gauche est `origin`.
    pub fn square(origin: Vec2, size: f32) -> Self {
        Self {
            min: origin,
            max: origin + Vec2::splat(size),
        }
    }

    /// Coin haut-gauche, c'est la "position" d'une forme.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// Palette fixe des couleurs de feu d'artifice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Purple,
        PaletteColor::White,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
            PaletteColor::White => "white",
        }
    }

    /// Couleur RGBA normalisée (valeurs des noms de couleur X11/Tk).
    pub fn rgba(&self) -> Color {
        let (r, g, b) = match self {
            PaletteColor::Red => (255, 0, 0),
            PaletteColor::Orange => (255, 165, 0),
            PaletteColor::Yellow => (255, 255, 0),
            PaletteColor::Green => (0, 128, 0),
            PaletteColor::Blue => (0, 0, 255),
            PaletteColor::Purple => (160, 32, 240),
            PaletteColor::White => (255, 255, 255),
        };
        Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }
}

/// Forme retenue par le canvas. Seules les ellipses pleines sont utilisées.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub bbox: BBox,
    pub color: PaletteColor,
}

/// Effet de bord d'un tick d'animation, dans l'ordre où il a été appliqué.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Create {
        id: ShapeId,
        bbox: BBox,
        color: PaletteColor,
    },
    Move {
        id: ShapeId,
        delta: Vec2,
    },
    Delete {
        id: ShapeId,
    },
}

impl DrawCommand {
    pub fn id(&self) -> ShapeId {
        match *self {
            DrawCommand::Create { id, .. }
            | DrawCommand::Move { id, .. }
            | DrawCommand::Delete { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_helpers() {
        let b = BBox::centered(Vec2::new(400.0, 600.0), Vec2::new(2.0, 10.0));
        assert_eq!(b, BBox::new(398.0, 590.0, 402.0, 610.0));
        assert_eq!(b.center(), Vec2::new(400.0, 600.0));
        assert_eq!(b.size(), Vec2::new(4.0, 20.0));

        let s = BBox::square(Vec2::new(10.0, 20.0), 5.0);
        assert_eq!(s.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(s.translated(Vec2::new(1.0, -1.0)).origin(), Vec2::new(11.0, 19.0));
    }

    #[test]
    fn test_palette_is_opaque() {
        for c in PaletteColor::ALL {
            assert_eq!(c.rgba().w, 1.0, "{} should be opaque", c.name());
        }
    }
}
