pub mod r#trait;
pub use r#trait::Canvas;

pub mod types;
pub use self::types::{BBox, DrawCommand, PaletteColor, Shape, ShapeId};

pub mod scene;
pub use self::scene::Scene;
