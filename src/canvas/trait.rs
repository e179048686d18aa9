use crate::canvas::types::{BBox, PaletteColor, ShapeId};
use crate::physic_engine::types::Vec2;

/// 🎨 Trait `Canvas`
///
/// Surface de dessin retenue : les formes sont créées, déplacées, supprimées
/// et interrogées via leur identifiant. Les contrôleurs d'animation ne voient
/// que ce trait, ce qui permet de les tester sans fenêtre ni contexte OpenGL.
pub trait Canvas {
    /// Crée une ellipse pleine inscrite dans `bbox`.
    fn create_oval(&mut self, bbox: BBox, color: PaletteColor) -> ShapeId;

    /// Déplace une forme d'un décalage relatif. Sans effet si la forme n'existe plus.
    fn move_by(&mut self, id: ShapeId, delta: Vec2);

    /// Supprime une forme. Sans effet si elle est déjà supprimée.
    fn delete(&mut self, id: ShapeId);

    /// Boîte englobante courante, `None` si la forme a été supprimée.
    fn coords(&self, id: ShapeId) -> Option<BBox>;
}
