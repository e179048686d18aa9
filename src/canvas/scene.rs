use std::collections::BTreeMap;

#[cfg(debug_assertions)]
use log::trace;

use crate::canvas::r#trait::Canvas;
use crate::canvas::types::{BBox, DrawCommand, PaletteColor, Shape, ShapeId};
use crate::physic_engine::types::Vec2;

/// Canvas en mémoire.
///
/// Conserve les formes vivantes (ordonnées par création, donc dessinées dans
/// cet ordre) et un journal des commandes de dessin appliquées depuis le
/// dernier `drain_commands`.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u64,
    journal: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Formes vivantes, dans l'ordre de création.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.shapes.iter().map(|(&id, shape)| (id, shape))
    }

    /// Commandes appliquées depuis le dernier appel, dans l'ordre.
    pub fn drain_commands(&mut self) -> Vec<DrawCommand> {
        #[cfg(debug_assertions)]
        trace!("Scene: draining {} draw commands", self.journal.len());
        std::mem::take(&mut self.journal)
    }

    pub fn pending_commands(&self) -> &[DrawCommand] {
        &self.journal
    }

    /// Vide la scène. Les identifiants ne repartent pas de zéro.
    pub fn clear(&mut self) {
        let ids: Vec<ShapeId> = self.shapes.keys().copied().collect();
        for id in ids {
            self.delete(id);
        }
    }
}

impl Canvas for Scene {
    fn create_oval(&mut self, bbox: BBox, color: PaletteColor) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, Shape { bbox, color });
        self.journal.push(DrawCommand::Create { id, bbox, color });
        id
    }

    fn move_by(&mut self, id: ShapeId, delta: Vec2) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            shape.bbox = shape.bbox.translated(delta);
            self.journal.push(DrawCommand::Move { id, delta });
        }
    }

    fn delete(&mut self, id: ShapeId) {
        if self.shapes.remove(&id).is_some() {
            self.journal.push(DrawCommand::Delete { id });
        }
    }

    fn coords(&self, id: ShapeId) -> Option<BBox> {
        self.shapes.get(&id).map(|s| s.bbox)
    }
}
