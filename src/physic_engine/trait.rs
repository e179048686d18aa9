use crate::canvas::Canvas;
use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{Bounds, UpdateResult};

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs d'animation. Le moteur ne connaît ni la
/// fenêtre ni l'horloge réelle : il reçoit un `dt` et un `Canvas` sur lequel
/// il applique ses effets de bord (création, déplacement, suppression de formes).
pub trait PhysicEngine {
    /// Ajuste la zone visible (changement de résolution).
    /// Les fusées et explosions en cours ne sont pas réinitialisées.
    fn set_bounds(&mut self, bounds: Bounds);

    fn bounds(&self) -> Bounds;

    /// Démarre le lancement périodique des fusées (le premier lancement est immédiat).
    fn start(&mut self);

    /// Avance l'horloge simulée de `dt` secondes et exécute toutes les tâches échues.
    fn update<C: Canvas>(&mut self, dt: f32, canvas: &mut C) -> UpdateResult;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.

    /// Supprime du canvas les formes des fusées et particules vivantes, puis
    /// ferme le moteur.
    fn clear<C: Canvas>(&mut self, canvas: &mut C);

    fn reload_config(&mut self, config: &PhysicConfig);

    fn get_config(&self) -> &PhysicConfig;

    /// Nombre de fusées encore en montée
    fn rockets_count(&self) -> usize;

    /// Nombre d'explosions encore actives
    fn explosions_count(&self) -> usize;
}
