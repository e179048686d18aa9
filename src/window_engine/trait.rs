use anyhow::Result;

use crate::window_engine::resolution::Resolution;

/// Entrées fenêtre déjà interprétées, indépendantes de GLFW.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowInput {
    /// Demande de fermeture (Escape ou bouton de la fenêtre)
    Close,
    /// Nouvelle taille du framebuffer
    Resized(i32, i32),
    /// Résolution choisie au clavier (touches 1 à 5)
    SelectResolution(Resolution),
    /// Rechargement de la configuration physique (touche R)
    ReloadConfig,
}

pub trait WindowEngine {
    fn init(width: u32, height: u32, title: &str) -> Result<Self>
    where
        Self: Sized;

    fn poll_events(&mut self) -> Vec<WindowInput>;
    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn get_size(&self) -> (i32, i32);
    fn set_size(&mut self, width: u32, height: u32);

    /// Taille de l'écran principal, `None` si aucun moniteur n'est détecté.
    fn screen_size(&self) -> Option<(u32, u32)>;

    /// Dessine le menu déroulant des résolutions.
    /// Retourne la résolution choisie pendant cette frame, s'il y en a une.
    fn draw_resolution_menu(&mut self, current: Resolution) -> Option<Resolution>;
}
