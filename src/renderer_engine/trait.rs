use crate::canvas::Scene;

pub trait RendererEngine {
    /// Dessine toutes les formes vivantes de la scène. Retourne le nombre de formes dessinées.
    fn render_frame(&mut self, scene: &Scene) -> usize;

    /// Taille du framebuffer (viewport), en pixels physiques.
    fn set_window_size(&mut self, width: i32, height: i32);

    /// Taille logique du canvas, dans les unités des formes.
    fn set_canvas_size(&mut self, width: f32, height: f32);

    fn close(&mut self);
}
