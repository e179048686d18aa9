use bytemuck::{Pod, Zeroable};
use gl::types::*;
use memoffset::offset_of;
use std::mem;

use crate::canvas::Shape;

/// Instance envoyée au GPU pour une forme du canvas.
///
/// Une instance = une ellipse pleine inscrite dans sa boîte englobante,
/// en coordonnées canvas (origine en haut à gauche, y vers le bas).
///
/// | Location | Type   | Champs                         |
/// |:--------:|:-------|:-------------------------------|
/// | `1`      | `vec4` | `min_x`, `min_y`, `max_x`, `max_y` |
/// | `2`      | `vec4` | `col_r`, `col_g`, `col_b`, `col_a` |
///
/// La location `0` est réservée au quad unitaire partagé.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ShapeGPU {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,

    pub col_r: f32,
    pub col_g: f32,
    pub col_b: f32,
    pub col_a: f32,
}

impl From<&Shape> for ShapeGPU {
    fn from(shape: &Shape) -> Self {
        let color = shape.color.rgba();
        Self {
            min_x: shape.bbox.min.x,
            min_y: shape.bbox.min.y,
            max_x: shape.bbox.max.x,
            max_y: shape.bbox.max.y,
            col_r: color.x,
            col_g: color.y,
            col_b: color.z,
            col_a: color.w,
        }
    }
}

impl ShapeGPU {
    /// Configure les attributs instanciés (un par forme).
    ///
    /// ⚠️ Pré-requis : le VAO et le VBO d'instances doivent être liés.
    pub fn setup_vertex_attribs_for_instanced_quad() {
        let stride = mem::size_of::<Self>() as GLsizei;

        unsafe {
            // layout(location = 1) : boîte englobante (vec4)
            gl::VertexAttribPointer(
                1,
                4,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, min_x) as *const _,
            );
            gl::EnableVertexAttribArray(1);
            gl::VertexAttribDivisor(1, 1); // 🔑 une fois par forme

            // layout(location = 2) : couleur (vec4)
            gl::VertexAttribPointer(
                2,
                4,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, col_r) as *const _,
            );
            gl::EnableVertexAttribArray(2);
            gl::VertexAttribDivisor(2, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BBox, PaletteColor};

    #[test]
    fn test_shape_gpu_layout() {
        assert_eq!(mem::size_of::<ShapeGPU>(), 8 * mem::size_of::<f32>());
        assert_eq!(offset_of!(ShapeGPU, col_r), 4 * mem::size_of::<f32>());
    }

    #[test]
    fn test_shape_gpu_from_shape() {
        let shape = Shape {
            bbox: BBox::new(398.0, 590.0, 402.0, 610.0),
            color: PaletteColor::White,
        };
        let gpu = ShapeGPU::from(&shape);
        assert_eq!((gpu.min_x, gpu.min_y, gpu.max_x, gpu.max_y), (398.0, 590.0, 402.0, 610.0));
        assert_eq!((gpu.col_r, gpu.col_g, gpu.col_b, gpu.col_a), (1.0, 1.0, 1.0, 1.0));

        let bytes: &[u8] = bytemuck::cast_slice(std::slice::from_ref(&gpu));
        assert_eq!(bytes.len(), mem::size_of::<ShapeGPU>());
    }
}
