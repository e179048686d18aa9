use anyhow::Result;
use log::{debug, info};

use crate::canvas::Scene;
use crate::cstr;
use crate::renderer_engine::shader::compile_shader_program;
use crate::renderer_engine::tools::format_bytes;
use crate::renderer_engine::types::ShapeGPU;
use crate::renderer_engine::RendererEngine;

/// Capacité initiale du buffer d'instances (formes), agrandi à la demande.
const INITIAL_CAPACITY: usize = 1024;

/// Renderer OpenGL du canvas : chaque forme est un quad instancié dont le
/// fragment shader ne garde que l'ellipse inscrite.
pub struct Renderer {
    vao: u32,
    vbo_quad: u32,
    vbo_instances: u32,
    capacity: usize,

    shader_program: u32,
    loc_canvas_size: i32,

    canvas_size: (f32, f32),
    viewport: (i32, i32),

    /// Tampon CPU réutilisé d'une frame à l'autre
    instances: Vec<ShapeGPU>,
}

impl Renderer {
    /// # Errors
    /// Échoue si les shaders ne compilent pas. Le contexte OpenGL doit être courant.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let (vertex_src, fragment_src) = Self::src_shaders_shapes();
        let shader_program = unsafe { compile_shader_program(vertex_src, fragment_src)? };
        let loc_canvas_size =
            unsafe { gl::GetUniformLocation(shader_program, cstr!("uCanvasSize")) };

        let (vao, vbo_quad, vbo_instances) = unsafe { Self::setup_gpu_buffers(INITIAL_CAPACITY) };

        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }

        Ok(Self {
            vao,
            vbo_quad,
            vbo_instances,
            capacity: INITIAL_CAPACITY,
            shader_program,
            loc_canvas_size,
            canvas_size: (width as f32, height as f32),
            viewport: (width as i32, height as i32),
            instances: Vec::with_capacity(INITIAL_CAPACITY),
        })
    }

    pub fn src_shaders_shapes() -> (&'static str, &'static str) {
        let vertex_src = r#"
        #version 330 core
        layout(location = 0) in vec2 aCorner;   // quad unitaire [0,1]²
        layout(location = 1) in vec4 aBBox;     // min.xy, max.xy (canvas)
        layout(location = 2) in vec4 aColor;

        out vec2 vLocal;
        out vec4 vColor;

        uniform vec2 uCanvasSize;

        void main() {
            vec2 p = mix(aBBox.xy, aBBox.zw, aCorner);
            // canvas : origine en haut à gauche, y vers le bas
            float x = p.x / uCanvasSize.x * 2.0 - 1.0;
            float y = 1.0 - p.y / uCanvasSize.y * 2.0;
            gl_Position = vec4(x, y, 0.0, 1.0);

            vLocal = aCorner * 2.0 - 1.0;
            vColor = aColor;
        }
        "#;

        let fragment_src = r#"
        #version 330 core
        in vec2 vLocal;
        in vec4 vColor;
        out vec4 FragColor;

        void main() {
            if (dot(vLocal, vLocal) > 1.0) discard;
            FragColor = vColor;
        }
        "#;
        (vertex_src, fragment_src)
    }

    unsafe fn setup_gpu_buffers(capacity: usize) -> (u32, u32, u32) {
        const QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        let (mut vao, mut vbo_quad, mut vbo_instances) = (0u32, 0u32, 0u32);

        // === VAO ===
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);

        // === Quad unitaire partagé (triangle strip) ===
        gl::GenBuffers(1, &mut vbo_quad);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo_quad);
        let quad_bytes: &[u8] = bytemuck::cast_slice(&QUAD);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            quad_bytes.len() as isize,
            quad_bytes.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        gl::VertexAttribPointer(
            0,
            2,
            gl::FLOAT,
            gl::FALSE,
            (2 * std::mem::size_of::<f32>()) as i32,
            std::ptr::null(),
        );
        gl::EnableVertexAttribArray(0);

        // === Instances ===
        gl::GenBuffers(1, &mut vbo_instances);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo_instances);
        Self::allocate_instances(capacity);
        ShapeGPU::setup_vertex_attribs_for_instanced_quad();

        // === Nettoyage ===
        gl::BindVertexArray(0);

        (vao, vbo_quad, vbo_instances)
    }

    /// Le VBO d'instances doit être lié.
    unsafe fn allocate_instances(capacity: usize) {
        let buffer_size = capacity * std::mem::size_of::<ShapeGPU>();
        debug!(
            "🎮 Allocating shape instance buffer: {} shapes → {}",
            capacity,
            format_bytes(buffer_size)
        );
        gl::BufferData(
            gl::ARRAY_BUFFER,
            buffer_size as isize,
            std::ptr::null(),
            gl::STREAM_DRAW,
        );
    }

    /// Copie les instances dans le VBO, en l'agrandissant si besoin.
    unsafe fn upload_instances(&mut self) {
        gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo_instances);

        if self.instances.len() > self.capacity {
            self.capacity = self.instances.len().next_power_of_two();
            Self::allocate_instances(self.capacity);
        }

        let bytes: &[u8] = bytemuck::cast_slice(&self.instances);
        gl::BufferSubData(
            gl::ARRAY_BUFFER,
            0,
            bytes.len() as isize,
            bytes.as_ptr() as *const _,
        );
    }
}

impl RendererEngine for Renderer {
    fn render_frame(&mut self, scene: &Scene) -> usize {
        self.instances.clear();
        self.instances
            .extend(scene.iter().map(|(_, shape)| ShapeGPU::from(shape)));
        let count = self.instances.len();

        unsafe {
            gl::Viewport(0, 0, self.viewport.0, self.viewport.1);
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            if count == 0 {
                return 0;
            }

            self.upload_instances();

            gl::UseProgram(self.shader_program);
            gl::Uniform2f(self.loc_canvas_size, self.canvas_size.0, self.canvas_size.1);
            gl::BindVertexArray(self.vao);
            gl::DrawArraysInstanced(gl::TRIANGLE_STRIP, 0, 4, count as i32);
            gl::BindVertexArray(0);
        }

        count
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        self.viewport = (width, height);
    }

    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_size = (width, height);
        info!("🖼️ Canvas size: {} x {}", width, height);
    }

    fn close(&mut self) {
        unsafe {
            if self.vbo_instances != 0 {
                gl::DeleteBuffers(1, &self.vbo_instances);
                self.vbo_instances = 0;
            }
            if self.vbo_quad != 0 {
                gl::DeleteBuffers(1, &self.vbo_quad);
                self.vbo_quad = 0;
            }
            if self.vao != 0 {
                gl::DeleteVertexArrays(1, &self.vao);
                self.vao = 0;
            }
            if self.shader_program != 0 {
                gl::DeleteProgram(self.shader_program);
                self.shader_program = 0;
            }
        }
    }
}
