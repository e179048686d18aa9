#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use fireworks_canvas::canvas::{DrawCommand, Scene, ShapeId};
use fireworks_canvas::renderer_engine::RendererEngine;
use fireworks_canvas::window_engine::{Resolution, WindowEngine, WindowInput};

pub struct DummyRenderer;

impl RendererEngine for DummyRenderer {
    fn render_frame(&mut self, scene: &Scene) -> usize {
        scene.len()
    }
    fn set_window_size(&mut self, _width: i32, _height: i32) {}
    fn set_canvas_size(&mut self, _width: f32, _height: f32) {}
    fn close(&mut self) {}
}

/// Renderer qui trace ses appels dans un journal partagé.
pub struct LoggingRenderer {
    pub log: Rc<RefCell<Vec<String>>>,
}

impl LoggingRenderer {
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Self { log: log.clone() }, log)
    }
}

impl RendererEngine for LoggingRenderer {
    fn render_frame(&mut self, scene: &Scene) -> usize {
        self.log
            .borrow_mut()
            .push(format!("render_frame {}", scene.len()));
        scene.len()
    }
    fn set_window_size(&mut self, width: i32, height: i32) {
        self.log
            .borrow_mut()
            .push(format!("set_window_size {}x{}", width, height));
    }
    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.log
            .borrow_mut()
            .push(format!("set_canvas_size {}x{}", width, height));
    }
    fn close(&mut self) {
        self.log.borrow_mut().push("close".into());
    }
}

/// Fenêtre sans GLFW : les entrées de chaque frame sont scriptées à l'avance.
pub struct ScriptedWindow {
    pub frames: VecDeque<Vec<WindowInput>>,
    pub menu_choices: VecDeque<Option<Resolution>>,
    pub screen: Option<(u32, u32)>,
    pub size: (u32, u32),
    pub should_close: bool,
    pub swaps: usize,
}

impl ScriptedWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frames: VecDeque::new(),
            menu_choices: VecDeque::new(),
            screen: Some((3840, 2160)),
            size: (width, height),
            should_close: false,
            swaps: 0,
        }
    }

    pub fn with_screen(mut self, screen: Option<(u32, u32)>) -> Self {
        self.screen = screen;
        self
    }

    pub fn push_frame(mut self, inputs: Vec<WindowInput>) -> Self {
        self.frames.push_back(inputs);
        self
    }

    pub fn push_menu_choice(mut self, choice: Option<Resolution>) -> Self {
        self.menu_choices.push_back(choice);
        self
    }
}

impl WindowEngine for ScriptedWindow {
    fn init(width: u32, height: u32, _title: &str) -> anyhow::Result<Self> {
        Ok(Self::new(width, height))
    }

    fn poll_events(&mut self) -> Vec<WindowInput> {
        self.frames.pop_front().unwrap_or_default()
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn get_size(&self) -> (i32, i32) {
        (self.size.0 as i32, self.size.1 as i32)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn screen_size(&self) -> Option<(u32, u32)> {
        self.screen
    }

    fn draw_resolution_menu(&mut self, _current: Resolution) -> Option<Resolution> {
        self.menu_choices.pop_front().flatten()
    }
}

/// Nombre de commandes `Delete` visant `id` dans un journal.
pub fn count_deletes(commands: &[DrawCommand], id: ShapeId) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Delete { id: d } if *d == id))
        .count()
}
