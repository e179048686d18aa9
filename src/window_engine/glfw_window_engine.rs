use super::r#trait::{WindowEngine, WindowInput};
use anyhow::{anyhow, Result};
use glfw::{Action, Context, Key};
use imgui::Context as ImContext;
use imgui_glfw_rs::ImguiGLFW;
use log::{info, warn};

use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};
use crate::utils::CenterWindow;
use crate::window_engine::resolution::Resolution;

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

pub struct ImguiSystem {
    pub context: imgui::Context,
    pub glfw: ImguiGLFW,
}

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    imgui_system: ImguiSystem,
    center_on_screen: bool,
}

impl GlfwWindowEngine {
    /// Recentre la fenêtre sur l'écran principal à chaque changement de taille.
    pub fn set_center_on_screen(&mut self, value: bool) {
        self.center_on_screen = value;
        if value {
            self.window.center_on_primary_monitor();
        }
    }

    fn shortcut(digit: usize) -> Option<WindowInput> {
        Resolution::from_shortcut(digit).map(WindowInput::SelectResolution)
    }

    fn translate_event(event: &glfw::WindowEvent) -> Option<WindowInput> {
        match *event {
            glfw::WindowEvent::Close => Some(WindowInput::Close),
            glfw::WindowEvent::FramebufferSize(w, h) => Some(WindowInput::Resized(w, h)),
            glfw::WindowEvent::Key(key, _, Action::Press, _) => match key {
                Key::Escape => Some(WindowInput::Close),
                Key::R => Some(WindowInput::ReloadConfig),
                Key::Num1 | Key::Kp1 => Self::shortcut(1),
                Key::Num2 | Key::Kp2 => Self::shortcut(2),
                Key::Num3 | Key::Kp3 => Self::shortcut(3),
                Key::Num4 | Key::Kp4 => Self::shortcut(4),
                Key::Num5 | Key::Kp5 => Self::shortcut(5),
                _ => None,
            },
            _ => None,
        }
    }
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: u32, height: u32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| anyhow!("Impossible d'initialiser GLFW"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        // taille imposée par le menu des résolutions uniquement
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW"))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        unsafe {
            show_opengl_context_info();
            setup_opengl_debug();
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let mut imgui = ImContext::create();
        imgui.set_ini_filename(None);
        imgui.style_mut().use_dark_colors();

        let imgui_glfw = ImguiGLFW::new(&mut imgui, &mut window);

        Ok(Self {
            glfw,
            window,
            events,
            imgui_system: ImguiSystem {
                context: imgui,
                glfw: imgui_glfw,
            },
            center_on_screen: false,
        })
    }

    fn poll_events(&mut self) -> Vec<WindowInput> {
        self.glfw.poll_events();

        let events: Vec<_> = glfw::flush_messages(&self.events).collect();
        let mut inputs = Vec::with_capacity(events.len());
        for (_, event) in events {
            if let Some(input) = Self::translate_event(&event) {
                inputs.push(input);
            }
            self.imgui_system
                .glfw
                .handle_event(&mut self.imgui_system.context, &event);
        }
        inputs
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.window.set_size(width as i32, height as i32);
        if self.center_on_screen {
            self.window.center_on_primary_monitor();
        }
    }

    fn screen_size(&self) -> Option<(u32, u32)> {
        let mut glfw = self.glfw.clone();
        let size = glfw.with_primary_monitor(|_, primary_monitor| {
            primary_monitor
                .and_then(|mon| mon.get_video_mode())
                .map(|mode| (mode.width, mode.height))
        });
        if size.is_none() {
            warn!("⚠️ No primary monitor video mode available");
        }
        size
    }

    fn draw_resolution_menu(&mut self, current: Resolution) -> Option<Resolution> {
        let (width, height) = self.window.get_size();
        let mut chosen = None;

        let sys = &mut self.imgui_system;
        let ui = sys.glfw.frame(&mut self.window, &mut sys.context);
        ui.window("##resolution_menu")
            .position(
                [width as f32 * 0.5, height as f32 - 20.0],
                imgui::Condition::Always,
            )
            .position_pivot([0.5, 1.0])
            .title_bar(false)
            .resizable(false)
            .movable(false)
            .always_auto_resize(true)
            .bg_alpha(0.6)
            .build(|| {
                ui.set_next_item_width(120.0);
                if let Some(_combo) = ui.begin_combo("##resolution", current.name()) {
                    for r in Resolution::ALL {
                        let selected = r == current;
                        let clicked = ui.selectable_config(r.name()).selected(selected).build();
                        if clicked && !selected {
                            chosen = Some(r);
                        }
                    }
                }
            });
        sys.glfw.draw(&mut sys.context, &mut self.window);

        chosen
    }
}
