use super::r#trait::{ImguiSystem, WindowEngine, WindowEvents};
use anyhow::{anyhow, Result};
use glfw::Context;
use imgui::Context as ImContext;
use imgui_glfw_rs::ImguiGLFW;
use log::{info, warn};

use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};
use crate::utils::MonitorPlacement;

/// Taille de la police imgui par défaut (la légende est agrandie à l'affichage).
const UI_FONT_SIZE: f32 = 18.0;

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    imgui_system: ImguiSystem,
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| anyhow!("Impossible d'initialiser GLFW"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        // nécessaire pour l'overlay semi-transparent
        glfw.window_hint(glfw::WindowHint::TransparentFramebuffer(true));

        let (mut window, events) = glfw
            .create_window(
                width.max(1) as u32,
                height.max(1) as u32,
                title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW ({} x {})", width, height))?;

        window.make_current();
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        glfw.with_primary_monitor(|_, primary_monitor| {
            if let Some(monitor) = primary_monitor {
                window.center_on(monitor);
            }
        });

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| {
            window
                .get_proc_address(s)
                .map_or(std::ptr::null(), |f| f as *const _)
        });
        unsafe {
            show_opengl_context_info();
            setup_opengl_debug();

            gl::Enable(gl::PROGRAM_POINT_SIZE);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let mut imgui = ImContext::create();
        imgui.set_ini_filename(None);
        imgui.fonts().add_font(&[imgui::FontSource::DefaultFontData {
            config: Some(imgui::FontConfig {
                size_pixels: UI_FONT_SIZE,
                ..Default::default()
            }),
        }]);
        imgui.fonts().build_rgba32_texture();
        imgui.style_mut().use_light_colors();

        let imgui_glfw = ImguiGLFW::new(&mut imgui, &mut window)?;

        Ok(Self {
            glfw,
            window,
            events,
            imgui_system: ImguiSystem {
                context: imgui,
                glfw: imgui_glfw,
            },
        })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
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

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn enter_overlay_mode(&mut self, opacity: f32) -> (i32, i32) {
        let mut glfw = self.glfw.clone();
        let window = &mut self.window;

        let size = glfw.with_primary_monitor(|_, primary_monitor| {
            primary_monitor.and_then(|monitor| window.cover(monitor))
        });

        let size = match size {
            Some(size) => {
                info!("🖥️ Overlay fullscreen: {} x {}", size.0, size.1);
                size
            }
            None => {
                warn!("⚠️ Could not get primary monitor video mode, staying windowed");
                self.window.get_size()
            }
        };

        self.window.set_opacity(opacity.clamp(0.0, 1.0));
        self.window.focus();
        size
    }

    fn get_events(&self) -> &WindowEvents {
        &self.events
    }

    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem {
        &mut self.imgui_system
    }

    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem) {
        (&mut self.window, &mut self.imgui_system)
    }
}
