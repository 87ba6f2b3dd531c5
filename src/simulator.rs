use crate::physic_engine::{config::PhysicConfig, PhysicEngineFull, UpdateResult};
use crate::renderer_engine::{RendererConfig, RendererEngine};
use crate::ui::draw_caption;
use crate::window_engine::WindowEngine;
use glfw::{Action, Key};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Intervalle entre deux logs de statistiques.
const STATS_LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Boucle de l'overlay : anime le spectacle et affiche la légende
/// jusqu'à ce que l'utilisateur ferme la fenêtre.
pub struct Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    W: WindowEngine,
{
    renderer_engine: R,
    physic_engine: P,
    window_engine: W,

    caption: String,
    renderer_config: RendererConfig,
    physic_config_path: Option<PathBuf>,

    frames: u64,
    last_time: Instant,
    last_log: Instant,
    vertices_drawn: usize,
    first_frame: bool,
}

impl<R, P, W> Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    W: WindowEngine,
{
    pub fn new(
        renderer_engine: R,
        physic_engine: P,
        window_engine: W,
        caption: impl Into<String>,
        renderer_config: RendererConfig,
    ) -> Self {
        Self {
            renderer_engine,
            physic_engine,
            window_engine,
            caption: caption.into(),
            renderer_config,
            physic_config_path: None,
            frames: 0,
            last_time: Instant::now(),
            last_log: Instant::now(),
            vertices_drawn: 0,
            first_frame: true,
        }
    }

    /// Fichier relu par la touche `R`.
    pub fn with_physic_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.physic_config_path = Some(path.into());
        self
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("🎆 Overlay open: \"{}\"", self.caption);
        self.last_time = Instant::now();

        while self.step() {}

        info!("👋 Overlay dismissed after {} frames", self.frames);
        Ok(())
    }

    pub fn step(&mut self) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        let mut reload_config = false;

        self.window_engine.poll_events();

        // Collect events into a Vec to avoid borrow checker issues
        let events: Vec<_> = glfw::flush_messages(self.window_engine.get_events()).collect();

        for (_, event) in events {
            match event {
                glfw::WindowEvent::FramebufferSize(w, h) => {
                    self.renderer_engine.set_window_size(w, h);
                    self.physic_engine.set_window_size(w as f32, h as f32);
                    debug!("🖥️ Overlay resized: {} x {}", w, h);
                }
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    self.window_engine.set_should_close(true);
                }
                glfw::WindowEvent::Key(Key::R, _, Action::Press, _) => {
                    reload_config = true;
                }
                _ => {}
            }
            let imgui_system = self.window_engine.get_imgui_system_mut();
            imgui_system
                .glfw
                .handle_event(&mut imgui_system.context, &event);
        }
        if reload_config {
            self.reload_config();
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_time).as_secs_f32();
        self.last_time = now;
        self.frames += 1;

        let update_result = self.physic_engine.update(delta);
        Self::log_update(&update_result);

        self.vertices_drawn = self.renderer_engine.render_frame(&self.physic_engine);

        {
            let (window, imgui_system) = self.window_engine.get_window_and_imgui_mut();
            let ui = imgui_system.glfw.frame(window, &mut imgui_system.context);
            draw_caption(ui, &self.caption, &self.renderer_config);
        }
        {
            let (win, sys) = self.window_engine.get_window_and_imgui_mut();
            sys.glfw.draw(&mut sys.context, win);
        }

        self.window_engine.swap_buffers();

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }
        if self.last_log.elapsed() >= STATS_LOG_INTERVAL {
            debug!(
                "Frames: {} | vertices drawn: {} | show over: {}",
                self.frames,
                self.vertices_drawn,
                self.physic_engine.is_show_over()
            );
            self.last_log = Instant::now();
        }

        true
    }

    fn log_update(update_result: &UpdateResult) {
        if let Some(pos) = update_result.launched {
            debug!("🚀 Firework launched at ({:.1}, {:.1})", pos.x, pos.y);
        }
        if let Some(pos) = update_result.exploded {
            debug!("💥 Explosion at ({:.1}, {:.1})", pos.x, pos.y);
        }
        if update_result.retired > 0 {
            debug!("🧹 {} firework(s) cleared", update_result.retired);
        }
        if update_result.show_finished {
            info!("✨ Animation finished, overlay stays open until dismissed");
        }
    }

    pub fn reload_config(&mut self) {
        let Some(path) = self.physic_config_path.as_ref() else {
            return;
        };
        match PhysicConfig::from_file(&path.to_string_lossy()) {
            Ok(physic_config) => {
                info!("Physic config reloaded:\n{:#?}", physic_config);
                self.physic_engine.reload_config(&physic_config);
            }
            Err(e) => warn!("⚠️ Physic config reload failed ({}): {}", path.display(), e),
        }
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
        self.physic_engine.close();
        // Window engine cleanup happens automatically when dropped
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
