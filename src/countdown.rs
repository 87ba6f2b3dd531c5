use glfw::{Action, Key};
use log::{debug, info};

use crate::scheduler::{AlarmClock, AlarmEvent, AlarmSettings};
use crate::ui::SetupForm;
use crate::window_engine::WindowEngine;

/// Couleur de fond du panneau de réglage.
const PANEL_CLEAR_COLOR: [f32; 3] = [0.94, 0.94, 0.94];

/// Panneau de réglage : affiche le formulaire et attend le déclenchement de l'alarme.
///
/// La fenêtre est empruntée : une fois l'alarme déclenchée, la même fenêtre
/// devient l'overlay du spectacle.
pub struct Countdown<'a, W: WindowEngine> {
    window_engine: &'a mut W,
    alarm: &'a AlarmClock,
    form: SetupForm,
}

impl<'a, W: WindowEngine> Countdown<'a, W> {
    pub fn new(window_engine: &'a mut W, alarm: &'a AlarmClock, settings: &AlarmSettings) -> Self {
        Self {
            window_engine,
            alarm,
            form: SetupForm::new(settings),
        }
    }

    /// Boucle jusqu'au déclenchement (`Some`) ou à la fermeture de la fenêtre (`None`).
    pub fn run(&mut self) -> Option<AlarmEvent> {
        info!("🕒 Setup panel open, waiting for the alarm");
        loop {
            if let Some(event) = self.step() {
                return Some(event);
            }
            if self.window_engine.should_close() {
                info!("👋 Setup panel closed before the alarm fired");
                return None;
            }
        }
    }

    /// Une image du panneau. Retourne l'événement de l'alarme s'il est arrivé.
    pub fn step(&mut self) -> Option<AlarmEvent> {
        self.window_engine.poll_events();

        let events: Vec<_> = glfw::flush_messages(self.window_engine.get_events()).collect();
        for (_, event) in events {
            match event {
                glfw::WindowEvent::FramebufferSize(w, h) => unsafe {
                    gl::Viewport(0, 0, w, h);
                },
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    self.window_engine.set_should_close(true);
                }
                _ => {}
            }
            let imgui_system = self.window_engine.get_imgui_system_mut();
            imgui_system
                .glfw
                .handle_event(&mut imgui_system.context, &event);
        }

        if let Some(event) = self.alarm.try_fired() {
            let AlarmEvent::Fired { target, caption } = &event;
            info!("🔔 Alarm fired at {} (\"{}\")", target.format("%H:%M"), caption);
            return Some(event);
        }

        let [r, g, b] = PANEL_CLEAR_COLOR;
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        let submitted = {
            let (window, imgui_system) = self.window_engine.get_window_and_imgui_mut();
            let ui = imgui_system.glfw.frame(window, &mut imgui_system.context);
            self.form.draw(ui)
        };
        {
            let (window, imgui_system) = self.window_engine.get_window_and_imgui_mut();
            imgui_system.glfw.draw(&mut imgui_system.context, window);
        }

        if let Some(settings) = submitted {
            if self.alarm.reschedule(settings.clone()) {
                let title = format!(
                    "Fireworks Timer - {:02}:{:02}",
                    settings.hour(),
                    settings.minute()
                );
                self.window_engine.set_title(&title);
            } else {
                debug!("Reschedule ignored, alarm already fired or cancelled");
            }
        }

        self.window_engine.swap_buffers();
        None
    }
}
