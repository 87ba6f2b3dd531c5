use glfw::{Monitor, Window, WindowMode};

/// Placement d'une fenêtre relativement à un moniteur.
pub trait MonitorPlacement {
    /// Centre la fenêtre (mode fenêtré) sur le moniteur.
    fn center_on(&mut self, monitor: &Monitor);

    /// Passe la fenêtre en plein écran sur le moniteur.
    /// Retourne la résolution retenue, ou `None` si le mode vidéo est inconnu.
    fn cover(&mut self, monitor: &Monitor) -> Option<(i32, i32)>;
}

impl MonitorPlacement for Window {
    fn center_on(&mut self, monitor: &Monitor) {
        if let Some(mode) = monitor.get_video_mode() {
            let (monitor_x, monitor_y) = monitor.get_pos();
            let (window_w, window_h) = self.get_size();

            self.set_pos(
                monitor_x + ((mode.width as i32) - window_w) / 2,
                monitor_y + ((mode.height as i32) - window_h) / 2,
            );
        }
    }

    fn cover(&mut self, monitor: &Monitor) -> Option<(i32, i32)> {
        let mode = monitor.get_video_mode()?;
        self.set_monitor(
            WindowMode::FullScreen(monitor),
            0,
            0,
            mode.width,
            mode.height,
            Some(mode.refresh_rate),
        );
        Some((mode.width as i32, mode.height as i32))
    }
}
