use anyhow::Result;

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

pub struct ImguiSystem {
    pub context: imgui::Context,
    pub glfw: imgui_glfw_rs::ImguiGLFW,
}

pub trait WindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self>
    where
        Self: Sized;

    fn poll_events(&mut self);
    fn swap_buffers(&mut self);

    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);

    fn get_size(&self) -> (i32, i32);
    fn set_title(&mut self, title: &str);

    /// Passe la fenêtre en plein écran sur le moniteur principal, avec l'opacité
    /// donnée. Retourne la nouvelle taille (ou la taille courante si aucun
    /// moniteur n'est disponible).
    fn enter_overlay_mode(&mut self, opacity: f32) -> (i32, i32);

    fn get_events(&self) -> &WindowEvents;
    fn get_imgui_system_mut(&mut self) -> &mut ImguiSystem;

    // Helper method to get both window and imgui system for rendering
    fn get_window_and_imgui_mut(&mut self) -> (&mut glfw::PWindow, &mut ImguiSystem);
}
