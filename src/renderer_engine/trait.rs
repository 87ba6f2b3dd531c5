use crate::physic_engine::PhysicEngineFull;

pub trait RendererEngine {
    /// Dessine l'état courant du spectacle. Retourne le nombre de sommets envoyés au GPU.
    fn render_frame<P: PhysicEngineFull>(&mut self, physic: &P) -> usize;

    fn set_window_size(&mut self, width: i32, height: i32);

    fn close(&mut self);
}
