pub mod simulator;
pub use simulator::Simulator;

// Show engine (trajectoires, explosions, file d'affichage)
pub mod physic_engine;
pub use physic_engine::PhysicEngine;

// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;

// Window engine (GLFW + imgui)
pub mod window_engine;
pub use window_engine::WindowEngine;

// Alarme en tâche de fond
pub mod scheduler;

// Panneau de réglage et légende
pub mod ui;

pub mod countdown;
pub use countdown::Countdown;

// Utilities
pub mod utils;
