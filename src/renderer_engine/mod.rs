pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod config;
pub use self::config::RendererConfig;

pub mod renderer;
pub use self::renderer::Renderer;

pub mod shader;

pub mod tools;
pub use self::tools::{setup_opengl_debug, show_opengl_context_info};

pub mod types;
pub use self::types::VertexGPU;
