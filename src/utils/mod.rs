pub mod glfw_window;
pub use self::glfw_window::MonitorPlacement;

pub mod tools;
pub use self::tools::show_rust_core_dependencies;
