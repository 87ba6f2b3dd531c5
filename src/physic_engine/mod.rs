pub mod r#trait;
pub use r#trait::{PhysicEngine, PhysicEngineFull, PhysicEngineIterator};

pub mod types;
pub use self::types::{Color, Head, Position, Segment, UpdateResult};

pub mod trajectory;
pub use self::trajectory::{generate_trajectory, random_speed_factor, unit_heading, Trajectory};

pub mod explosion;
pub use self::explosion::{arm_heading, generate_explosion, Explosion};

pub mod launch_site;
pub use self::launch_site::{launch_angle_for, select_launch_site, LaunchSite};

pub mod firework;
pub use self::firework::{Firework, FireworkSpec, FireworkSpecBuilder};

pub mod display_queue;
pub use self::display_queue::{DisplayQueue, FireworkAnimation, FireworkPhase};

pub mod config;
pub use self::config::PhysicConfig;

pub mod physic_engine_show;
pub use self::physic_engine_show::PhysicEngineFireworks;
