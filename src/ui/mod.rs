pub mod caption;
pub use self::caption::draw_caption;

pub mod setup_panel;
pub use self::setup_panel::SetupForm;
