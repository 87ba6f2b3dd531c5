pub mod alarm;
pub use self::alarm::{AlarmError, AlarmSettings};

pub mod clock;
pub use self::clock::{Clock, ManualClock, SystemClock};

pub mod alarm_clock;
pub use self::alarm_clock::{AlarmClock, AlarmEvent, CancelHandle};
