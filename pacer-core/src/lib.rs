#![allow(clippy::new_without_default)]

pub mod budget;
pub mod clock;
mod error;
pub mod pacing;
pub mod rate;
pub mod speed;
mod throttle;

pub use budget::FrameBudget;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, ThrottleError};
pub use pacing::{PacingWindow, WaitStatus, MAX_SLICE_MS};
pub use rate::NativeRate;
pub use speed::{ScaleFactor, SpeedChange, SpeedPreset};
pub use throttle::{Throttle, ThrottleConfig};
