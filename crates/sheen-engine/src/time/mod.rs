//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to a host
//! scheduler:
//! - `FrameClock` turns presented frames into clamped delta times
//! - `RepeatingAnimator` turns delta times into looping animation values

mod animator;
mod frame_clock;

pub use animator::RepeatingAnimator;
pub use frame_clock::{FrameClock, FrameTime};
