//! Focus timing.
//!
//! - [`timer`]: the countdown model plus duration parsing/formatting
//! - [`countdown`]: the blocking once-per-second console countdown
//! - [`driver`]: orchestration of repeated focus/break cycles

pub mod countdown;
pub mod driver;
pub mod timer;

pub use driver::{SessionDriver, SessionPlan};
pub use timer::{format_duration, format_duration_mmss, parse_duration, Timer};
