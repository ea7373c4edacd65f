//! Configuration management for pomo.
//!
//! Settings load from `~/.pomo/config.yaml`; missing files fall back to
//! defaults.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, FocusConfig};
