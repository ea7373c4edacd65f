//! pomo - A Pomodoro task timer for the terminal
//!
//! This crate combines a simple task list with a Pomodoro-style focus timer.
//! Tasks are added and completed between timer cycles, all from one
//! sequential console flow.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod focus;
pub mod manager;
pub mod output;

pub use cli::args::Cli;
pub use error::PomoError;
pub use self::core::state::AppState;
