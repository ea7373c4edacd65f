//! Error types for pomo.
//!
//! Recoverable user-facing conditions ("task not found", "no tasks to
//! complete") are modeled as values in [`crate::core::state::CompleteOutcome`],
//! not as errors. Everything here is a genuine failure of the surrounding
//! machinery: bad configuration, unparseable input at the CLI boundary, or
//! the console itself going away.

use thiserror::Error;

/// Errors that can occur in pomo.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A value could not be parsed (durations, session counts).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Console I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
