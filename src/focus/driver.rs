//! Session driver.
//!
//! Runs the requested number of Pomodoro cycles: focus countdown, break
//! countdown, then a task-manager visit before the next cycle.

use std::io::{BufRead, Write};

use chrono::Duration;
use colored::Colorize;

use crate::core::state::AppState;
use crate::error::PomoError;
use crate::focus::countdown;
use crate::manager;

/// Durations and repetition count for a run.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    /// Length of each focus interval.
    pub focus: Duration,
    /// Length of each break interval.
    pub rest: Duration,
    /// Number of focus/break cycles to run.
    pub sessions: u32,
}

impl SessionPlan {
    /// Build a plan, clamping a negative session count to zero.
    #[must_use]
    pub fn new(focus: Duration, rest: Duration, sessions: i64) -> Self {
        Self {
            focus,
            rest,
            sessions: u32::try_from(sessions.max(0)).unwrap_or(u32::MAX),
        }
    }
}

/// Orchestrates focus/break cycles interleaved with task management.
#[derive(Debug)]
pub struct SessionDriver {
    plan: SessionPlan,
}

impl SessionDriver {
    /// Create a driver for the given plan.
    #[must_use]
    pub const fn new(plan: SessionPlan) -> Self {
        Self { plan }
    }

    /// The plan this driver runs.
    #[must_use]
    pub const fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    /// Run every planned cycle.
    ///
    /// Each cycle is: focus countdown, break announcement, break countdown,
    /// task manager. A plan with zero sessions returns immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails.
    pub fn run<R: BufRead, W: Write>(
        &self,
        state: &mut AppState,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), PomoError> {
        for _ in 0..self.plan.sessions {
            countdown::run(self.plan.focus, "Pomodoro started. Focus!", output)?;
            writeln!(output, "\n{}", "Take a short break.".cyan())?;
            countdown::run(self.plan.rest, "Short break. Relax!", output)?;
            writeln!(output)?;
            manager::run(state, input, output)?;
        }
        Ok(())
    }
}
