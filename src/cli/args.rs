use std::path::PathBuf;

use chrono::Duration;
use clap::Parser;

use crate::config::Config;
use crate::error::PomoError;
use crate::focus::driver::SessionPlan;
use crate::focus::timer::parse_duration;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro task timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro task timer for the terminal

Manage a simple task list between Pomodoro cycles. pomo opens the task
menu first, then runs the requested number of focus/break cycles,
returning to the menu after each break.

DURATIONS:
  Durations are strings like '25m', '1h30m', or '90s'.
  A bare number means minutes. '0' skips an interval.

QUICK START:
  pomo                          25m focus / 5m break, prompts for a cycle count
  pomo --sessions 4             Run four cycles without the prompt
  pomo -f 50m -b 10m -s 2       Two long cycles

Settings live in ~/.pomo/config.yaml; flags override the file.")]
#[command(version)]
pub struct Cli {
    /// Focus interval length (e.g. '25m'; bare numbers are minutes)
    #[arg(short, long)]
    pub focus: Option<String>,

    /// Break interval length (e.g. '5m')
    #[arg(short = 'b', long = "break")]
    pub rest: Option<String>,

    /// Number of Pomodoro cycles to run (prompted interactively when omitted)
    #[arg(short, long)]
    pub sessions: Option<i64>,

    /// Path to an alternate config file
    #[arg(long, env = "POMO_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the focus duration from the flag, falling back to config.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Parse` if the flag value is not a valid duration.
    pub fn focus_duration(&self, config: &Config) -> Result<Duration, PomoError> {
        resolve_duration(
            self.focus.as_deref(),
            Duration::minutes(i64::from(config.focus.focus_minutes)),
        )
    }

    /// Resolve the break duration from the flag, falling back to config.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Parse` if the flag value is not a valid duration.
    pub fn rest_duration(&self, config: &Config) -> Result<Duration, PomoError> {
        resolve_duration(
            self.rest.as_deref(),
            Duration::minutes(i64::from(config.focus.break_minutes)),
        )
    }

    /// Build a session plan for the given cycle count.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Parse` if a duration flag is invalid.
    pub fn session_plan(&self, config: &Config, sessions: i64) -> Result<SessionPlan, PomoError> {
        Ok(SessionPlan::new(
            self.focus_duration(config)?,
            self.rest_duration(config)?,
            sessions,
        ))
    }
}

fn resolve_duration(flag: Option<&str>, fallback: Duration) -> Result<Duration, PomoError> {
    flag.map_or(Ok(fallback), |s| {
        parse_duration(s).ok_or_else(|| PomoError::Parse(format!("Invalid duration: {s}")))
    })
}
