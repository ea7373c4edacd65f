//! Blocking console countdown.
//!
//! Prints the interval message once, then overwrites a single status line
//! once per second until the duration has elapsed. Runs to completion
//! uninterrupted; there is no mid-countdown cancellation.

use std::io::Write;
use std::time::Instant;

use chrono::Duration;
use colored::Colorize;

use crate::error::PomoError;
use crate::focus::timer::Timer;

/// Run a countdown for `duration`, announcing `message` first.
///
/// Polls wall-clock elapsed time once per second and rewrites the remaining
/// time as `MM:SS`. A zero (or negative) duration reports completion
/// immediately without sleeping.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn run<W: Write>(duration: Duration, message: &str, output: &mut W) -> Result<(), PomoError> {
    let mut timer = Timer::new(duration);

    writeln!(output, "{}", message.bold())?;

    let started = Instant::now();
    while !timer.is_complete() {
        write!(output, "Time remaining: {}\r", timer.format_remaining())?;
        output.flush()?;
        std::thread::sleep(std::time::Duration::from_secs(1));

        let elapsed = i64::try_from(started.elapsed().as_secs()).unwrap_or(i64::MAX);
        timer.sync_elapsed(elapsed);
    }

    writeln!(output, "{}", "Time's up!".green())?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_completes_without_countdown_line() {
        let mut out = Vec::new();
        run(Duration::zero(), "Focus!", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Focus!"));
        assert!(text.contains("Time's up!"));
        assert!(!text.contains("Time remaining"));
    }

    #[test]
    fn test_negative_duration_completes_immediately() {
        let mut out = Vec::new();
        run(Duration::seconds(-3), "Focus!", &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Time's up!"));
    }

    #[test]
    fn test_one_second_countdown_writes_remaining_line() {
        let mut out = Vec::new();
        run(Duration::seconds(1), "Focus!", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Time remaining: 00:01\r"));
        assert!(text.contains("Time's up!"));
    }
}
