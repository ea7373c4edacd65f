//! Countdown timer model and duration parsing/formatting.
//!
//! Durations are whole seconds internally. User-facing values are duration
//! strings like `"25m"`, `"1h30m"`, or `"90s"`; a bare number means minutes.

use chrono::Duration;

/// A countdown timer.
///
/// Pure state machine: one [`Timer::tick`] per elapsed second. The console
/// countdown in [`crate::focus::countdown`] supplies the wall-clock pacing.
#[derive(Debug, Clone)]
pub struct Timer {
    total_seconds: i64,
    remaining_seconds: i64,
}

impl Timer {
    /// Create a timer for the given duration. Negative durations behave
    /// like zero: the timer is complete from the start.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let seconds = duration.num_seconds().max(0);
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
        }
    }

    /// Advance the timer by one second.
    ///
    /// Returns true on the tick that completes the countdown.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        self.remaining_seconds == 0
    }

    /// Resynchronize the timer against wall-clock elapsed seconds.
    ///
    /// Sleeps can overshoot a second, so the console countdown corrects the
    /// timer from measured elapsed time instead of trusting one tick per
    /// loop iteration.
    pub fn sync_elapsed(&mut self, elapsed_seconds: i64) {
        self.remaining_seconds = (self.total_seconds - elapsed_seconds).clamp(0, self.total_seconds);
    }

    /// Whether the countdown has elapsed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Remaining time.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_seconds)
    }

    /// Elapsed time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::seconds(self.total_seconds - self.remaining_seconds)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is interpreted as minutes. Returns `None` for anything
/// that doesn't amount to a positive duration, except "0"/"0s" and friends,
/// which parse to a zero duration (useful for skipping an interval).
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    // Bare number: minutes.
    if let Ok(minutes) = s.parse::<i64>() {
        if minutes < 0 {
            return None;
        }
        return Some(Duration::minutes(minutes));
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            if current_num.is_empty() {
                return None;
            }
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            match c {
                'h' => total_seconds += num * 3600,
                'm' => total_seconds += num * 60,
                's' => total_seconds += num,
                _ => return None,
            }
        }
    }

    // Trailing number without a unit: minutes.
    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds += num * 60;
    }

    Some(Duration::seconds(total_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_down() {
        let mut timer = Timer::new(Duration::seconds(3));

        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert!(timer.is_complete());
    }

    #[test]
    fn test_zero_duration_is_complete_immediately() {
        let timer = Timer::new(Duration::zero());
        assert!(timer.is_complete());
        assert_eq!(timer.remaining(), Duration::zero());
    }

    #[test]
    fn test_negative_duration_behaves_like_zero() {
        let timer = Timer::new(Duration::seconds(-5));
        assert!(timer.is_complete());
    }

    #[test]
    fn test_tick_past_complete_stays_complete() {
        let mut timer = Timer::new(Duration::seconds(1));
        assert!(timer.tick());
        assert!(!timer.tick());
        assert!(timer.is_complete());
    }

    #[test]
    fn test_sync_elapsed_tracks_wall_clock() {
        let mut timer = Timer::new(Duration::seconds(10));
        timer.sync_elapsed(4);
        assert_eq!(timer.remaining(), Duration::seconds(6));

        // Overshoot clamps to complete rather than going negative.
        timer.sync_elapsed(25);
        assert!(timer.is_complete());
        assert_eq!(timer.remaining(), Duration::zero());
    }

    #[test]
    fn test_format_remaining() {
        let timer = Timer::new(Duration::seconds(90));
        assert_eq!(timer.format_remaining(), "01:30");
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(10)), "10 seconds");
    }

    #[test]
    fn test_parse_duration_bare_number_is_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("1h30m"), Some(Duration::minutes(90)));
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_zero_allowed() {
        assert_eq!(parse_duration("0"), Some(Duration::zero()));
        assert_eq!(parse_duration("0s"), Some(Duration::zero()));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("-5").is_none());
        assert!(parse_duration("m5").is_none());
    }
}
