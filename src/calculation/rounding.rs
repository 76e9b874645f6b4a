//! Quarter-hour rounding primitives.
//!
//! This module provides the direction-dependent clock rounding used for
//! attendance boundaries: check-ins round up to the next quarter hour and
//! check-outs round down to the previous one, both against the employee.

use chrono::{DateTime, Duration, FixedOffset, Timelike};

/// The rounding granularity in minutes.
pub const QUARTER_HOUR_MINUTES: i64 = 15;

/// Rounds an instant up to the next quarter-hour boundary.
///
/// Seconds and sub-second parts are truncated first; a minute-of-hour that
/// is already a multiple of 15 is left in place. The wall clock of the
/// instant's own fixed offset is used, never the process-local timezone.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::round_up_to_quarter_hour;
/// use chrono::DateTime;
///
/// let t = DateTime::parse_from_rfc3339("2026-01-15T09:01:00+09:00").unwrap();
/// assert_eq!(round_up_to_quarter_hour(t).to_rfc3339(), "2026-01-15T09:15:00+09:00");
///
/// let exact = DateTime::parse_from_rfc3339("2026-01-15T09:00:00+09:00").unwrap();
/// assert_eq!(round_up_to_quarter_hour(exact), exact);
/// ```
pub fn round_up_to_quarter_hour(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let t = truncate_to_minute(t);
    let remainder = i64::from(t.minute()) % QUARTER_HOUR_MINUTES;
    if remainder == 0 {
        t
    } else {
        t + Duration::minutes(QUARTER_HOUR_MINUTES - remainder)
    }
}

/// Rounds an instant down to the previous quarter-hour boundary.
///
/// Symmetric floor of [`round_up_to_quarter_hour`]: seconds and sub-second
/// parts are truncated, then the minute-of-hour is snapped back to the
/// nearest multiple of 15 at or before it.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::round_down_to_quarter_hour;
/// use chrono::DateTime;
///
/// let t = DateTime::parse_from_rfc3339("2026-01-15T17:50:00+09:00").unwrap();
/// assert_eq!(round_down_to_quarter_hour(t).to_rfc3339(), "2026-01-15T17:45:00+09:00");
/// ```
pub fn round_down_to_quarter_hour(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let t = truncate_to_minute(t);
    let remainder = i64::from(t.minute()) % QUARTER_HOUR_MINUTES;
    t - Duration::minutes(remainder)
}

/// Drops seconds and sub-second parts without touching the minute.
fn truncate_to_minute(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    t - Duration::seconds(i64::from(t.second())) - Duration::nanoseconds(i64::from(t.nanosecond()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    // ==========================================================================
    // RND-001..004: round up
    // ==========================================================================

    #[test]
    fn test_rnd_001_round_up_one_past_hour() {
        let t = instant("2026-01-15T09:01:00+09:00");
        assert_eq!(round_up_to_quarter_hour(t), instant("2026-01-15T09:15:00+09:00"));
    }

    #[test]
    fn test_rnd_002_round_up_one_past_quarter() {
        let t = instant("2026-01-15T09:16:00+09:00");
        assert_eq!(round_up_to_quarter_hour(t), instant("2026-01-15T09:30:00+09:00"));
    }

    #[test]
    fn test_rnd_003_round_up_on_boundary_is_identity() {
        let t = instant("2026-01-15T09:00:00+09:00");
        assert_eq!(round_up_to_quarter_hour(t), t);
        let q = instant("2026-01-15T09:45:00+09:00");
        assert_eq!(round_up_to_quarter_hour(q), q);
    }

    #[test]
    fn test_rnd_004_round_up_rolls_over_hour_and_day() {
        let t = instant("2026-01-15T09:46:00+09:00");
        assert_eq!(round_up_to_quarter_hour(t), instant("2026-01-15T10:00:00+09:00"));
        let late = instant("2026-01-15T23:50:00+09:00");
        assert_eq!(round_up_to_quarter_hour(late), instant("2026-01-16T00:00:00+09:00"));
    }

    // ==========================================================================
    // RND-005..007: round down
    // ==========================================================================

    #[test]
    fn test_rnd_005_round_down_just_before_hour() {
        let t = instant("2026-01-15T17:50:00+09:00");
        assert_eq!(round_down_to_quarter_hour(t), instant("2026-01-15T17:45:00+09:00"));
    }

    #[test]
    fn test_rnd_006_round_down_just_before_quarter() {
        let t = instant("2026-01-15T17:44:00+09:00");
        assert_eq!(round_down_to_quarter_hour(t), instant("2026-01-15T17:30:00+09:00"));
    }

    #[test]
    fn test_rnd_007_round_down_on_boundary_is_identity() {
        let t = instant("2026-01-15T17:45:00+09:00");
        assert_eq!(round_down_to_quarter_hour(t), t);
    }

    // ==========================================================================
    // RND-008..010: seconds, offsets, idempotence
    // ==========================================================================

    #[test]
    fn test_rnd_008_seconds_are_truncated_before_rounding() {
        // 09:00:30 truncates to 09:00, already a boundary.
        let t = instant("2026-01-15T09:00:30+09:00");
        assert_eq!(round_up_to_quarter_hour(t), instant("2026-01-15T09:00:00+09:00"));
        // 17:45:59 truncates to 17:45, already a boundary.
        let u = instant("2026-01-15T17:45:59+09:00");
        assert_eq!(round_down_to_quarter_hour(u), instant("2026-01-15T17:45:00+09:00"));
    }

    #[test]
    fn test_rnd_009_rounding_respects_input_offset() {
        // Rounding works on the instant's own wall clock and keeps its
        // offset.
        let t = instant("2026-01-15T09:01:00-05:00");
        let rounded = round_up_to_quarter_hour(t);
        assert_eq!(rounded, instant("2026-01-15T09:15:00-05:00"));
        assert_eq!(rounded.offset(), t.offset());
    }

    #[test]
    fn test_rnd_010_rounding_is_idempotent() {
        for s in [
            "2026-01-15T09:01:23+09:00",
            "2026-01-15T09:16:00+00:00",
            "2026-01-15T17:44:59-08:00",
        ] {
            let t = instant(s);
            let up = round_up_to_quarter_hour(t);
            assert_eq!(round_up_to_quarter_hour(up), up);
            let down = round_down_to_quarter_hour(t);
            assert_eq!(round_down_to_quarter_hour(down), down);
            assert!(down <= t);
            assert!(down <= up);
        }
    }
}
