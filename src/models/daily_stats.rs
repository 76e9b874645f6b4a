//! The computed daily attendance result.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fixed note appended by callers to an attendance record when the measured
/// break exceeded the statutory 60 minutes.
pub const BREAK_EXCEEDED_NOTE: &str = "Exceeded break time (>60 min)";

/// The computed attendance figures for one day.
///
/// Produced once per check-out (or admin edit, or shift-sync run) and
/// persisted by the caller; the engine itself holds no state. All minute
/// fields are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Billable work minutes after rounding and break deduction.
    pub total_work_minutes: i64,
    /// Deducted break minutes (fixed policy: exactly 0 or 60).
    pub total_break_minutes: i64,
    /// Whether the measured break exceeded the statutory 60 minutes on a
    /// day long enough for the deduction to apply.
    pub break_exceeded: bool,
    /// Minutes worked beyond the scheduled (or rounded) day.
    pub overtime_minutes: i64,
    /// Paid-leave minutes credited for the day.
    pub paid_leave_minutes: i64,
    /// The effective check-in boundary used for the minute math, kept for
    /// audit display.
    pub rounded_check_in_at: DateTime<FixedOffset>,
    /// The effective check-out boundary used for the minute math. This is
    /// the shift-end-capped instant; callers needing the true end must add
    /// `overtime_minutes` back themselves.
    pub rounded_check_out_at: DateTime<FixedOffset>,
}

impl DailyStats {
    /// Returns the fixed admin note when the break was exceeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::calculation::calculate_daily_stats;
    /// use attendance_engine::models::BREAK_EXCEEDED_NOTE;
    ///
    /// let stats = calculate_daily_stats(
    ///     "2026-01-15T09:00:00+09:00",
    ///     "2026-01-15T18:00:00+09:00",
    ///     Some("2026-01-15T12:00:00+09:00"),
    ///     Some("2026-01-15T13:30:00+09:00"),
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(stats.break_note(), Some(BREAK_EXCEEDED_NOTE));
    /// ```
    pub fn break_note(&self) -> Option<&'static str> {
        self.break_exceeded.then_some(BREAK_EXCEEDED_NOTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn sample() -> DailyStats {
        DailyStats {
            total_work_minutes: 480,
            total_break_minutes: 60,
            break_exceeded: false,
            overtime_minutes: 0,
            paid_leave_minutes: 0,
            rounded_check_in_at: instant("2026-01-15T09:00:00+09:00"),
            rounded_check_out_at: instant("2026-01-15T18:00:00+09:00"),
        }
    }

    #[test]
    fn test_break_note_absent_when_not_exceeded() {
        assert_eq!(sample().break_note(), None);
    }

    #[test]
    fn test_break_note_present_when_exceeded() {
        let stats = DailyStats {
            break_exceeded: true,
            ..sample()
        };
        assert_eq!(stats.break_note(), Some(BREAK_EXCEEDED_NOTE));
    }

    #[test]
    fn test_serde_round_trip_preserves_offsets() {
        let stats = sample();
        let json = serde_json::to_string(&stats).unwrap();
        let back: DailyStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
        assert!(json.contains("+09:00"));
    }
}
