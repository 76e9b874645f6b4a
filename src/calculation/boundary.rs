//! Shift-boundary-aware check-in and check-out resolution.
//!
//! This module turns raw punch instants into the effective boundaries used
//! for the minute math. Early arrivals are snapped forward to the shift
//! start (no credit), early departures round down, and departures past the
//! shift end are capped at it with the excess tracked separately as
//! overtime minutes.

use chrono::{DateTime, FixedOffset, NaiveTime};

use super::rounding::{round_down_to_quarter_hour, round_up_to_quarter_hour};

/// The result of resolving a raw check-out against the shift end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutResolution {
    /// The effective check-out boundary, capped at the shift end when the
    /// employee stayed past it.
    pub effective_check_out: DateTime<FixedOffset>,
    /// Whole minutes worked past the shift end, never negative. Zero when
    /// the shift has no end time.
    pub overtime_minutes: i64,
}

/// Resolves the effective check-in boundary for a raw check-in instant.
///
/// With no shift start defined the check-in simply rounds up to the next
/// quarter hour. With one defined, arriving at or before it yields the
/// shift start exactly (no credit for early arrival), while arriving after
/// it rounds up against the employee.
///
/// The shift start is interpreted on the calendar day of `day_ref`, in
/// `day_ref`'s own fixed offset.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::resolve_check_in;
/// use chrono::{DateTime, NaiveTime};
///
/// let early = DateTime::parse_from_rfc3339("2026-01-15T08:40:00+09:00").unwrap();
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let resolved = resolve_check_in(early, Some(start), early);
/// assert_eq!(resolved.to_rfc3339(), "2026-01-15T09:00:00+09:00");
/// ```
pub fn resolve_check_in(
    check_in: DateTime<FixedOffset>,
    shift_start: Option<NaiveTime>,
    day_ref: DateTime<FixedOffset>,
) -> DateTime<FixedOffset> {
    match shift_start {
        None => round_up_to_quarter_hour(check_in),
        Some(start) => {
            let shift_start_instant = instant_on_day(day_ref, start);
            if check_in <= shift_start_instant {
                shift_start_instant
            } else {
                round_up_to_quarter_hour(check_in)
            }
        }
    }
}

/// Resolves the effective check-out boundary and clock overtime for a raw
/// check-out instant.
///
/// With no shift end defined the check-out rounds down with zero overtime.
/// Leaving at or before the shift end rounds down with zero overtime (early
/// departure rounds against the employee). Leaving after it caps the
/// boundary at the shift end and reports the rounded excess as overtime
/// minutes instead of folding it into the boundary instant.
///
/// The shift end is interpreted on the calendar day of `day_ref`, in
/// `day_ref`'s own fixed offset.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::resolve_check_out;
/// use chrono::{DateTime, NaiveTime};
///
/// let late = DateTime::parse_from_rfc3339("2026-01-15T18:35:00+09:00").unwrap();
/// let end = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
/// let resolution = resolve_check_out(late, Some(end), late);
/// assert_eq!(resolution.effective_check_out.to_rfc3339(), "2026-01-15T18:00:00+09:00");
/// assert_eq!(resolution.overtime_minutes, 30);
/// ```
pub fn resolve_check_out(
    check_out: DateTime<FixedOffset>,
    shift_end: Option<NaiveTime>,
    day_ref: DateTime<FixedOffset>,
) -> CheckOutResolution {
    match shift_end {
        None => CheckOutResolution {
            effective_check_out: round_down_to_quarter_hour(check_out),
            overtime_minutes: 0,
        },
        Some(end) => {
            let shift_end_instant = instant_on_day(day_ref, end);
            if check_out <= shift_end_instant {
                CheckOutResolution {
                    effective_check_out: round_down_to_quarter_hour(check_out),
                    overtime_minutes: 0,
                }
            } else {
                let rounded_raw = round_down_to_quarter_hour(check_out);
                CheckOutResolution {
                    effective_check_out: shift_end_instant,
                    overtime_minutes: (rounded_raw - shift_end_instant).num_minutes().max(0),
                }
            }
        }
    }
}

/// Places a wall-clock time on the calendar day of `day_ref`, in the same
/// fixed offset.
fn instant_on_day(day_ref: DateTime<FixedOffset>, wall_clock: NaiveTime) -> DateTime<FixedOffset> {
    let offset = *day_ref.offset();
    let local = day_ref.date_naive().and_time(wall_clock);
    DateTime::from_naive_utc_and_offset(local - offset, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn wall_clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // ==========================================================================
    // CI-001..004: check-in resolution
    // ==========================================================================

    #[test]
    fn test_ci_001_no_shift_start_rounds_up() {
        let t = instant("2026-01-15T09:07:00+09:00");
        assert_eq!(resolve_check_in(t, None, t), instant("2026-01-15T09:15:00+09:00"));
    }

    #[test]
    fn test_ci_002_early_arrival_gets_no_credit() {
        let t = instant("2026-01-15T08:40:00+09:00");
        let resolved = resolve_check_in(t, Some(wall_clock(9, 0)), t);
        assert_eq!(resolved, instant("2026-01-15T09:00:00+09:00"));
    }

    #[test]
    fn test_ci_003_arrival_exactly_on_start_is_start() {
        let t = instant("2026-01-15T09:00:00+09:00");
        let resolved = resolve_check_in(t, Some(wall_clock(9, 0)), t);
        assert_eq!(resolved, t);
    }

    #[test]
    fn test_ci_004_late_arrival_rounds_up_against_employee() {
        let t = instant("2026-01-15T09:01:00+09:00");
        let resolved = resolve_check_in(t, Some(wall_clock(9, 0)), t);
        assert_eq!(resolved, instant("2026-01-15T09:15:00+09:00"));

        let later = instant("2026-01-15T09:16:00+09:00");
        let resolved = resolve_check_in(later, Some(wall_clock(9, 0)), later);
        assert_eq!(resolved, instant("2026-01-15T09:30:00+09:00"));
    }

    // ==========================================================================
    // CO-001..005: check-out resolution
    // ==========================================================================

    #[test]
    fn test_co_001_no_shift_end_rounds_down_no_overtime() {
        let t = instant("2026-01-15T17:50:00+09:00");
        let resolution = resolve_check_out(t, None, t);
        assert_eq!(resolution.effective_check_out, instant("2026-01-15T17:45:00+09:00"));
        assert_eq!(resolution.overtime_minutes, 0);
    }

    #[test]
    fn test_co_002_early_departure_rounds_down_no_overtime() {
        let t = instant("2026-01-15T17:44:00+09:00");
        let resolution = resolve_check_out(t, Some(wall_clock(18, 0)), t);
        assert_eq!(resolution.effective_check_out, instant("2026-01-15T17:30:00+09:00"));
        assert_eq!(resolution.overtime_minutes, 0);
    }

    #[test]
    fn test_co_003_departure_exactly_on_end() {
        let t = instant("2026-01-15T18:00:00+09:00");
        let resolution = resolve_check_out(t, Some(wall_clock(18, 0)), t);
        assert_eq!(resolution.effective_check_out, t);
        assert_eq!(resolution.overtime_minutes, 0);
    }

    #[test]
    fn test_co_004_late_departure_caps_at_shift_end() {
        let t = instant("2026-01-15T18:35:00+09:00");
        let resolution = resolve_check_out(t, Some(wall_clock(18, 0)), t);
        assert_eq!(resolution.effective_check_out, instant("2026-01-15T18:00:00+09:00"));
        assert_eq!(resolution.overtime_minutes, 30);
    }

    #[test]
    fn test_co_005_overtime_clamped_when_rounding_falls_below_shift_end() {
        // Check-out 18:25 against an 18:20 shift end rounds down to 18:15,
        // which is before the shift end; the excess clamps to zero.
        let t = instant("2026-01-15T18:25:00+09:00");
        let resolution = resolve_check_out(t, Some(wall_clock(18, 20)), t);
        assert_eq!(resolution.effective_check_out, instant("2026-01-15T18:20:00+09:00"));
        assert_eq!(resolution.overtime_minutes, 0);
    }

    // ==========================================================================
    // Calendar-day placement
    // ==========================================================================

    #[test]
    fn test_shift_instant_uses_day_ref_calendar_day_and_offset() {
        let day_ref = instant("2026-03-02T23:10:00-05:00");
        let resolved = resolve_check_in(day_ref, Some(wall_clock(23, 30)), day_ref);
        assert_eq!(resolved, instant("2026-03-02T23:30:00-05:00"));
        assert_eq!(resolved.offset(), day_ref.offset());
    }
}
