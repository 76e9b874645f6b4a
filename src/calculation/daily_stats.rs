//! Daily attendance statistics calculation.
//!
//! This module provides the engine entry point that turns a day's raw
//! punches and the assigned shift definition into a [`DailyStats`] record,
//! dispatching on the shift kind and applying the rounding, break and
//! overtime policy rules.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyStats, ShiftDefinition, ShiftType};

use super::boundary::{resolve_check_in, resolve_check_out};

/// Gross minutes at or above which the fixed break deduction applies.
pub const LONG_DAY_THRESHOLD_MINUTES: i64 = 360;

/// The fixed break deduction for a long day, in minutes.
pub const STATUTORY_BREAK_MINUTES: i64 = 60;

/// Minutes credited for a full day of paid leave or business travel.
pub const FULL_DAY_MINUTES: i64 = 480;

/// Minutes credited for a half day of paid leave.
pub const HALF_DAY_MINUTES: i64 = 240;

/// Calculates the daily attendance statistics for one day's punches.
///
/// `check_in_at` and `check_out_at` must be RFC 3339 instants and are a
/// hard error when they are not. Everything else is permissive: a missing
/// shift takes the work path, unknown shift kinds take the work path, and
/// missing or unparseable break timestamps mean no measured break.
///
/// The calculation is a pure function: no I/O, no clock reads, identical
/// inputs always give identical outputs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimestamp`] when `check_in_at` or
/// `check_out_at` fails to parse, before any computation.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_daily_stats;
/// use attendance_engine::models::{ShiftDefinition, ShiftType};
///
/// let shift =
///     ShiftDefinition::from_wall_clock(ShiftType::Work, Some("09:00"), Some("18:00")).unwrap();
/// let stats = calculate_daily_stats(
///     "2026-01-15T08:58:00+09:00",
///     "2026-01-15T18:10:00+09:00",
///     None,
///     None,
///     Some(&shift),
/// )
/// .unwrap();
/// assert_eq!(stats.total_work_minutes, 480);
/// assert_eq!(stats.total_break_minutes, 60);
/// assert_eq!(stats.overtime_minutes, 0);
/// ```
pub fn calculate_daily_stats(
    check_in_at: &str,
    check_out_at: &str,
    break_start_at: Option<&str>,
    break_end_at: Option<&str>,
    shift: Option<&ShiftDefinition>,
) -> EngineResult<DailyStats> {
    let check_in = parse_instant("check_in_at", check_in_at)?;
    let check_out = parse_instant("check_out_at", check_out_at)?;
    let measured_break = measured_break_minutes(break_start_at, break_end_at);

    let shift_type = shift.map(|s| s.shift_type).unwrap_or_default();
    let stats = match shift_type {
        ShiftType::PaidLeave => leave_day(FULL_DAY_MINUTES, check_in, check_out),
        ShiftType::BusinessTrip => DailyStats {
            total_work_minutes: FULL_DAY_MINUTES,
            total_break_minutes: STATUTORY_BREAK_MINUTES,
            break_exceeded: false,
            overtime_minutes: 0,
            paid_leave_minutes: 0,
            rounded_check_in_at: check_in,
            rounded_check_out_at: check_out,
        },
        ShiftType::Rest | ShiftType::Absent => leave_day(0, check_in, check_out),
        ShiftType::HalfPaidLeave => half_paid_leave_day(check_in, check_out, measured_break, shift),
        ShiftType::Work | ShiftType::Flex | ShiftType::SpecialLeave | ShiftType::Other => {
            work_day(check_in, check_out, measured_break, shift)
        }
    };
    Ok(stats)
}

/// A day with nothing computed: all figures zero apart from the paid-leave
/// credit, raw punches echoed untouched.
fn leave_day(
    paid_leave_minutes: i64,
    check_in: DateTime<FixedOffset>,
    check_out: DateTime<FixedOffset>,
) -> DailyStats {
    DailyStats {
        total_work_minutes: 0,
        total_break_minutes: 0,
        break_exceeded: false,
        overtime_minutes: 0,
        paid_leave_minutes,
        rounded_check_in_at: check_in,
        rounded_check_out_at: check_out,
    }
}

/// Intermediate figures shared by the work path and the worked half of a
/// half-paid-leave day.
struct WorkFigures {
    rounded_check_in: DateTime<FixedOffset>,
    effective_check_out: DateTime<FixedOffset>,
    clock_overtime_minutes: i64,
    applicable_break_minutes: i64,
    break_exceeded: bool,
    base_work_minutes: i64,
}

fn work_figures(
    check_in: DateTime<FixedOffset>,
    check_out: DateTime<FixedOffset>,
    measured_break: Option<i64>,
    shift_start: Option<NaiveTime>,
    shift_end: Option<NaiveTime>,
) -> WorkFigures {
    let rounded_check_in = resolve_check_in(check_in, shift_start, check_in);
    let resolution = resolve_check_out(check_out, shift_end, check_out);

    // Undo the shift-end capping so the gross duration includes worked
    // overtime.
    let true_end = resolution.effective_check_out + Duration::minutes(resolution.overtime_minutes);
    let gross_minutes = (true_end - rounded_check_in).num_minutes().max(0);

    let applicable_break_minutes = if gross_minutes >= LONG_DAY_THRESHOLD_MINUTES {
        STATUTORY_BREAK_MINUTES
    } else {
        0
    };
    let break_exceeded = gross_minutes >= LONG_DAY_THRESHOLD_MINUTES
        && measured_break.is_some_and(|minutes| minutes > STATUTORY_BREAK_MINUTES);
    let base_work_minutes = (gross_minutes - applicable_break_minutes).max(0);

    WorkFigures {
        rounded_check_in,
        effective_check_out: resolution.effective_check_out,
        clock_overtime_minutes: resolution.overtime_minutes,
        applicable_break_minutes,
        break_exceeded,
        base_work_minutes,
    }
}

/// The default work path, also taken by flex, special-leave and unknown
/// shift kinds and by days with no shift at all.
fn work_day(
    check_in: DateTime<FixedOffset>,
    check_out: DateTime<FixedOffset>,
    measured_break: Option<i64>,
    shift: Option<&ShiftDefinition>,
) -> DailyStats {
    let (shift_start, shift_end) = boundary_times(shift);
    let figures = work_figures(check_in, check_out, measured_break, shift_start, shift_end);

    // With a fully scheduled shift, overtime is measured against the
    // scheduled duration so lateness can be offset by staying late. The
    // overtime is already inside base_work_minutes and is not re-added.
    let overtime_minutes = match shift.and_then(ShiftDefinition::scheduled_gross_minutes) {
        Some(scheduled_gross) => {
            let scheduled_break = if scheduled_gross >= LONG_DAY_THRESHOLD_MINUTES {
                STATUTORY_BREAK_MINUTES
            } else {
                0
            };
            let scheduled_work_minutes = scheduled_gross - scheduled_break;
            (figures.base_work_minutes - scheduled_work_minutes).max(0)
        }
        None => figures.clock_overtime_minutes,
    };

    DailyStats {
        total_work_minutes: figures.base_work_minutes,
        total_break_minutes: figures.applicable_break_minutes,
        break_exceeded: figures.break_exceeded,
        overtime_minutes,
        paid_leave_minutes: 0,
        rounded_check_in_at: figures.rounded_check_in,
        rounded_check_out_at: figures.effective_check_out,
    }
}

/// Half a day of paid leave. With a fully scheduled shift the worked half
/// is computed like a work day under the simpler clock-overtime rule;
/// otherwise only the leave credit is granted.
fn half_paid_leave_day(
    check_in: DateTime<FixedOffset>,
    check_out: DateTime<FixedOffset>,
    measured_break: Option<i64>,
    shift: Option<&ShiftDefinition>,
) -> DailyStats {
    let (shift_start, shift_end) = boundary_times(shift);
    if shift_start.is_none() || shift_end.is_none() {
        return leave_day(HALF_DAY_MINUTES, check_in, check_out);
    }

    let figures = work_figures(check_in, check_out, measured_break, shift_start, shift_end);
    DailyStats {
        total_work_minutes: figures.base_work_minutes + figures.clock_overtime_minutes,
        total_break_minutes: figures.applicable_break_minutes,
        break_exceeded: figures.break_exceeded,
        overtime_minutes: figures.clock_overtime_minutes,
        paid_leave_minutes: HALF_DAY_MINUTES,
        rounded_check_in_at: figures.rounded_check_in,
        rounded_check_out_at: figures.effective_check_out,
    }
}

fn boundary_times(shift: Option<&ShiftDefinition>) -> (Option<NaiveTime>, Option<NaiveTime>) {
    shift.map_or((None, None), |s| (s.start_time, s.end_time))
}

fn parse_instant(field: &str, value: &str) -> EngineResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|_| EngineError::InvalidTimestamp {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Measured break length in minutes when both timestamps are present and
/// parseable; the value is not clamped.
fn measured_break_minutes(
    break_start_at: Option<&str>,
    break_end_at: Option<&str>,
) -> Option<i64> {
    let start = break_start_at.and_then(|s| DateTime::parse_from_rfc3339(s).ok())?;
    let end = break_end_at.and_then(|s| DateTime::parse_from_rfc3339(s).ok())?;
    Some((end - start).num_minutes())
}
