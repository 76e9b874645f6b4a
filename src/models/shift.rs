//! Shift definition model and related types.
//!
//! This module defines the ShiftType and ShiftDefinition types describing
//! the shift assigned to an employee for a given day.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of shift assigned for a day.
///
/// The attendance calculator dispatches on this value. Administrative kinds
/// the engine does not compute specially (`flex`, `special_leave`, and any
/// string not listed here) take the default work path, so an unknown value
/// never fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// A regular working day, subject to rounding, break and overtime rules.
    #[default]
    Work,
    /// A scheduled day off. All computed figures are zero.
    Rest,
    /// An unexcused absence. All computed figures are zero.
    Absent,
    /// A full day of paid leave (8 hours credited, nothing worked).
    PaidLeave,
    /// A half day of paid leave (4 hours credited), optionally combined
    /// with worked hours when the shift carries start and end times.
    HalfPaidLeave,
    /// A business trip, credited as a fixed 8-hour day with a 1-hour break.
    BusinessTrip,
    /// Flexible working arrangement; computed like a regular working day.
    Flex,
    /// Special leave kinds administered outside this engine; computed like
    /// a regular working day.
    SpecialLeave,
    /// Catch-all for shift kinds this engine does not know about.
    #[serde(other)]
    Other,
}

/// The shift assigned for the day, as read from the schedule.
///
/// Start and end times are wall-clock values with no date and no zone; the
/// calculator interprets them against the calendar day of the check-in and
/// check-out timestamps respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// The scheduled start of the shift, if the shift has one.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The scheduled end of the shift, if the shift has one.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
}

impl ShiftDefinition {
    /// Creates a shift definition from `HH:MM` wall-clock strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftTime`] when a provided string is
    /// not a valid `HH:MM` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{ShiftDefinition, ShiftType};
    ///
    /// let shift =
    ///     ShiftDefinition::from_wall_clock(ShiftType::Work, Some("09:00"), Some("18:00")).unwrap();
    /// assert!(shift.start_time.is_some());
    ///
    /// let bad = ShiftDefinition::from_wall_clock(ShiftType::Work, Some("9am"), None);
    /// assert!(bad.is_err());
    /// ```
    pub fn from_wall_clock(
        shift_type: ShiftType,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> EngineResult<Self> {
        Ok(Self {
            shift_type,
            start_time: parse_wall_clock("start_time", start_time)?,
            end_time: parse_wall_clock("end_time", end_time)?,
        })
    }

    /// Returns the nominal gross duration of the shift in minutes, when
    /// both boundary times are present.
    ///
    /// An end time before the start time is treated as crossing midnight
    /// and wrapped by 24 hours; equal boundaries yield a zero-length day.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{ShiftDefinition, ShiftType};
    ///
    /// let day =
    ///     ShiftDefinition::from_wall_clock(ShiftType::Work, Some("09:00"), Some("18:00")).unwrap();
    /// assert_eq!(day.scheduled_gross_minutes(), Some(540));
    ///
    /// let night =
    ///     ShiftDefinition::from_wall_clock(ShiftType::Work, Some("22:00"), Some("06:00")).unwrap();
    /// assert_eq!(night.scheduled_gross_minutes(), Some(480));
    /// ```
    pub fn scheduled_gross_minutes(&self) -> Option<i64> {
        let start = self.start_time?;
        let end = self.end_time?;
        let start_minutes = i64::from(start.hour()) * 60 + i64::from(start.minute());
        let end_minutes = i64::from(end.hour()) * 60 + i64::from(end.minute());
        let mut gross = end_minutes - start_minutes;
        if gross < 0 {
            gross += 1440;
        }
        Some(gross)
    }
}

fn parse_wall_clock(field: &str, value: Option<&str>) -> EngineResult<Option<NaiveTime>> {
    match value {
        None => Ok(None),
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M")
            .map(Some)
            .map_err(|_| EngineError::InvalidShiftTime {
                field: field.to_string(),
                value: raw.to_string(),
            }),
    }
}
