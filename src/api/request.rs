//! Request types for the attendance computation engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ShiftDefinition, ShiftType};

/// Request body for the `/calculate` endpoint.
///
/// Carries one day's raw punches plus the assigned shift, exactly as the
/// kiosk and admin callers hold them: timestamps as strings, shift
/// boundaries as `HH:MM` wall-clock strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The raw check-in instant as an RFC 3339 string.
    pub check_in_at: String,
    /// The raw check-out instant as an RFC 3339 string.
    pub check_out_at: String,
    /// The measured break start, if one was logged.
    #[serde(default)]
    pub break_start_at: Option<String>,
    /// The measured break end, if one was logged.
    #[serde(default)]
    pub break_end_at: Option<String>,
    /// The shift assigned for the day, if any.
    #[serde(default)]
    pub shift: Option<ShiftRequest>,
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// The scheduled start as an `HH:MM` wall-clock string.
    #[serde(default)]
    pub start_time: Option<String>,
    /// The scheduled end as an `HH:MM` wall-clock string.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl TryFrom<ShiftRequest> for ShiftDefinition {
    type Error = EngineError;

    fn try_from(req: ShiftRequest) -> Result<Self, Self::Error> {
        ShiftDefinition::from_wall_clock(
            req.shift_type,
            req.start_time.as_deref(),
            req.end_time.as_deref(),
        )
    }
}
