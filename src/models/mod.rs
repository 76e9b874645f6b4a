//! Core data models for the attendance computation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_stats;
mod shift;

pub use daily_stats::{BREAK_EXCEEDED_NOTE, DailyStats};
pub use shift::{ShiftDefinition, ShiftType};
