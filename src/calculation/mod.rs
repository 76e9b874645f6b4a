//! Calculation logic for the attendance computation engine.
//!
//! This module contains all the calculation functions for turning raw
//! check-in/check-out/break timestamps and an assigned shift definition
//! into daily attendance figures, including quarter-hour rounding,
//! shift-boundary-aware check-in/check-out resolution, break deduction,
//! and overtime measurement.

mod boundary;
mod daily_stats;
mod rounding;

pub use boundary::{CheckOutResolution, resolve_check_in, resolve_check_out};
pub use daily_stats::{
    FULL_DAY_MINUTES, HALF_DAY_MINUTES, LONG_DAY_THRESHOLD_MINUTES, STATUTORY_BREAK_MINUTES,
    calculate_daily_stats,
};
pub use rounding::{QUARTER_HOUR_MINUTES, round_down_to_quarter_hour, round_up_to_quarter_hour};
