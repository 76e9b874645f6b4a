//! Daily attendance computation engine.
//!
//! This crate turns a day's raw check-in/check-out/break timestamps plus an
//! assigned shift definition into billable work minutes, break minutes,
//! overtime minutes and paid-leave minutes, under quarter-hour rounding and
//! fixed break-deduction policy rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
