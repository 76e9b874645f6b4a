//! HTTP API module for the attendance computation engine.
//!
//! This module provides the REST endpoint through which the kiosk
//! check-out, admin manual-edit and shift-sync callers invoke the engine.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{CalculationRequest, ShiftRequest};
pub use response::{ApiError, CalculationResponse};
