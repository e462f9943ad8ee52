//! HTTP API module for the attendance engine.
//!
//! This module exposes day and month calculations, the holiday calendar,
//! working-day funds and time text normalization as JSON endpoints for
//! sheet, print and export front-ends.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayRequest, MonthRequest, NormalizeRequest};
pub use response::{ApiError, ApiErrorResponse, HolidayEntry, NormalizeResponse};
pub use state::AppState;
