//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_day, compute_month_report, is_valid_time_or_empty, normalize_time, parse_cutoff,
    to_minutes,
};

use super::request::{DayRequest, MonthRequest, NormalizeRequest};
use super::response::{ApiError, ApiErrorResponse, HolidayEntry, NormalizeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/day", post(day_handler))
        .route("/month", post(month_handler))
        .route("/holidays/:year", get(holidays_handler))
        .route("/working-fund/:year/:month", get(working_fund_handler))
        .route("/time/normalize", post(normalize_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Turns a body extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /day.
///
/// Computes the derived values of a single attendance row.
async fn day_handler(
    State(state): State<AppState>,
    payload: Result<Json<DayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = state.config().settings();
    let cutoff = parse_cutoff(request.afternoon_cutoff.as_deref(), settings.afternoon_cutoff);

    let start_time = Instant::now();
    let day = compute_day(
        &request.row(),
        request.employment_template,
        cutoff,
        state.calendar(),
        &settings.break_rules,
    );

    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        template = %request.employment_template,
        worked_mins = ?day.worked_mins,
        duration_us = start_time.elapsed().as_micros(),
        "Day computed"
    );
    json_response(StatusCode::OK, day)
}

/// Handler for POST /month.
///
/// Builds the month report for one employee.
async fn month_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = state.config().settings();
    let cutoff = parse_cutoff(request.afternoon_cutoff.as_deref(), settings.afternoon_cutoff);

    let start_time = Instant::now();
    match compute_month_report(
        request.year,
        request.month,
        &request.days,
        request.employment_template,
        cutoff,
        state.calendar(),
        settings,
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                year = report.year,
                month = report.month,
                rows = request.days.len(),
                total_mins = report.totals.total_mins,
                duration_us = start_time.elapsed().as_micros(),
                "Month report completed"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Month report failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /holidays/{year}.
async fn holidays_handler(State(state): State<AppState>, Path(year): Path<i32>) -> Response {
    let table = match state.calendar().holidays_for_year(year) {
        Ok(table) => table,
        Err(err) => {
            warn!(year, error = %err, "Holiday request rejected");
            return error_response(err.into());
        }
    };

    let holidays: Vec<HolidayEntry> = table
        .sorted()
        .into_iter()
        .map(|(date, name)| HolidayEntry {
            date,
            name: name.to_string(),
        })
        .collect();

    info!(year, count = holidays.len(), "Listed holidays");
    json_response(StatusCode::OK, holidays)
}

/// Handler for GET /working-fund/{year}/{month}.
async fn working_fund_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Response {
    let daily_hours = state.config().settings().working_day_hours;
    match state.calendar().working_fund(year, month, daily_hours) {
        Ok(fund) => json_response(StatusCode::OK, fund),
        Err(err) => {
            warn!(year, month, error = %err, "Working fund request rejected");
            error_response(err.into())
        }
    }
}

/// Handler for POST /time/normalize.
async fn normalize_handler(payload: Result<Json<NormalizeRequest>, JsonRejection>) -> Response {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(Uuid::new_v4(), rejection),
    };

    let normalized = normalize_time(&request.value);
    let body = NormalizeResponse {
        valid: is_valid_time_or_empty(&request.value),
        minutes: to_minutes(&normalized),
        normalized,
    };
    json_response(StatusCode::OK, body)
}
