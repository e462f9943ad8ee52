//! Integration tests for the attendance engine HTTP API.
//!
//! This test suite covers:
//! - Day calculation for both contract templates
//! - Break placement and labels
//! - Afternoon and weekend/holiday buckets
//! - Month reports and the working-day fund
//! - The holiday calendar endpoint
//! - Time text normalization
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post_day(date: &str, arrival: &str, departure: &str, template: &str) -> Value {
    let (status, json) = post(
        "/day",
        json!({
            "date": date,
            "arrival_time": arrival,
            "departure_time": departure,
            "employment_template": template,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", json);
    json
}

// =============================================================================
// Day calculation
// =============================================================================

#[tokio::test]
async fn test_salaried_8h_day_has_one_break() {
    let day = post_day("2026-01-05", "08:00", "16:00", "HPP").await;

    assert_eq!(day["worked_mins"], 450);
    assert_eq!(day["break_mins"], 30);
    assert_eq!(day["break_label"], "\u{2212}0:30 pauza");
    assert_eq!(day["break_tooltip"], "Pauza 0:30 pauza (14:00\u{2013}14:30)");
    assert_eq!(day["afternoon_mins"], 0);
    assert_eq!(day["weekend_holiday_mins"], 0);
    assert_eq!(day["is_weekend_or_holiday"], false);
}

#[tokio::test]
async fn test_salaried_6h_day_has_no_break() {
    let day = post_day("2026-01-05", "08:00", "14:00", "HPP").await;

    assert_eq!(day["worked_mins"], 360);
    assert_eq!(day["break_mins"], 0);
    assert!(day["break_label"].is_null());
    assert_eq!(day["segments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_salaried_13h_day_has_two_breaks() {
    let day = post_day("2026-01-05", "06:00", "19:00", "HPP").await;

    assert_eq!(day["worked_mins"], 720);
    assert_eq!(day["break_mins"], 60);
    assert_eq!(day["break_label"], "\u{2212}1:00 pauza");
    assert_eq!(
        day["break_tooltip"],
        "Pauzy 1:00 pauza (12:00\u{2013}12:30, 18:00\u{2013}18:30)"
    );
    assert_eq!(day["breaks"].as_array().unwrap().len(), 2);
    assert_eq!(day["segments"].as_array().unwrap().len(), 3);
    assert_eq!(day["segments"][1]["start"], "12:30");
    // 17:00-18:00 and 18:30-19:00
    assert_eq!(day["afternoon_mins"], 90);
}

#[tokio::test]
async fn test_salaried_afternoon_bucket() {
    let day = post_day("2026-01-05", "08:00", "18:00", "HPP").await;

    assert_eq!(day["worked_mins"], 570);
    assert_eq!(day["afternoon_mins"], 60);
}

#[tokio::test]
async fn test_salaried_weekend_and_holiday_buckets() {
    let saturday = post_day("2026-01-03", "08:00", "12:00", "HPP").await;
    assert_eq!(saturday["is_weekend"], true);
    assert_eq!(saturday["weekend_holiday_mins"], 240);

    let good_friday = post_day("2026-04-03", "08:00", "12:00", "HPP").await;
    assert_eq!(good_friday["is_weekend"], false);
    assert_eq!(good_friday["holiday_name"], "Velký pátek");
    assert_eq!(good_friday["weekend_holiday_mins"], 240);
}

#[tokio::test]
async fn test_hourly_day_has_no_buckets() {
    let day = post_day("2026-01-03", "08:00", "18:00", "DPP_DPC").await;

    assert_eq!(day["worked_mins"], 600);
    assert_eq!(day["break_mins"], 0);
    assert_eq!(day["afternoon_mins"], 0);
    assert_eq!(day["weekend_holiday_mins"], 0);
    // Classification is still reported
    assert_eq!(day["is_weekend"], true);
}

#[tokio::test]
async fn test_day_without_interval() {
    let reversed = post_day("2026-01-05", "16:00", "08:00", "HPP").await;
    assert!(reversed["worked_mins"].is_null());
    assert_eq!(reversed["afternoon_mins"], 0);

    let garbage = post_day("2026-01-05", "soon", "16:00", "HPP").await;
    assert!(garbage["worked_mins"].is_null());

    let (status, missing) = post(
        "/day",
        json!({"date": "2026-01-05", "employment_template": "HPP"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(missing["worked_mins"].is_null());
}

#[tokio::test]
async fn test_day_accepts_single_digit_hour() {
    let day = post_day("2026-01-05", "8:00", "9:30", "HPP").await;
    assert_eq!(day["worked_mins"], 90);
}

// =============================================================================
// Month reports
// =============================================================================

#[tokio::test]
async fn test_month_report_totals() {
    let (status, report) = post(
        "/month",
        json!({
            "year": 2026,
            "month": 1,
            "employment_template": "HPP",
            "days": [
                {"date": "2026-01-01", "arrival_time": "09:00", "departure_time": "12:00"},
                {"date": "2026-01-03", "arrival_time": "08:00", "departure_time": "16:00"},
                {"date": "2026-01-05", "arrival_time": "08:00", "departure_time": "18:00"},
                {"date": "2026-01-06", "arrival_time": "10:00", "departure_time": "09:00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["days"].as_array().unwrap().len(), 31);
    assert_eq!(report["totals"]["total_mins"], 1200);
    assert_eq!(report["totals"]["break_mins"], 60);
    assert_eq!(report["totals"]["afternoon_mins"], 60);
    assert_eq!(report["totals"]["weekend_holiday_mins"], 630);
    assert_eq!(report["working_fund"]["working_days"], 21);
    assert_eq!(decimal(&report["hours"]["total"]), Decimal::from_str("20.0").unwrap());
    assert_eq!(decimal(&report["hours"]["weekend_holiday"]), Decimal::from_str("10.5").unwrap());
    assert_eq!(decimal(&report["hours"]["working_fund"]), Decimal::from(168));
    assert_eq!(report["employment_template"], "HPP");
    assert_eq!(report["afternoon_cutoff"], "17:00");
}

#[tokio::test]
async fn test_month_report_hourly_zeroes_buckets() {
    let (status, report) = post(
        "/month",
        json!({
            "year": 2026,
            "month": 1,
            "employment_template": "DPP_DPC",
            "days": [
                {"date": "2026-01-03", "arrival_time": "08:00", "departure_time": "18:00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["totals"]["total_mins"], 600);
    assert_eq!(report["totals"]["break_mins"], 0);
    assert_eq!(report["totals"]["afternoon_mins"], 0);
    assert_eq!(report["totals"]["weekend_holiday_mins"], 0);
}

#[tokio::test]
async fn test_month_report_request_cutoff() {
    let (status, report) = post(
        "/month",
        json!({
            "year": 2026,
            "month": 1,
            "employment_template": "HPP",
            "afternoon_cutoff": "15:00",
            "days": [
                {"date": "2026-01-05", "arrival_time": "08:00", "departure_time": "16:00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["afternoon_cutoff"], "15:00");
    assert_eq!(report["totals"]["afternoon_mins"], 60);
}

#[tokio::test]
async fn test_month_report_ignores_rows_outside_month() {
    let (status, report) = post(
        "/month",
        json!({
            "year": 2026,
            "month": 2,
            "employment_template": "HPP",
            "days": [
                {"date": "2026-03-02", "arrival_time": "08:00", "departure_time": "16:00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["days"].as_array().unwrap().len(), 28);
    assert_eq!(report["totals"]["total_mins"], 0);
}

#[tokio::test]
async fn test_month_invalid_month() {
    let (status, json) = post(
        "/month",
        json!({"year": 2026, "month": 0, "employment_template": "HPP"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_MONTH");
}

// =============================================================================
// Calendar
// =============================================================================

#[tokio::test]
async fn test_holidays_2026() {
    let (status, json) = get("/holidays/2026").await;

    assert_eq!(status, StatusCode::OK);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 13);
    assert!(list.iter().any(|h| h["date"] == "2026-04-03" && h["name"] == "Velký pátek"));
    assert!(list.iter().any(|h| h["date"] == "2026-04-06"));
    assert_eq!(list[12]["date"], "2026-12-26");
}

#[tokio::test]
async fn test_holidays_follow_easter() {
    let (_, json) = get("/holidays/2024").await;
    let list = json.as_array().unwrap();
    assert!(list.iter().any(|h| h["date"] == "2024-03-29"));
    assert!(list.iter().any(|h| h["date"] == "2024-04-01"));
}

#[tokio::test]
async fn test_holidays_unsupported_year() {
    let (status, json) = get("/holidays/2000000000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_YEAR");

    let (status, _) = get("/working-fund/1200/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_working_fund() {
    let (status, april) = get("/working-fund/2026/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(april["working_days"], 20);
    assert_eq!(april["hours"], 160);

    let (status, json) = get("/working-fund/2026/13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_MONTH");
}

// =============================================================================
// Time normalization
// =============================================================================

#[tokio::test]
async fn test_normalize_shapes() {
    let cases = [
        ("1000", "10:00", true),
        ("7:30", "07:30", true),
        ("23", "23:00", true),
        ("", "", true),
        ("9:5", "9:5", false),
        ("2460", "2460", false),
        // Bare zero is not an hour
        ("0", "0", false),
    ];

    for (input, normalized, valid) in cases {
        let (status, json) = post("/time/normalize", json!({"value": input})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["normalized"], normalized, "input {:?}", input);
        assert_eq!(json["valid"], valid, "input {:?}", input);
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/month")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"year\": 2026,"))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, json) = read_json(response).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_template_is_rejected() {
    let (status, json) = post(
        "/day",
        json!({"date": "2026-01-05", "employment_template": "CASUAL"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}
