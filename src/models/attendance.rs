//! Attendance input models.
//!
//! This module defines the [`AttendanceRow`] recorded for one calendar day and
//! the [`EmploymentTemplate`] that decides how a day is accounted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The contractual category governing break deduction and bucket accounting.
///
/// On the wire the source names are used: `"DPP_DPC"` and `"HPP"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentTemplate {
    /// Agreement-based hourly work. Only raw elapsed minutes are reported.
    #[serde(rename = "DPP_DPC")]
    HourlyContract,
    /// Salaried employment. Breaks are deducted and minutes are split into
    /// afternoon and weekend/holiday buckets.
    #[serde(rename = "HPP")]
    SalariedContract,
}

impl EmploymentTemplate {
    /// Returns true if break deduction and bucket accounting apply.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::EmploymentTemplate;
    ///
    /// assert!(EmploymentTemplate::SalariedContract.uses_bucket_accounting());
    /// assert!(!EmploymentTemplate::HourlyContract.uses_bucket_accounting());
    /// ```
    pub fn uses_bucket_accounting(self) -> bool {
        match self {
            EmploymentTemplate::HourlyContract => false,
            EmploymentTemplate::SalariedContract => true,
        }
    }
}

impl std::fmt::Display for EmploymentTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentTemplate::HourlyContract => write!(f, "DPP_DPC"),
            EmploymentTemplate::SalariedContract => write!(f, "HPP"),
        }
    }
}

/// One day of recorded attendance.
///
/// Times are kept as the text that was stored, so an unparseable value
/// degrades into a day without a valid interval instead of a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The calendar date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Arrival time as `HH:MM` text, if entered.
    #[serde(default)]
    pub arrival_time: Option<String>,
    /// Departure time as `HH:MM` text, if entered.
    #[serde(default)]
    pub departure_time: Option<String>,
}

impl AttendanceRow {
    /// Creates a row with both times set.
    pub fn new(date: NaiveDate, arrival: impl Into<String>, departure: impl Into<String>) -> Self {
        Self {
            date,
            arrival_time: Some(arrival.into()),
            departure_time: Some(departure.into()),
        }
    }

    /// Creates a row with no times entered.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            arrival_time: None,
            departure_time: None,
        }
    }
}
