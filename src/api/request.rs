//! Request types for the attendance engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRow, EmploymentTemplate};

/// Request body for `POST /day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRequest {
    /// The calendar date of the row.
    pub date: NaiveDate,
    /// Arrival time text as entered.
    #[serde(default)]
    pub arrival_time: Option<String>,
    /// Departure time text as entered.
    #[serde(default)]
    pub departure_time: Option<String>,
    /// The employee's contract template.
    pub employment_template: EmploymentTemplate,
    /// Optional cutoff overriding the configured one.
    #[serde(default)]
    pub afternoon_cutoff: Option<String>,
}

impl DayRequest {
    /// The attendance row carried by this request.
    pub fn row(&self) -> AttendanceRow {
        AttendanceRow {
            date: self.date,
            arrival_time: self.arrival_time.clone(),
            departure_time: self.departure_time.clone(),
        }
    }
}

/// Request body for `POST /month`.
///
/// `days` may be sparse; missing dates are reported without times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRequest {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// The employee's contract template.
    pub employment_template: EmploymentTemplate,
    /// Optional cutoff overriding the configured one.
    #[serde(default)]
    pub afternoon_cutoff: Option<String>,
    /// Recorded attendance rows.
    #[serde(default)]
    pub days: Vec<AttendanceRow>,
}

/// Request body for `POST /time/normalize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeRequest {
    /// Raw time text.
    pub value: String,
}
