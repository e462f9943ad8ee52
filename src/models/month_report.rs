//! Month aggregation models.
//!
//! This module contains the [`MonthStats`] totals, the [`WorkingFund`]
//! baseline and the [`MonthReport`] document that attendance sheets, print
//! previews and exports render from.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayComputed, EmploymentTemplate, TimeOfDay};

/// Aggregated minute totals over a set of days.
///
/// # Example
///
/// ```
/// use attendance_engine::models::MonthStats;
///
/// let stats = MonthStats::default();
/// assert_eq!(stats.total_mins, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStats {
    /// Total worked minutes (days without an interval count as zero).
    pub total_mins: u32,
    /// Total deducted break minutes.
    pub break_mins: u32,
    /// Total minutes worked at or after the afternoon cutoff.
    pub afternoon_mins: u32,
    /// Total minutes worked on weekends and public holidays.
    pub weekend_holiday_mins: u32,
}

/// The contracted working-hour baseline of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingFund {
    /// Days that are neither weekend nor public holiday.
    pub working_days: u32,
    /// `working_days` multiplied by the contracted daily hours.
    pub hours: u32,
}

impl WorkingFund {
    /// The fund expressed in minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::WorkingFund;
    ///
    /// let fund = WorkingFund { working_days: 20, hours: 160 };
    /// assert_eq!(fund.minutes(), 9600);
    /// ```
    pub fn minutes(&self) -> u32 {
        self.hours * 60
    }
}

/// Month totals rendered as one-decimal hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthHours {
    /// Total worked hours.
    pub total: Decimal,
    /// Afternoon hours.
    pub afternoon: Decimal,
    /// Weekend and holiday hours.
    pub weekend_holiday: Decimal,
    /// Working-fund hours.
    pub working_fund: Decimal,
}

/// One calendar day of a month report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// The calendar date.
    pub date: NaiveDate,
    /// Arrival text as recorded.
    pub arrival_time: Option<String>,
    /// Departure text as recorded.
    pub departure_time: Option<String>,
    /// The computed day.
    pub computed: DayComputed,
}

/// The full month document for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthReport {
    /// Unique identifier of this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// Report year.
    pub year: i32,
    /// Report month (1-12).
    pub month: u32,
    /// Template the days were accounted under.
    pub employment_template: EmploymentTemplate,
    /// Afternoon cutoff used for the afternoon bucket.
    pub afternoon_cutoff: TimeOfDay,
    /// One entry per calendar day, in date order.
    pub days: Vec<DayEntry>,
    /// Minute totals.
    pub totals: MonthStats,
    /// Working-day fund of the month.
    pub working_fund: WorkingFund,
    /// Totals as one-decimal hours.
    pub hours: MonthHours,
}
