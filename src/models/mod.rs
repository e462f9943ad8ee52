//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod day_computed;
mod month_report;
mod time_of_day;

pub use attendance::{AttendanceRow, EmploymentTemplate};
pub use day_computed::{BreakWindow, DayComputed, WorkSegment};
pub use month_report::{DayEntry, MonthHours, MonthReport, MonthStats, WorkingFund};
pub use time_of_day::{MINUTES_PER_DAY, ParseTimeError, TimeOfDay};
