//! Calculation logic for the attendance engine.
//!
//! This module contains the pure time arithmetic behind attendance sheets:
//! free-form time text normalization, the Czech public holiday calendar,
//! mandatory break placement, per-day bucket accounting, month aggregation
//! and the hour formatting used by every rendered total.
//!
//! Nothing here performs I/O. The only shared state is the per-year holiday
//! cache inside [`HolidayCalendar`].

mod break_rules;
mod day_calculator;
mod holiday_calendar;
mod hours_format;
mod month_aggregator;
mod time_codec;

pub use break_rules::{BreakRules, BreakTier, DEFAULT_BREAK_TIERS, subtract_breaks};
pub use day_calculator::{break_label, break_tooltip, compute_day};
pub use holiday_calendar::{
    EASTER_MONDAY, GOOD_FRIDAY, HolidayCalendar, SUPPORTED_YEARS, YearHolidays, easter_sunday,
    ensure_supported_year, is_weekend, month_days,
};
pub use hours_format::{format_hours, minutes_to_hours};
pub use month_aggregator::{compute_month_report, compute_month_stats, month_rows, planned_minutes};
pub use time_codec::{
    DEFAULT_AFTERNOON_CUTOFF, format_minutes, is_valid_time_or_empty, normalize_time,
    parse_cutoff, parse_time, to_minutes,
};
