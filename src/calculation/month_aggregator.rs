//! Month aggregation.
//!
//! This module folds per-day results into [`MonthStats`], builds the full
//! [`MonthReport`] rendered by attendance sheets and exports, and totals
//! shift plans.

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::config::EngineSettings;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRow, DayComputed, DayEntry, EmploymentTemplate, MonthHours, MonthReport,
    MonthStats, TimeOfDay,
};

use super::break_rules::BreakRules;
use super::day_calculator::compute_day;
use super::holiday_calendar::{HolidayCalendar, month_days};
use super::hours_format::minutes_to_hours;
use super::time_codec::parse_time;

fn accumulate(stats: &mut MonthStats, day: &DayComputed) {
    stats.total_mins += day.worked_mins.unwrap_or(0);
    stats.break_mins += day.break_mins;
    stats.afternoon_mins += day.afternoon_mins;
    stats.weekend_holiday_mins += day.weekend_holiday_mins;
}

/// Zeroes the bucket totals for templates without bucket accounting.
fn finish(stats: MonthStats, template: EmploymentTemplate) -> MonthStats {
    if template.uses_bucket_accounting() {
        stats
    } else {
        MonthStats {
            total_mins: stats.total_mins,
            ..MonthStats::default()
        }
    }
}

/// Sums per-day results over `rows`.
///
/// Days without a valid interval contribute zero. For
/// [`EmploymentTemplate::HourlyContract`] only `total_mins` is kept; the other
/// totals are always zero.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{compute_month_stats, BreakRules, HolidayCalendar};
/// use attendance_engine::models::{AttendanceRow, EmploymentTemplate, TimeOfDay};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new();
/// let rows = vec![
///     AttendanceRow::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), "08:00", "16:00"),
///     AttendanceRow::new(NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(), "08:00", "14:00"),
/// ];
/// let stats = compute_month_stats(
///     &rows,
///     EmploymentTemplate::SalariedContract,
///     TimeOfDay::from_hm(17, 0).unwrap(),
///     &calendar,
///     &BreakRules::default(),
/// );
/// assert_eq!(stats.total_mins, 450 + 360);
/// assert_eq!(stats.break_mins, 30);
/// ```
pub fn compute_month_stats(
    rows: &[AttendanceRow],
    template: EmploymentTemplate,
    afternoon_cutoff: TimeOfDay,
    calendar: &HolidayCalendar,
    rules: &BreakRules,
) -> MonthStats {
    let mut stats = MonthStats::default();
    for row in rows {
        let day = compute_day(row, template, afternoon_cutoff, calendar, rules);
        accumulate(&mut stats, &day);
    }
    finish(stats, template)
}

/// Returns one row per calendar day of the month.
///
/// Days absent from `rows` get no times. Rows dated outside the month are
/// ignored, and when a date appears more than once the later row wins.
pub fn month_rows(year: i32, month: u32, rows: &[AttendanceRow]) -> EngineResult<Vec<AttendanceRow>> {
    let days = month_days(year, month)?;

    let by_date: BTreeMap<_, _> = rows
        .iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .map(|r| (r.date, r))
        .collect();

    Ok(days
        .into_iter()
        .map(|date| match by_date.get(&date) {
            Some(row) => (*row).clone(),
            None => AttendanceRow::empty(date),
        })
        .collect())
}

/// Total planned minutes of a shift plan.
///
/// Each row with a valid interval contributes `departure - arrival`; no
/// breaks are deducted.
pub fn planned_minutes(rows: &[AttendanceRow]) -> u32 {
    rows.iter()
        .filter_map(|row| {
            let arrival = parse_time(row.arrival_time.as_deref())?;
            let departure = parse_time(row.departure_time.as_deref())?;
            (departure > arrival)
                .then(|| u32::from(departure.minutes() - arrival.minutes()))
        })
        .sum()
}

/// Builds the full month document for one employee.
///
/// `rows` may be sparse; every calendar day of the month appears in the
/// report. Fails when `month` is outside 1-12 or the year is outside
/// [`SUPPORTED_YEARS`](super::SUPPORTED_YEARS).
pub fn compute_month_report(
    year: i32,
    month: u32,
    rows: &[AttendanceRow],
    template: EmploymentTemplate,
    afternoon_cutoff: TimeOfDay,
    calendar: &HolidayCalendar,
    settings: &EngineSettings,
) -> EngineResult<MonthReport> {
    let rows = month_rows(year, month, rows)?;
    let working_fund = calendar.working_fund(year, month, settings.working_day_hours)?;

    let mut stats = MonthStats::default();
    let days: Vec<DayEntry> = rows
        .into_iter()
        .map(|row| {
            let computed = compute_day(
                &row,
                template,
                afternoon_cutoff,
                calendar,
                &settings.break_rules,
            );
            accumulate(&mut stats, &computed);
            DayEntry {
                date: row.date,
                arrival_time: row.arrival_time,
                departure_time: row.departure_time,
                computed,
            }
        })
        .collect();
    let totals = finish(stats, template);

    let hours = MonthHours {
        total: minutes_to_hours(totals.total_mins),
        afternoon: minutes_to_hours(totals.afternoon_mins),
        weekend_holiday: minutes_to_hours(totals.weekend_holiday_mins),
        working_fund: minutes_to_hours(working_fund.minutes()),
    };

    Ok(MonthReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        year,
        month,
        employment_template: template,
        afternoon_cutoff,
        days,
        totals,
        working_fund,
        hours,
    })
}
