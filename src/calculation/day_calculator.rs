//! Per-day attendance calculation.
//!
//! This module combines the holiday calendar, the time codec and the break
//! rules into a [`DayComputed`] for a single [`AttendanceRow`].

use crate::models::{
    AttendanceRow, BreakWindow, DayComputed, EmploymentTemplate, MINUTES_PER_DAY, TimeOfDay,
    WorkSegment,
};

use super::break_rules::{BreakRules, subtract_breaks};
use super::holiday_calendar::HolidayCalendar;
use super::time_codec::{format_minutes, parse_time};

/// Computes worked, break and bucket minutes for one day.
///
/// A day whose arrival or departure is missing or unparseable, or whose
/// departure is not after its arrival, has no valid interval: `worked_mins`
/// is `None` and every other minute field is zero. The weekend and holiday
/// flags are filled in regardless.
///
/// For [`EmploymentTemplate::HourlyContract`] only the raw elapsed minutes are
/// reported. For [`EmploymentTemplate::SalariedContract`] breaks are deducted,
/// minutes at or after `afternoon_cutoff` are counted, and the whole worked
/// duration is attributed to the weekend/holiday bucket on such days.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{compute_day, BreakRules, HolidayCalendar};
/// use attendance_engine::models::{AttendanceRow, EmploymentTemplate, TimeOfDay};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new();
/// let row = AttendanceRow::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), "08:00", "18:00");
/// let cutoff = TimeOfDay::from_hm(17, 0).unwrap();
///
/// let day = compute_day(
///     &row,
///     EmploymentTemplate::SalariedContract,
///     cutoff,
///     &calendar,
///     &BreakRules::default(),
/// );
/// assert_eq!(day.worked_mins, Some(570));
/// assert_eq!(day.afternoon_mins, 60);
/// assert_eq!(day.break_label.as_deref(), Some("−0:30 pauza"));
/// ```
pub fn compute_day(
    row: &AttendanceRow,
    template: EmploymentTemplate,
    afternoon_cutoff: TimeOfDay,
    calendar: &HolidayCalendar,
    rules: &BreakRules,
) -> DayComputed {
    let is_weekend = calendar.is_weekend(row.date);
    let holiday_name = calendar.holiday_name(row.date).map(str::to_string);
    let is_weekend_or_holiday = is_weekend || holiday_name.is_some();

    let mut day = DayComputed {
        worked_mins: None,
        break_mins: 0,
        break_label: None,
        break_tooltip: None,
        afternoon_mins: 0,
        weekend_holiday_mins: 0,
        is_weekend,
        holiday_name,
        is_weekend_or_holiday,
        breaks: Vec::new(),
        segments: Vec::new(),
    };

    let arrival = parse_time(row.arrival_time.as_deref());
    let departure = parse_time(row.departure_time.as_deref());
    let (arrival, departure) = match (arrival, departure) {
        (Some(a), Some(d)) if d > a => (a, d),
        _ => return day,
    };

    match template {
        EmploymentTemplate::HourlyContract => {
            let segment = WorkSegment {
                start: arrival,
                end: departure,
            };
            day.worked_mins = Some(segment.duration_minutes());
            day.segments = vec![segment];
        }
        EmploymentTemplate::SalariedContract => {
            let breaks = rules.compute_breaks(arrival, departure);
            let segments = subtract_breaks(arrival, departure, &breaks);

            let worked_mins: u32 = segments.iter().map(WorkSegment::duration_minutes).sum();
            let cutoff = u32::from(afternoon_cutoff.minutes());
            let afternoon_mins: u32 = segments
                .iter()
                .map(|s| s.overlap_minutes(cutoff, u32::from(MINUTES_PER_DAY)))
                .sum();
            let break_mins: u32 = breaks.iter().map(BreakWindow::duration_minutes).sum();

            day.worked_mins = Some(worked_mins);
            day.afternoon_mins = afternoon_mins;
            day.weekend_holiday_mins = if is_weekend_or_holiday { worked_mins } else { 0 };
            day.break_mins = break_mins;
            if !breaks.is_empty() {
                day.break_label = Some(break_label(break_mins));
                day.break_tooltip = Some(break_tooltip(&breaks, break_mins));
            }
            day.breaks = breaks;
            day.segments = segments;
        }
    }

    day
}

/// Short label for the deducted break total, e.g. `"−1:00 pauza"`.
pub fn break_label(break_mins: u32) -> String {
    format!("\u{2212}{}", break_amount(break_mins))
}

fn break_amount(break_mins: u32) -> String {
    format!("{}:{:02} pauza", break_mins / 60, break_mins % 60)
}

/// Tooltip listing each break window, e.g. `"Pauza 0:30 pauza (14:00–14:30)"`.
pub fn break_tooltip(breaks: &[BreakWindow], break_mins: u32) -> String {
    let windows: Vec<String> = breaks
        .iter()
        .map(|w| {
            format!(
                "{}\u{2013}{}",
                format_minutes(u32::from(w.start.minutes())),
                format_minutes(u32::from(w.end.minutes()))
            )
        })
        .collect();
    let prefix = if breaks.len() == 1 { "Pauza" } else { "Pauzy" };
    format!(
        "{} {} ({})",
        prefix,
        break_amount(break_mins),
        windows.join(", ")
    )
}
