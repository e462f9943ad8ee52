//! Czech public holiday calendar.
//!
//! This module provides the [`HolidayCalendar`], which knows the eleven
//! fixed-date Czech public holidays plus Good Friday and Easter Monday, and
//! answers weekend, holiday and working-day questions for any date.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Arc, RwLock};

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkingFund;

/// Fixed-date public holidays as `(month, day, name)`.
const FIXED_HOLIDAYS: [(u32, u32, &str); 11] = [
    (1, 1, "Nový rok / Den obnovy samostatného českého státu"),
    (5, 1, "Svátek práce"),
    (5, 8, "Den vítězství"),
    (7, 5, "Cyril a Metoděj"),
    (7, 6, "Upálení mistra Jana Husa"),
    (9, 28, "Den české státnosti"),
    (10, 28, "Vznik samostatného československého státu"),
    (11, 17, "Den boje za svobodu a demokracii"),
    (12, 24, "Štědrý den"),
    (12, 25, "1. svátek vánoční"),
    (12, 26, "2. svátek vánoční"),
];

/// Name of the Friday before Easter Sunday.
pub const GOOD_FRIDAY: &str = "Velký pátek";

/// Name of the Monday after Easter Sunday.
pub const EASTER_MONDAY: &str = "Velikonoční pondělí";

/// Years the calendar answers for.
///
/// Starts with the first full year of the Gregorian calendar; the upper bound
/// keeps the per-year cache bounded.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1583..=9999;

/// Fails with [`EngineError::InvalidYear`] outside [`SUPPORTED_YEARS`].
pub fn ensure_supported_year(year: i32) -> EngineResult<()> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(EngineError::InvalidYear { year })
    }
}

/// Computes Easter Sunday with the Anonymous Gregorian algorithm.
///
/// Returns `None` only if the year is outside the range `chrono` can represent.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Returns true if the date is a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap())); // Saturday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())); // Monday
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns every date of the given month, in order.
///
/// Fails with [`EngineError::InvalidMonth`] when `month` is outside 1-12.
pub fn month_days(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { year, month })?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect())
}

/// The public holidays of a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearHolidays {
    year: i32,
    by_date: HashMap<NaiveDate, &'static str>,
}

impl YearHolidays {
    fn build(year: i32) -> Self {
        let mut by_date: HashMap<NaiveDate, &'static str> = FIXED_HOLIDAYS
            .iter()
            .filter_map(|&(month, day, name)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| (date, name))
            })
            .collect();

        if let Some(easter) = easter_sunday(year) {
            by_date.insert(easter - Duration::days(2), GOOD_FRIDAY);
            by_date.insert(easter + Duration::days(1), EASTER_MONDAY);
        }

        Self { year, by_date }
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Name of the holiday on `date`, if any.
    pub fn name(&self, date: NaiveDate) -> Option<&'static str> {
        self.by_date.get(&date).copied()
    }

    /// Number of holidays in the year.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns true if the table is empty (only for unrepresentable years).
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// All holidays sorted by date.
    pub fn sorted(&self) -> Vec<(NaiveDate, &'static str)> {
        let mut out: Vec<_> = self.by_date.iter().map(|(d, n)| (*d, *n)).collect();
        out.sort_by_key(|(d, _)| *d);
        out
    }
}

/// Czech public holiday calendar with a per-year memo.
///
/// Year tables are pure functions of the year, so concurrent misses may build
/// the same table twice; the last write wins. Share one instance per process.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new();
/// let good_friday = NaiveDate::from_ymd_opt(2026, 4, 3).unwrap();
/// assert_eq!(calendar.holiday_name(good_friday), Some("Velký pátek"));
/// assert_eq!(calendar.working_days_in_month(2026, 1).unwrap(), 21);
/// ```
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    cache: RwLock<HashMap<i32, Arc<YearHolidays>>>,
}

impl HolidayCalendar {
    /// Creates a calendar with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the holiday table for `year`, building it on first use.
    ///
    /// Years outside [`SUPPORTED_YEARS`] are rejected and never cached.
    pub fn holidays_for_year(&self, year: i32) -> EngineResult<Arc<YearHolidays>> {
        ensure_supported_year(year)?;

        if let Ok(cache) = self.cache.read() {
            if let Some(holidays) = cache.get(&year) {
                return Ok(Arc::clone(holidays));
            }
        }

        let holidays = Arc::new(YearHolidays::build(year));
        debug!(year, holidays = holidays.len(), "Built holiday table");

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(year, Arc::clone(&holidays));
        }
        Ok(holidays)
    }

    /// Number of years currently cached.
    pub fn cached_years(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Name of the public holiday on `date`, if it is one.
    ///
    /// Dates in unsupported years have no holidays.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&'static str> {
        self.holidays_for_year(date.year()).ok()?.name(date)
    }

    /// Returns true if the date is a Saturday or Sunday.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }

    /// Counts the days of the month that are neither weekend nor holiday.
    ///
    /// Fails with [`EngineError::InvalidMonth`] when `month` is outside 1-12
    /// and with [`EngineError::InvalidYear`] outside [`SUPPORTED_YEARS`].
    pub fn working_days_in_month(&self, year: i32, month: u32) -> EngineResult<u32> {
        let days = month_days(year, month)?;
        let holidays = self.holidays_for_year(year)?;
        let count = days
            .into_iter()
            .filter(|d| !is_weekend(*d) && holidays.name(*d).is_none())
            .count();
        Ok(count as u32)
    }

    /// The month's working-day fund at `daily_hours` per working day.
    pub fn working_fund(&self, year: i32, month: u32, daily_hours: u32) -> EngineResult<WorkingFund> {
        let working_days = self.working_days_in_month(year, month)?;
        Ok(WorkingFund {
            working_days,
            hours: working_days * daily_hours,
        })
    }
}
