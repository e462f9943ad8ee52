//! Conversion of minute totals into displayed hours.
//!
//! Sheets, print previews and CSV exports all show hours with exactly one
//! decimal place. The value rounded is the binary `f64` quotient
//! `minutes / 60.0`, so `9` minutes (`0.1499999...`) shows as `0.1` while an
//! exactly representable tie such as `0.25` rounds up to `0.3`. Existing
//! exports were produced this way and must keep matching.

use rust_decimal::{Decimal, RoundingStrategy};

/// Converts minutes into hours rounded to one decimal place.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(450), Decimal::new(75, 1));
/// assert_eq!(minutes_to_hours(9), Decimal::new(1, 1));
/// ```
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    let quotient = f64::from(minutes) / 60.0;
    let exact = Decimal::from_f64_retain(quotient)
        .unwrap_or_else(|| Decimal::from(minutes) / Decimal::from(60));
    let mut hours = exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    hours.rescale(1);
    hours
}

/// Formats minutes as hours with one decimal, e.g. `480` → `"8.0"`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::format_hours;
///
/// assert_eq!(format_hours(480), "8.0");
/// assert_eq!(format_hours(45), "0.8");
/// ```
pub fn format_hours(minutes: u32) -> String {
    minutes_to_hours(minutes).to_string()
}
