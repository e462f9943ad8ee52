//! Parsing and normalization of user-entered time text.
//!
//! Normalization and validation are separate steps: [`normalize_time`]
//! rewrites the shapes it recognises and passes everything else through, and
//! [`is_valid_time_or_empty`] is the gate a caller applies before storing.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::TimeOfDay;

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid regex"));
static WITH_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("valid regex"));
static HOUR_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").expect("valid regex"));
static CANONICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("valid regex"));
static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid regex"));

/// Default start of the afternoon bucket (17:00).
pub const DEFAULT_AFTERNOON_CUTOFF: TimeOfDay = match TimeOfDay::from_hm(17, 0) {
    Some(t) => t,
    None => TimeOfDay::MIDNIGHT,
};

fn in_range(hour: u16, minute: u16) -> bool {
    hour <= 23 && minute <= 59
}

/// Rewrites free-form time text into `HH:MM`.
///
/// Recognised shapes:
/// - four digits without separator (`"1000"` → `"10:00"`)
/// - `H:MM` or `HH:MM` (`"7:30"` → `"07:30"`)
/// - a bare hour from 1 to 23 (`"7"` → `"07:00"`); `"0"` is not accepted
///
/// Whitespace-only input becomes the empty string. Out-of-range values and
/// unrecognised shapes are returned trimmed but otherwise unchanged.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::normalize_time;
///
/// assert_eq!(normalize_time("1000"), "10:00");
/// assert_eq!(normalize_time(" 7:30 "), "07:30");
/// assert_eq!(normalize_time("23"), "23:00");
/// assert_eq!(normalize_time("9:5"), "9:5");
/// ```
pub fn normalize_time(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() {
        return String::new();
    }

    if FOUR_DIGITS.is_match(v) {
        if let (Ok(hour), Ok(minute)) = (v[..2].parse::<u16>(), v[2..].parse::<u16>()) {
            if in_range(hour, minute) {
                return format!("{:02}:{:02}", hour, minute);
            }
        }
        return v.to_string();
    }

    if let Some(caps) = WITH_COLON.captures(v) {
        if let (Ok(hour), Ok(minute)) = (caps[1].parse::<u16>(), caps[2].parse::<u16>()) {
            if in_range(hour, minute) {
                return format!("{:02}:{:02}", hour, minute);
            }
        }
        return v.to_string();
    }

    if HOUR_ONLY.is_match(v) {
        if let Ok(hour) = v.parse::<u16>() {
            // Midnight cannot be entered as a bare "0".
            if (1..=23).contains(&hour) {
                return format!("{:02}:00", hour);
            }
        }
    }

    v.to_string()
}

/// Returns true if the text normalizes to nothing or to a valid `HH:MM`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_valid_time_or_empty;
///
/// assert!(is_valid_time_or_empty(""));
/// assert!(is_valid_time_or_empty("1000"));
/// assert!(!is_valid_time_or_empty("9:5"));
/// assert!(!is_valid_time_or_empty("2460"));
/// ```
pub fn is_valid_time_or_empty(value: &str) -> bool {
    let v = normalize_time(value);
    v.is_empty() || CANONICAL.is_match(&v)
}

/// Parses `H:MM` or `HH:MM` (00:00-23:59) into minutes since midnight.
///
/// No trimming is done; any other shape yields `None`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::to_minutes;
///
/// assert_eq!(to_minutes("09:05"), Some(545));
/// assert_eq!(to_minutes("9:05"), Some(545));
/// assert_eq!(to_minutes("0905"), None);
/// ```
pub fn to_minutes(value: &str) -> Option<u16> {
    let caps = CLOCK_TIME.captures(value)?;
    let hour: u16 = caps[1].parse().ok()?;
    let minute: u16 = caps[2].parse().ok()?;
    Some(hour * 60 + minute)
}

/// Parses optional time text into a [`TimeOfDay`].
pub fn parse_time(value: Option<&str>) -> Option<TimeOfDay> {
    value
        .and_then(to_minutes)
        .and_then(TimeOfDay::from_minutes)
}

/// Resolves an afternoon cutoff setting, falling back when it does not parse.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{parse_cutoff, DEFAULT_AFTERNOON_CUTOFF};
///
/// assert_eq!(parse_cutoff(Some("18:30"), DEFAULT_AFTERNOON_CUTOFF).to_string(), "18:30");
/// assert_eq!(parse_cutoff(Some("late"), DEFAULT_AFTERNOON_CUTOFF).to_string(), "17:00");
/// assert_eq!(parse_cutoff(None, DEFAULT_AFTERNOON_CUTOFF).to_string(), "17:00");
/// ```
pub fn parse_cutoff(value: Option<&str>, fallback: TimeOfDay) -> TimeOfDay {
    parse_time(value).unwrap_or(fallback)
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_four_digits() {
        assert_eq!(normalize_time("1000"), "10:00");
        assert_eq!(normalize_time("0730"), "07:30");
        assert_eq!(normalize_time("0000"), "00:00");
        assert_eq!(normalize_time("2359"), "23:59");
    }

    #[test]
    fn test_normalize_four_digits_out_of_range_passes_through() {
        assert_eq!(normalize_time("2400"), "2400");
        assert_eq!(normalize_time("1260"), "1260");
        assert!(!is_valid_time_or_empty("2400"));
    }

    #[test]
    fn test_normalize_colon_pads_hour() {
        assert_eq!(normalize_time("7:30"), "07:30");
        assert_eq!(normalize_time("07:30"), "07:30");
        assert_eq!(normalize_time("0:15"), "00:15");
    }

    #[test]
    fn test_normalize_colon_out_of_range_passes_through() {
        assert_eq!(normalize_time("25:00"), "25:00");
        assert_eq!(normalize_time("10:75"), "10:75");
    }

    #[test]
    fn test_normalize_single_minute_digit_is_not_recognised() {
        assert_eq!(normalize_time("9:5"), "9:5");
        assert!(!is_valid_time_or_empty("9:5"));
    }

    #[test]
    fn test_normalize_hour_only() {
        assert_eq!(normalize_time("1"), "01:00");
        assert_eq!(normalize_time("9"), "09:00");
        assert_eq!(normalize_time("23"), "23:00");
        assert_eq!(normalize_time("24"), "24");
    }

    #[test]
    fn test_normalize_bare_zero_is_not_midnight() {
        // Documented quirk: a bare zero is left as-is and fails validation.
        assert_eq!(normalize_time("0"), "0");
        assert_eq!(normalize_time("00"), "00");
        assert!(!is_valid_time_or_empty("0"));
    }

    #[test]
    fn test_normalize_empty_and_whitespace() {
        assert_eq!(normalize_time(""), "");
        assert_eq!(normalize_time("   "), "");
        assert!(is_valid_time_or_empty("  "));
    }

    #[test]
    fn test_normalize_trims_and_passes_unknown_shapes() {
        assert_eq!(normalize_time(" 10:00 "), "10:00");
        assert_eq!(normalize_time("10.00"), "10.00");
        assert_eq!(normalize_time("abc"), "abc");
        assert_eq!(normalize_time("12345"), "12345");
    }

    #[test]
    fn test_normalize_rejects_non_ascii_digits() {
        // Arabic-Indic digits are not treated as numbers
        assert_eq!(normalize_time("١٠٠٠"), "١٠٠٠");
        assert!(!is_valid_time_or_empty("١٠٠٠"));
    }

    #[test]
    fn test_normalize_is_idempotent_on_valid_output() {
        for input in ["1000", "7:30", "5", "23:59", "0000"] {
            let once = normalize_time(input);
            assert_eq!(normalize_time(&once), once, "input {}", input);
        }
    }

    #[test]
    fn test_to_minutes() {
        assert_eq!(to_minutes("00:00"), Some(0));
        assert_eq!(to_minutes("23:59"), Some(1439));
        assert_eq!(to_minutes("8:00"), Some(480));
        assert_eq!(to_minutes("24:00"), None);
        assert_eq!(to_minutes("12:60"), None);
        assert_eq!(to_minutes(" 08:00"), None);
        assert_eq!(to_minutes(""), None);
        assert_eq!(to_minutes("1000"), None);
    }

    #[test]
    fn test_parse_time_optional() {
        assert_eq!(parse_time(Some("08:00")).map(TimeOfDay::minutes), Some(480));
        assert_eq!(parse_time(Some("nope")), None);
        assert_eq!(parse_time(None), None);
    }

    #[test]
    fn test_parse_cutoff_fallback() {
        let fallback = TimeOfDay::from_hm(16, 0).unwrap();
        assert_eq!(parse_cutoff(Some("18:00"), fallback).minutes(), 1080);
        assert_eq!(parse_cutoff(Some(""), fallback), fallback);
        assert_eq!(parse_cutoff(None, fallback), fallback);
    }

    #[test]
    fn test_default_cutoff_is_five_pm() {
        assert_eq!(DEFAULT_AFTERNOON_CUTOFF.minutes(), 17 * 60);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(840), "14:00");
        assert_eq!(format_minutes(870), "14:30");
    }

    proptest::proptest! {
        #[test]
        fn prop_normalize_is_idempotent(input in "[0-9: ]{0,6}|\\PC{0,8}") {
            let once = normalize_time(&input);
            proptest::prop_assert_eq!(normalize_time(&once), once);
        }

        #[test]
        fn prop_valid_text_has_minutes(input in "[0-9: ]{0,6}") {
            let normalized = normalize_time(&input);
            if is_valid_time_or_empty(&input) && !normalized.is_empty() {
                proptest::prop_assert!(to_minutes(&normalized).is_some());
            }
        }

        #[test]
        fn prop_clock_times_round_trip(minutes in 0u32..1440) {
            let text = format_minutes(minutes);
            proptest::prop_assert_eq!(normalize_time(&text), text.clone());
            proptest::prop_assert_eq!(to_minutes(&text).map(u32::from), Some(minutes));
        }
    }
}
