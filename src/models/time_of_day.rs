//! Minute-of-day value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculation::to_minutes;

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when text is not a valid `HH:MM` time of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time of day '{0}', expected HH:MM between 00:00 and 23:59")]
pub struct ParseTimeError(pub String);

/// A wall-clock time expressed as minutes since midnight (0..=1439).
///
/// Serializes as the canonical `"HH:MM"` string.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeOfDay;
///
/// let t: TimeOfDay = "17:00".parse().unwrap();
/// assert_eq!(t.minutes(), 1020);
/// assert_eq!(t.to_string(), "17:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Creates a time from minutes since midnight, or `None` past 23:59.
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Creates a time from an hour (0-23) and minute (0-59).
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_minutes(s)
            .map(Self)
            .ok_or_else(|| ParseTimeError(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
