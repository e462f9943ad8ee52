//! Per-day calculation output.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// A mandatory unpaid break inside a worked interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// Start of the break (inclusive).
    pub start: TimeOfDay,
    /// End of the break (exclusive).
    pub end: TimeOfDay,
}

impl BreakWindow {
    /// Length of the break in minutes; zero for an inverted window.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minutes().saturating_sub(self.start.minutes()))
    }
}

/// A worked stretch of a day that remains after breaks are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSegment {
    /// Start of the segment (inclusive).
    pub start: TimeOfDay,
    /// End of the segment (exclusive).
    pub end: TimeOfDay,
}

impl WorkSegment {
    /// Length of the segment in minutes.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.end.minutes().saturating_sub(self.start.minutes()))
    }

    /// Minutes of this segment that fall inside `[from, until)`.
    pub fn overlap_minutes(&self, from: u32, until: u32) -> u32 {
        let start = u32::from(self.start.minutes()).max(from);
        let end = u32::from(self.end.minutes()).min(until);
        end.saturating_sub(start)
    }
}

/// The computed result for one attendance day.
///
/// `worked_mins` is `None` when the day has no valid interval (missing or
/// unparseable times, or departure not after arrival). The classification
/// flags are filled in either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayComputed {
    /// Minutes worked after break deduction.
    pub worked_mins: Option<u32>,
    /// Total minutes of deducted breaks.
    pub break_mins: u32,
    /// Short label such as `"−0:30 pauza"`.
    pub break_label: Option<String>,
    /// Tooltip listing the break windows.
    pub break_tooltip: Option<String>,
    /// Minutes worked at or after the afternoon cutoff.
    pub afternoon_mins: u32,
    /// Minutes worked on a weekend or public holiday.
    pub weekend_holiday_mins: u32,
    /// Whether the date is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Name of the public holiday on this date.
    pub holiday_name: Option<String>,
    /// `is_weekend || holiday_name.is_some()`.
    pub is_weekend_or_holiday: bool,
    /// Deducted break windows, in order.
    #[serde(default)]
    pub breaks: Vec<BreakWindow>,
    /// Worked segments between arrival, breaks and departure, in order.
    #[serde(default)]
    pub segments: Vec<WorkSegment>,
}

impl DayComputed {
    /// Returns true if the day carries a valid worked interval.
    pub fn has_interval(&self) -> bool {
        self.worked_mins.is_some()
    }
}
