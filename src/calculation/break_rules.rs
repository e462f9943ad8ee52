//! Mandatory unpaid break rules.
//!
//! A worked interval that reaches a tier's threshold gets a break window
//! placed at a fixed offset from arrival. The default rule set inserts a
//! 30 minute break six hours in once the interval reaches 6h30m, and a second
//! one twelve hours in once it reaches 12h30m.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{BreakWindow, TimeOfDay, WorkSegment};

/// One break tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakTier {
    /// Minimum interval length (minutes) that triggers this break.
    pub threshold_minutes: u32,
    /// Minutes from arrival at which the break starts.
    pub offset_minutes: u32,
    /// Length of the break in minutes.
    pub duration_minutes: u32,
}

impl BreakTier {
    /// Creates a tier.
    pub const fn new(threshold_minutes: u32, offset_minutes: u32, duration_minutes: u32) -> Self {
        Self {
            threshold_minutes,
            offset_minutes,
            duration_minutes,
        }
    }

    /// Minutes from arrival at which the break ends, if representable.
    pub fn window_end(&self) -> Option<u32> {
        self.offset_minutes.checked_add(self.duration_minutes)
    }
}

/// The default tiers: 30 minutes at 6h00 once 6h30 is reached, and again at
/// 12h00 once 12h30 is reached.
pub const DEFAULT_BREAK_TIERS: [BreakTier; 2] =
    [BreakTier::new(390, 360, 30), BreakTier::new(750, 720, 30)];

/// A validated, ordered set of break tiers.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::BreakRules;
/// use attendance_engine::models::TimeOfDay;
///
/// let rules = BreakRules::default();
/// let start = TimeOfDay::from_hm(8, 0).unwrap();
/// let end = TimeOfDay::from_hm(16, 0).unwrap();
///
/// let breaks = rules.compute_breaks(start, end);
/// assert_eq!(breaks.len(), 1);
/// assert_eq!(breaks[0].start.to_string(), "14:00");
/// assert_eq!(breaks[0].end.to_string(), "14:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BreakTier>", into = "Vec<BreakTier>")]
pub struct BreakRules {
    tiers: Vec<BreakTier>,
}

impl Default for BreakRules {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_BREAK_TIERS.to_vec(),
        }
    }
}

impl BreakRules {
    /// Validates and wraps a list of tiers.
    ///
    /// Every window must fit inside the interval that triggers it, and
    /// consecutive windows must be ordered and must not overlap.
    pub fn new(tiers: Vec<BreakTier>) -> EngineResult<Self> {
        for (index, tier) in tiers.iter().enumerate() {
            if tier.duration_minutes == 0 {
                return Err(invalid(index, "duration_minutes must be positive"));
            }
            match tier.window_end() {
                Some(end) if end <= tier.threshold_minutes => {}
                _ => {
                    return Err(invalid(
                        index,
                        "offset_minutes + duration_minutes must not exceed threshold_minutes",
                    ));
                }
            }
        }
        for (index, pair) in tiers.windows(2).enumerate() {
            if pair[0].window_end().is_none_or(|end| end > pair[1].offset_minutes) {
                return Err(invalid(
                    index + 1,
                    "break must start after the previous break ends",
                ));
            }
        }
        Ok(Self { tiers })
    }

    /// Rules that never produce a break.
    pub fn none() -> Self {
        Self { tiers: Vec::new() }
    }

    /// The configured tiers, in order.
    pub fn tiers(&self) -> &[BreakTier] {
        &self.tiers
    }

    /// Returns the break windows owed for the interval `[start, end)`.
    ///
    /// Windows are sorted and nested inside the interval. An empty or
    /// inverted interval has no breaks.
    pub fn compute_breaks(&self, start: TimeOfDay, end: TimeOfDay) -> Vec<BreakWindow> {
        if end <= start {
            return Vec::new();
        }
        let start_min = u32::from(start.minutes());
        let duration = u32::from(end.minutes()) - start_min;

        self.tiers
            .iter()
            .filter(|tier| duration >= tier.threshold_minutes)
            .filter_map(|tier| {
                let break_start = start_min.checked_add(tier.offset_minutes)?;
                let break_end = break_start.checked_add(tier.duration_minutes)?;
                Some(BreakWindow {
                    start: TimeOfDay::from_minutes(u16::try_from(break_start).ok()?)?,
                    end: TimeOfDay::from_minutes(u16::try_from(break_end).ok()?)?,
                })
            })
            .collect()
    }
}

impl TryFrom<Vec<BreakTier>> for BreakRules {
    type Error = EngineError;

    fn try_from(tiers: Vec<BreakTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<BreakRules> for Vec<BreakTier> {
    fn from(rules: BreakRules) -> Self {
        rules.tiers
    }
}

fn invalid(index: usize, message: &str) -> EngineError {
    EngineError::InvalidSettings {
        field: format!("break_rules[{}]", index),
        message: message.to_string(),
    }
}

/// Splits `[start, end)` into the segments left after removing `breaks`.
///
/// Breaks must be sorted by start. Zero-length segments are dropped.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::subtract_breaks;
/// use attendance_engine::models::{BreakWindow, TimeOfDay};
///
/// let t = |h, m| TimeOfDay::from_hm(h, m).unwrap();
/// let breaks = [BreakWindow { start: t(14, 0), end: t(14, 30) }];
/// let segments = subtract_breaks(t(8, 0), t(18, 0), &breaks);
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].end, t(14, 0));
/// assert_eq!(segments[1].start, t(14, 30));
/// ```
pub fn subtract_breaks(
    start: TimeOfDay,
    end: TimeOfDay,
    breaks: &[BreakWindow],
) -> Vec<WorkSegment> {
    let mut segments = Vec::with_capacity(breaks.len() + 1);
    let mut cursor = start;

    for window in breaks {
        if window.start > cursor {
            segments.push(WorkSegment {
                start: cursor,
                end: window.start.min(end),
            });
        }
        cursor = cursor.max(window.end);
    }
    if cursor < end {
        segments.push(WorkSegment { start: cursor, end });
    }

    segments.retain(|s| s.end > s.start);
    segments
}
