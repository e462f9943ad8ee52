//! Configuration types for the attendance engine.
//!
//! This module contains the raw structure deserialized from `settings.yaml`
//! and the validated [`EngineSettings`] built from it.

use serde::Deserialize;

use crate::calculation::{BreakRules, BreakTier, DEFAULT_AFTERNOON_CUTOFF};
use crate::models::TimeOfDay;

/// Default contracted hours per working day.
pub const DEFAULT_WORKING_DAY_HOURS: u32 = 8;

/// `settings.yaml` as written on disk. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Start of the afternoon bucket as `HH:MM` text.
    #[serde(default)]
    pub afternoon_cutoff: Option<String>,
    /// Contracted hours per working day, used for the working-day fund.
    #[serde(default)]
    pub working_day_hours: Option<u32>,
    /// Break tiers, in order.
    #[serde(default)]
    pub break_rules: Option<Vec<BreakTier>>,
}

/// Validated engine settings.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineSettings;
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.afternoon_cutoff.to_string(), "17:00");
/// assert_eq!(settings.working_day_hours, 8);
/// assert_eq!(settings.break_rules.tiers().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Organization-wide start of the afternoon bucket.
    pub afternoon_cutoff: TimeOfDay,
    /// Contracted hours per working day.
    pub working_day_hours: u32,
    /// Mandatory break rules for salaried days.
    pub break_rules: BreakRules,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            afternoon_cutoff: DEFAULT_AFTERNOON_CUTOFF,
            working_day_hours: DEFAULT_WORKING_DAY_HOURS,
            break_rules: BreakRules::default(),
        }
    }
}
