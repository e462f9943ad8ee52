//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::{BreakRules, to_minutes};
use crate::error::{EngineError, EngineResult};
use crate::models::TimeOfDay;

use super::types::{EngineSettings, SettingsFile};

/// Name of the settings file inside a configuration directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Loads and provides access to engine settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── settings.yaml   # Afternoon cutoff, working-day hours, break tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Afternoon starts at {}", loader.settings().afternoon_cutoff);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_settings(EngineSettings::default())
    }
}

impl ConfigLoader {
    /// Loads `settings.yaml` from the specified directory.
    ///
    /// Returns an error if:
    /// - the file is missing ([`EngineError::ConfigNotFound`])
    /// - the file is not valid YAML or has unknown keys ([`EngineError::ConfigParseError`])
    /// - a value is out of range ([`EngineError::InvalidSettings`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings_path = path.as_ref().join(SETTINGS_FILE);
        let file = Self::load_yaml::<SettingsFile>(&settings_path)?;
        let settings = Self::validate(file)?;

        info!(
            path = %settings_path.display(),
            afternoon_cutoff = %settings.afternoon_cutoff,
            working_day_hours = settings.working_day_hours,
            break_tiers = settings.break_rules.tiers().len(),
            "Loaded engine settings"
        );

        Ok(Self { settings })
    }

    /// Wraps already-built settings.
    pub fn from_settings(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return serde_yaml::from_str("{}").map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            });
        }

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Turns the raw file into validated settings, applying defaults.
    fn validate(file: SettingsFile) -> EngineResult<EngineSettings> {
        let defaults = EngineSettings::default();

        let afternoon_cutoff = match file.afternoon_cutoff {
            Some(text) => to_minutes(&text)
                .and_then(TimeOfDay::from_minutes)
                .ok_or_else(|| EngineError::InvalidSettings {
                    field: "afternoon_cutoff".to_string(),
                    message: format!("'{}' is not a valid HH:MM time", text),
                })?,
            None => defaults.afternoon_cutoff,
        };

        let working_day_hours = file.working_day_hours.unwrap_or(defaults.working_day_hours);
        if !(1..=24).contains(&working_day_hours) {
            return Err(EngineError::InvalidSettings {
                field: "working_day_hours".to_string(),
                message: format!("{} is outside 1-24", working_day_hours),
            });
        }

        let break_rules = match file.break_rules {
            Some(tiers) => BreakRules::new(tiers)?,
            None => defaults.break_rules,
        };

        Ok(EngineSettings {
            afternoon_cutoff,
            working_day_hours,
            break_rules,
        })
    }

    /// Returns the validated settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}
