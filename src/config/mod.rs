//! Configuration loading and management for the attendance engine.
//!
//! This module loads organization-wide settings from a YAML file: the
//! afternoon cutoff, the contracted hours per working day and the break tiers.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Working day: {} h", config.settings().working_day_hours);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use types::{DEFAULT_WORKING_DAY_HOURS, EngineSettings, SettingsFile};
