//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe logging and calendar settings with serde defaults.
//! - Apply `TASKFLOW_*` environment overrides on top of file values.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Calendar hour range stays inside one day.

use crate::logging::default_log_level;
use crate::model::project::ProjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "TASKFLOW_LOG_LEVEL";
/// Environment variable overriding `log_dir`.
pub const ENV_LOG_DIR: &str = "TASKFLOW_LOG_DIR";

const DEFAULT_FIRST_HOUR: u32 = 8;
const DEFAULT_HOUR_COUNT: u32 = 12;
const DEFAULT_UPCOMING_LIMIT: usize = 8;

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    InvalidCalendarHours { first_hour: u32, hour_count: u32 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid config document: {err}"),
            Self::InvalidCalendarHours {
                first_hour,
                hour_count,
            } => write!(
                f,
                "calendar hours must start within 0..=23 and cover at least one hour, got first_hour={first_hour} hour_count={hour_count}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidCalendarHours { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Week calendar layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First hour row of the day grid.
    pub first_hour: u32,
    /// Number of hour rows.
    pub hour_count: u32,
    /// Length of the upcoming-meetings list.
    pub upcoming_limit: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_hour: DEFAULT_FIRST_HOUR,
            hour_count: DEFAULT_HOUR_COUNT,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

/// Top-level core configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub log_level: String,
    /// File logging is enabled only when a directory is set.
    pub log_dir: Option<PathBuf>,
    /// Pins calendar "today"; falls back to the data set reference date,
    /// then the local clock.
    pub today: Option<NaiveDate>,
    /// Project selected at startup; unknown ids fall back to the first one.
    pub initial_project_id: Option<ProjectId>,
    pub calendar: CalendarConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            today: None,
            initial_project_id: None,
            calendar: CalendarConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `TASKFLOW_LOG_LEVEL` / `TASKFLOW_LOG_DIR` from the process
    /// environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Blank values are ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(dir) = non_blank(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir.trim()));
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let CalendarConfig {
            first_hour,
            hour_count,
            ..
        } = self.calendar;
        if first_hour > 23 || hour_count == 0 {
            return Err(ConfigError::InvalidCalendarHours {
                first_hour,
                hour_count,
            });
        }
        Ok(())
    }
}
