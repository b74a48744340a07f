//! Config management use case

use crate::domain::Locale;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, EntryRepository, FileSystemRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "locale, window_days, merge_tolerance_secs, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "locale" => Ok(config.locale.to_string()),
            "window_days" => Ok(config.window_days.to_string()),
            "merge_tolerance_secs" => Ok(config.merge_tolerance_secs.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "locale" => {
                config.locale = Locale::from_str(value).map_err(MoodlogError::Config)?;
            }
            "window_days" => {
                config.window_days = value.trim().parse().map_err(|_| {
                    MoodlogError::Config(format!("Invalid window_days: '{}'", value))
                })?;
            }
            "merge_tolerance_secs" => {
                config.merge_tolerance_secs = value.trim().parse().map_err(|_| {
                    MoodlogError::Config(format!("Invalid merge_tolerance_secs: '{}'", value))
                })?;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: locale, window_days, merge_tolerance_secs",
                    key
                )));
            }
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
