//! Configuration management

use crate::domain::merge::DEFAULT_TOLERANCE_SECS;
use crate::domain::Locale;
use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_merge_tolerance_secs")]
    pub merge_tolerance_secs: i64,
    pub created: DateTime<Utc>,
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_merge_tolerance_secs() -> i64 {
    DEFAULT_TOLERANCE_SECS
}

impl Config {
    /// Create a new config with default values
    pub fn new(locale: Locale) -> Self {
        Config {
            locale,
            window_days: DEFAULT_WINDOW_DAYS,
            merge_tolerance_secs: DEFAULT_TOLERANCE_SECS,
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        // Ensure .moodlog directory exists
        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_days == 0 {
            return Err(MoodlogError::Config(
                "window_days must be at least 1".to_string(),
            ));
        }
        if self.merge_tolerance_secs < 0 {
            return Err(MoodlogError::Config(
                "merge_tolerance_secs must not be negative".to_string(),
            ));
        }
        self.merge_tolerance()?;
        Ok(())
    }

    /// The merge tolerance as a duration
    pub fn merge_tolerance(&self) -> Result<Duration> {
        Duration::try_seconds(self.merge_tolerance_secs).ok_or_else(|| {
            MoodlogError::Config(format!(
                "merge_tolerance_secs is out of range: {}",
                self.merge_tolerance_secs
            ))
        })
    }

    /// Display locale, with MOODLOG_LOCALE taking precedence over the file
    pub fn effective_locale(&self) -> Locale {
        std::env::var("MOODLOG_LOCALE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(Locale::En);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.window_days, 7);
        assert_eq!(config.merge_tolerance_secs, 30);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(Locale::De);

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".moodlog").exists());
        assert!(temp.path().join(".moodlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();

        assert_eq!(loaded.locale, config.locale);
        assert_eq!(loaded.window_days, config.window_days);
        assert_eq!(loaded.merge_tolerance_secs, config.merge_tolerance_secs);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            MoodlogError::NotMoodlogDirectory(_) => {}
            _ => panic!("Expected NotMoodlogDirectory error"),
        }
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();
        fs::write(
            temp.path().join(".moodlog/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.locale, Locale::De);
        assert_eq!(loaded.window_days, DEFAULT_WINDOW_DAYS);
        assert_eq!(loaded.merge_tolerance_secs, DEFAULT_TOLERANCE_SECS);
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();
        fs::write(
            temp.path().join(".moodlog/config.toml"),
            "window_days = 0\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            MoodlogError::Config(msg) => assert!(msg.contains("window_days")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_tolerance_must_fit_a_duration() {
        let mut config = Config::new(Locale::De);
        assert_eq!(config.merge_tolerance().unwrap(), Duration::seconds(30));

        config.merge_tolerance_secs = i64::MAX;
        match config.validate().unwrap_err() {
            MoodlogError::Config(msg) => assert!(msg.contains("out of range")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(config.merge_tolerance().is_err());
    }

    #[test]
    fn test_out_of_range_tolerance_rejected_on_load() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();
        fs::write(
            temp.path().join(".moodlog/config.toml"),
            "merge_tolerance_secs = 9223372036854775807\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        assert!(Config::load_from_dir(temp.path()).is_err());
    }

    #[test]
    fn test_effective_locale_falls_back_to_file() {
        let config = Config::new(Locale::En);
        // MOODLOG_LOCALE may be set in the environment running the tests
        let locale = config.effective_locale();
        assert!(locale == Locale::En || std::env::var("MOODLOG_LOCALE").is_ok());
    }
}
