//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application layers
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid emotion record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidTimestamp(_) => 3,
            MoodlogError::InvalidRecord(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidTimestamp(value) => {
                format!(
                    "Invalid timestamp: '{}'\n\n\
                    Expected an RFC 3339 timestamp with offset.\n\
                    Examples:\n\
                    moodlog stats --as-of 2025-01-17T20:00:00+01:00\n\
                    moodlog stats --as-of 2025-01-17T19:00:00Z",
                    value
                )
            }
            MoodlogError::InvalidRecord(msg) => {
                format!(
                    "Invalid emotion record: {}\n\n\
                    A record needs the keys: emotion, confidence, is_crisis, matched_keywords\n\
                    Confidence must lie between 0.55 and 0.98",
                    msg
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("Invalid locale") {
                    format!(
                        "{}\n\n\
                        Valid locales: de, en\n\
                        Example: moodlog config locale en",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
