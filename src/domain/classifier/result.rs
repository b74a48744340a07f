//! Classification result and its key-value record form

use crate::domain::emotion::Emotion;
use crate::error::{MoodlogError, Result};
use serde::{Deserialize, Serialize};

pub const MIN_CONFIDENCE: f64 = 0.55;
pub const MAX_CONFIDENCE: f64 = 0.98;

/// Outcome of one classification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEmotionResult {
    pub emotion: Emotion,
    /// Always within [`MIN_CONFIDENCE`]..=[`MAX_CONFIDENCE`]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub is_crisis: bool,
    /// In scan order
    #[serde(default)]
    pub matched_keywords: Vec<String>,
}

impl DetectedEmotionResult {
    /// Plain key-value record with every field of the result
    pub fn to_record(&self) -> Result<toml::Table> {
        match toml::Value::try_from(self)? {
            toml::Value::Table(table) => Ok(table),
            other => Err(MoodlogError::InvalidRecord(format!(
                "expected a table, got {}",
                other.type_str()
            ))),
        }
    }

    /// Rebuild a result from a record produced by [`Self::to_record`]
    pub fn from_record(record: &toml::Table) -> Result<Self> {
        let result: DetectedEmotionResult = toml::Value::Table(record.clone())
            .try_into()
            .map_err(|e: toml::de::Error| MoodlogError::InvalidRecord(e.message().to_string()))?;
        result.validate()
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let result: DetectedEmotionResult = toml::from_str(text)
            .map_err(|e| MoodlogError::InvalidRecord(e.message().to_string()))?;
        result.validate()
    }

    fn validate(self) -> Result<Self> {
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&self.confidence) {
            return Err(MoodlogError::InvalidRecord(format!(
                "confidence {} outside {}..={}",
                self.confidence, MIN_CONFIDENCE, MAX_CONFIDENCE
            )));
        }
        Ok(self)
    }
}
