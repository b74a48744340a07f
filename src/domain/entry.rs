//! Journal entries as handed over by the persistence layer

use crate::domain::mood::resolve_mood;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of writing an entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Journal,
    Reflection,
    Story,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Journal => "journal",
            EntryKind::Reflection => "reflection",
            EntryKind::Story => "story",
        }
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "journal" => Ok(EntryKind::Journal),
            "reflection" => Ok(EntryKind::Reflection),
            "story" => Ok(EntryKind::Story),
            _ => Err(format!(
                "Invalid entry kind: '{}'. Valid kinds are: journal, reflection, story",
                s
            )),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single time-stamped entry. Read-only to the analytics code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub text: String,
    /// Prompt the entry answers, for reflections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl JournalEntry {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>, kind: EntryKind) -> Self {
        JournalEntry {
            id: id.into(),
            created_at,
            kind,
            tags: Vec::new(),
            text: String::new(),
            question: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Mood on the -2..=2 axis, if the tags carry one
    pub fn mood_value(&self) -> Option<f64> {
        resolve_mood(&self.tags)
    }
}
