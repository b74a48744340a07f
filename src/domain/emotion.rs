//! Emotion variants and the canonical emotion table
//!
//! Every representation of an emotion (mood label, mood score, glyph, color)
//! is a column of [`EmotionProfile`]. Conversions read from this table only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of emotions the classifier can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Calm,
    Surprise,
    Neutral,
    Compassion,
}

/// Display language hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" => Ok(Locale::De),
            "en" => Ok(Locale::En),
            _ => Err(format!(
                "Invalid locale: '{}'. Valid locales are: de, en",
                s
            )),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::De => write!(f, "de"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// The six canonical mood labels persisted in `mood:<label>` tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodLabel {
    Happy,
    Calm,
    Neutral,
    Sad,
    Stressed,
    Angry,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 6] = [
        MoodLabel::Happy,
        MoodLabel::Calm,
        MoodLabel::Neutral,
        MoodLabel::Sad,
        MoodLabel::Stressed,
        MoodLabel::Angry,
    ];

    /// Canonical spelling, exactly as written into tags
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "Glücklich",
            MoodLabel::Calm => "Ruhig",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Sad => "Traurig",
            MoodLabel::Stressed => "Gestresst",
            MoodLabel::Angry => "Wütend",
        }
    }

    /// Localized display name
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::De => self.as_str(),
            Locale::En => match self {
                MoodLabel::Happy => "Happy",
                MoodLabel::Calm => "Calm",
                MoodLabel::Neutral => "Neutral",
                MoodLabel::Sad => "Sad",
                MoodLabel::Stressed => "Stressed",
                MoodLabel::Angry => "Angry",
            },
        }
    }

    /// Label for an integer mood score. Scores shared by two labels resolve to
    /// the first in [`MoodLabel::ALL`].
    pub fn from_score(score: u8) -> Option<MoodLabel> {
        Emotion::ALL
            .iter()
            .map(|e| e.profile())
            .filter(|p| p.score == score)
            .map(|p| p.label)
            .min_by_key(|label| MoodLabel::ALL.iter().position(|l| l == label))
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the canonical emotion table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionProfile {
    pub emotion: Emotion,
    /// Lowercase key, identical to the serde name
    pub key: &'static str,
    pub label: MoodLabel,
    /// Integer mood score in 0..=4
    pub score: u8,
    pub glyph: &'static str,
    /// `#RRGGBB`
    pub color: &'static str,
    pub name_de: &'static str,
    pub name_en: &'static str,
}

/// Indexed by `Emotion as usize`.
const PROFILES: [EmotionProfile; 8] = [
    EmotionProfile {
        emotion: Emotion::Joy,
        key: "joy",
        label: MoodLabel::Happy,
        score: 4,
        glyph: "😊",
        color: "#FFC93C",
        name_de: "Freude",
        name_en: "Joy",
    },
    EmotionProfile {
        emotion: Emotion::Sadness,
        key: "sadness",
        label: MoodLabel::Sad,
        score: 1,
        glyph: "😢",
        color: "#5B8DEF",
        name_de: "Traurigkeit",
        name_en: "Sadness",
    },
    EmotionProfile {
        emotion: Emotion::Anger,
        key: "anger",
        label: MoodLabel::Angry,
        score: 0,
        glyph: "😠",
        color: "#E5484D",
        name_de: "Wut",
        name_en: "Anger",
    },
    EmotionProfile {
        emotion: Emotion::Fear,
        key: "fear",
        label: MoodLabel::Stressed,
        score: 1,
        glyph: "😰",
        color: "#8E6CCF",
        name_de: "Angst",
        name_en: "Fear",
    },
    EmotionProfile {
        emotion: Emotion::Calm,
        key: "calm",
        label: MoodLabel::Calm,
        score: 3,
        glyph: "😌",
        color: "#4CC38A",
        name_de: "Ruhe",
        name_en: "Calm",
    },
    EmotionProfile {
        emotion: Emotion::Surprise,
        key: "surprise",
        label: MoodLabel::Neutral,
        score: 2,
        glyph: "😮",
        color: "#F5A524",
        name_de: "Überraschung",
        name_en: "Surprise",
    },
    EmotionProfile {
        emotion: Emotion::Neutral,
        key: "neutral",
        label: MoodLabel::Neutral,
        score: 2,
        glyph: "😐",
        color: "#9BA1A6",
        name_de: "Neutral",
        name_en: "Neutral",
    },
    EmotionProfile {
        emotion: Emotion::Compassion,
        key: "compassion",
        label: MoodLabel::Calm,
        score: 3,
        glyph: "🤗",
        color: "#F07EB0",
        name_de: "Mitgefühl",
        name_en: "Compassion",
    },
];

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Calm,
        Emotion::Surprise,
        Emotion::Neutral,
        Emotion::Compassion,
    ];

    /// This emotion's row in the canonical table
    pub fn profile(self) -> &'static EmotionProfile {
        &PROFILES[self as usize]
    }

    pub fn label(self) -> MoodLabel {
        self.profile().label
    }

    pub fn score(self) -> u8 {
        self.profile().score
    }

    pub fn glyph(self) -> &'static str {
        self.profile().glyph
    }

    pub fn color(self) -> &'static str {
        self.profile().color
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::De => self.profile().name_de,
            Locale::En => self.profile().name_en,
        }
    }

    /// Stable lowercase key used in records
    pub fn key(self) -> &'static str {
        self.profile().key
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Emotion::ALL
            .iter()
            .copied()
            .find(|e| e.key() == wanted)
            .ok_or_else(|| format!("Unknown emotion: '{}'", s))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
