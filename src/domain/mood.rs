//! Mood scale conversions and mood tag parsing
//!
//! Entries carry their mood as one of two tag strings:
//!
//! - `mood:<label>` where label is one of the canonical [`MoodLabel`]s
//! - `moodScore:<n>` where n is an integer in 0..=4
//!
//! Aggregation reads mood values through [`resolve_mood`] only, which applies
//! a single precedence rule: a valid `moodScore:` tag wins over any `mood:` tag.

use crate::domain::emotion::{Emotion, MoodLabel};
use crate::domain::text::fold_lower;
use std::fmt;

pub const LABEL_PREFIX: &str = "mood:";
pub const SCORE_PREFIX: &str = "moodScore:";

/// Lowest and highest value on the rescaled mood axis
pub const MOOD_MIN: f64 = -2.0;
pub const MOOD_MAX: f64 = 2.0;

/// Label lookup keys (lowercase, folded) and their value on the -2..=2 axis.
const LABEL_VALUES: &[(&str, f64)] = &[
    ("gluecklich", 2.0),
    ("happy", 2.0),
    ("ruhig", 1.0),
    ("calm", 1.0),
    ("neutral", 0.0),
    ("traurig", -1.0),
    ("sad", -1.0),
    ("gestresst", -1.0),
    ("stressed", -1.0),
    ("wuetend", -2.0),
    ("angry", -2.0),
];

/// A parsed mood tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodTag {
    Label(String),
    Score(u8),
}

impl MoodTag {
    /// Parse a raw tag string. Returns `None` for tags that are not mood tags
    /// and for mood tags with unusable values.
    pub fn parse(tag: &str) -> Option<MoodTag> {
        if let Some(raw) = tag.strip_prefix(SCORE_PREFIX) {
            let n: i64 = raw.trim().parse().ok()?;
            if !(0..=4).contains(&n) {
                return None;
            }
            return Some(MoodTag::Score(n as u8));
        }

        let label = tag.strip_prefix(LABEL_PREFIX)?.trim();
        if label.is_empty() {
            return None;
        }
        Some(MoodTag::Label(label.to_string()))
    }

    /// Value on the -2..=2 axis, if the tag carries a known mood
    pub fn value(&self) -> Option<f64> {
        match self {
            MoodTag::Label(label) => label_to_score(label),
            MoodTag::Score(n) => Some(rescale_score(*n)),
        }
    }
}

impl From<Emotion> for MoodTag {
    fn from(emotion: Emotion) -> Self {
        MoodTag::Score(emotion.score())
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodTag::Label(label) => write!(f, "{}{}", LABEL_PREFIX, label),
            MoodTag::Score(n) => write!(f, "{}{}", SCORE_PREFIX, n),
        }
    }
}

pub fn emotion_to_label(emotion: Emotion) -> MoodLabel {
    emotion.label()
}

pub fn emotion_to_score(emotion: Emotion) -> u8 {
    emotion.score()
}

/// Look up a mood label (any case, umlauts optional, English aliases allowed)
pub fn label_to_score(label: &str) -> Option<f64> {
    let key = fold_lower(label.trim());
    LABEL_VALUES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// Map a 0..=4 score onto the -2..=2 axis
pub fn rescale_score(score: u8) -> f64 {
    (f64::from(score) - 2.0).clamp(MOOD_MIN, MOOD_MAX)
}

/// Parse a full `moodScore:<n>` tag into its -2..=2 value
pub fn score_tag_to_score(tag: &str) -> Option<f64> {
    match MoodTag::parse(tag)? {
        MoodTag::Score(n) => Some(rescale_score(n)),
        MoodTag::Label(_) => None,
    }
}

/// The two persisted tag strings for an emotion: `mood:<Label>` and `moodScore:<n>`
pub fn mood_tags_for(emotion: Emotion) -> [String; 2] {
    [
        MoodTag::Label(emotion.label().as_str().to_string()).to_string(),
        MoodTag::Score(emotion.score()).to_string(),
    ]
}

/// Resolve an entry's mood value from its tags.
///
/// The first valid `moodScore:` tag wins; only when there is none is the
/// first recognised `mood:` label used.
pub fn resolve_mood(tags: &[String]) -> Option<f64> {
    let parsed: Vec<MoodTag> = tags
        .iter()
        .filter(|tag| tag.starts_with(LABEL_PREFIX) || tag.starts_with(SCORE_PREFIX))
        .filter_map(|tag| {
            let mood_tag = MoodTag::parse(tag);
            if mood_tag.is_none() {
                log::debug!("skipping malformed mood tag '{}'", tag);
            }
            mood_tag
        })
        .collect();

    let score = parsed.iter().find_map(|tag| match tag {
        MoodTag::Score(n) => Some(rescale_score(*n)),
        MoodTag::Label(_) => None,
    });
    if score.is_some() {
        return score;
    }

    parsed.iter().find_map(|tag| match tag {
        MoodTag::Label(label) => label_to_score(label),
        MoodTag::Score(_) => None,
    })
}

/// Display label for an entry's tags: the written `mood:` label if any,
/// otherwise the canonical label of its `moodScore:` tag.
pub fn resolve_label(tags: &[String]) -> Option<String> {
    let parsed: Vec<MoodTag> = tags.iter().filter_map(|tag| MoodTag::parse(tag)).collect();

    parsed
        .iter()
        .find_map(|tag| match tag {
            MoodTag::Label(label) => Some(label.clone()),
            MoodTag::Score(_) => None,
        })
        .or_else(|| {
            parsed.iter().find_map(|tag| match tag {
                MoodTag::Score(n) => MoodLabel::from_score(*n).map(|l| l.as_str().to_string()),
                MoodTag::Label(_) => None,
            })
        })
}
