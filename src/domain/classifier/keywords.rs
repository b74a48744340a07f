//! Keyword tables for the emotion and crisis passes
//!
//! Tables are compiled once, on first use, and never mutated.

use crate::domain::emotion::Emotion;
use crate::domain::text::fold_lower;
use regex::Regex;
use std::sync::OnceLock;

/// Keywords per non-neutral emotion, German and English mixed. Table order is
/// the scan order, which is also the order of reported matches.
pub const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "glücklich",
            "freude",
            "freue mich",
            "fröhlich",
            "begeistert",
            "wunderbar",
            "großartig",
            "happy",
            "joyful",
            "glad",
            "excited",
            "wonderful",
            "awesome",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "traurig",
            "weinen",
            "einsam",
            "vermisse",
            "enttäuscht",
            "niedergeschlagen",
            "hoffnungslos",
            "sad",
            "crying",
            "lonely",
            "heartbroken",
            "disappointed",
            "hopeless",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "wütend",
            "wut",
            "sauer",
            "ärgerlich",
            "genervt",
            "zornig",
            "angry",
            "furious",
            "annoyed",
            "irritated",
            "pissed",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "angst",
            "ängstlich",
            "panik",
            "nervös",
            "gestresst",
            "überfordert",
            "afraid",
            "scared",
            "anxious",
            "worried",
            "panic",
            "nervous",
            "stressed",
            "overwhelmed",
        ],
    ),
    (
        Emotion::Calm,
        &[
            "ruhig",
            "entspannt",
            "gelassen",
            "ausgeglichen",
            "friedlich",
            "calm",
            "relaxed",
            "peaceful",
            "serene",
            "at ease",
        ],
    ),
    (
        Emotion::Surprise,
        &[
            "überrascht",
            "überraschung",
            "unerwartet",
            "erstaunt",
            "surprised",
            "unexpected",
            "astonished",
            "amazed",
        ],
    ),
    (
        Emotion::Compassion,
        &[
            "mitgefühl",
            "mitleid",
            "dankbar",
            "verbunden",
            "für andere da",
            "compassion",
            "empathy",
            "grateful",
            "kindness",
            "caring",
        ],
    ),
];

/// Self-harm and suicidality phrases. Advisory only; no negation handling.
pub const CRISIS_PHRASES: &[&str] = &[
    "suizid",
    "selbstmord",
    "mich umbringen",
    "nicht mehr leben",
    "will sterben",
    "mir etwas antun",
    "ritzen",
    "kill myself",
    "suicide",
    "end my life",
    "want to die",
    "harm myself",
    "hurt myself",
    "self-harm",
    "no reason to live",
];

/// A keyword prepared for the three-way match
#[derive(Debug)]
pub struct Keyword {
    pub raw: &'static str,
    lower: String,
    folded: String,
    pattern: Regex,
}

impl Keyword {
    fn compile(raw: &'static str) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(raw)))
            .expect("escaped keyword is a valid pattern");
        Keyword {
            raw,
            lower: raw.to_lowercase(),
            folded: fold_lower(raw),
            pattern,
        }
    }

    /// Plain substring, then substring on folded forms, then a word-boundary
    /// match on the original text.
    pub fn matches(&self, text: &MatchText<'_>) -> bool {
        text.lower.contains(&self.lower)
            || text.folded.contains(&self.folded)
            || self.pattern.is_match(text.original)
    }
}

/// The three views of an input text the matcher compares against
pub struct MatchText<'a> {
    original: &'a str,
    lower: String,
    folded: String,
}

impl<'a> MatchText<'a> {
    pub fn new(original: &'a str) -> Self {
        MatchText {
            original,
            lower: original.to_lowercase(),
            folded: fold_lower(original),
        }
    }
}

pub fn emotion_keywords() -> &'static [(Emotion, Vec<Keyword>)] {
    static TABLE: OnceLock<Vec<(Emotion, Vec<Keyword>)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        EMOTION_KEYWORDS
            .iter()
            .map(|(emotion, words)| {
                let compiled: Vec<Keyword> =
                    words.iter().map(|w| Keyword::compile(*w)).collect();
                (*emotion, compiled)
            })
            .collect()
    })
}

pub fn crisis_keywords() -> &'static [Keyword] {
    static TABLE: OnceLock<Vec<Keyword>> = OnceLock::new();
    TABLE.get_or_init(|| CRISIS_PHRASES.iter().map(|p| Keyword::compile(*p)).collect())
}
