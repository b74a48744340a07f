//! Domain layer - Mood analytics core

pub mod aggregate;
pub mod classifier;
pub mod emotion;
pub mod entry;
pub mod merge;
pub mod mood;
pub mod text;

pub use aggregate::{DayMood, JournalAggregator};
pub use classifier::{classify, DetectedEmotionResult, EmotionModel, KeywordClassifier};
pub use emotion::{Emotion, Locale, MoodLabel};
pub use entry::{EntryKind, JournalEntry};
pub use merge::{EntryMerger, EntryView};
pub use mood::MoodTag;
