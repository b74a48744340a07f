//! Merging the canonical entry timeline with a legacy one
//!
//! Two entries are the same occurrence when their fingerprints are equal and
//! their timestamps lie within the merger's tolerance. Canonical entries are
//! always kept; a legacy entry is kept only if no canonical entry matches it.

use crate::domain::entry::{EntryKind, JournalEntry};
use crate::domain::mood::{label_to_score, resolve_label, SCORE_PREFIX};
use crate::domain::text::comparison_key;
use chrono::{DateTime, Duration, Utc};

/// Tolerance used when none is configured
pub const DEFAULT_TOLERANCE_SECS: i64 = 30;

const FIELD_SEPARATOR: &str = "\u{1f}";

/// The fields of an entry the timeline shows and deduplicates on
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub mood: String,
    pub kind: EntryKind,
    pub question: Option<String>,
}

impl EntryView {
    pub fn from_entry(entry: &JournalEntry) -> Self {
        EntryView {
            id: entry.id.clone(),
            timestamp: entry.created_at,
            text: entry.text.clone(),
            mood: resolve_label(&entry.tags).unwrap_or_default(),
            kind: entry.kind,
            question: entry.question.clone(),
        }
    }

    /// Equality key: normalized text, mood, kind and question
    pub fn fingerprint(&self) -> String {
        let question = self.question.as_deref().map(comparison_key).unwrap_or_default();
        [
            comparison_key(&self.text),
            mood_key(&self.mood),
            self.kind.as_str().to_string(),
            question,
        ]
        .join(FIELD_SEPARATOR)
    }
}

/// Known labels compare by their value on the mood axis, so `Gestresst` and
/// the `Traurig` derived from a bare `moodScore:1` fingerprint alike.
fn mood_key(mood: &str) -> String {
    match label_to_score(mood) {
        Some(value) => format!("{}{}", SCORE_PREFIX, value),
        None => comparison_key(mood),
    }
}

/// Deduplicating timeline merger
#[derive(Debug, Clone, Copy)]
pub struct EntryMerger {
    tolerance: Duration,
}

impl Default for EntryMerger {
    fn default() -> Self {
        EntryMerger::new(Duration::seconds(DEFAULT_TOLERANCE_SECS))
    }
}

impl EntryMerger {
    pub fn new(tolerance: Duration) -> Self {
        EntryMerger { tolerance }
    }

    pub fn tolerance(&self) -> Duration {
        self.tolerance
    }

    fn within_tolerance(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        let delta = a.signed_duration_since(b);
        delta <= self.tolerance && delta >= -self.tolerance
    }

    /// Whether two views describe the same moment
    pub fn is_same_occurrence(&self, a: &EntryView, b: &EntryView) -> bool {
        a.fingerprint() == b.fingerprint() && self.within_tolerance(a.timestamp, b.timestamp)
    }

    /// For each legacy view, whether it survives the merge: true when no
    /// canonical view is the same occurrence.
    pub fn legacy_survivors(&self, canonical: &[EntryView], legacy: &[EntryView]) -> Vec<bool> {
        let keys: Vec<(String, DateTime<Utc>)> = canonical
            .iter()
            .map(|view| (view.fingerprint(), view.timestamp))
            .collect();

        legacy
            .iter()
            .map(|view| {
                let fingerprint = view.fingerprint();
                let duplicate = keys.iter().any(|(key, at)| {
                    *key == fingerprint && self.within_tolerance(*at, view.timestamp)
                });
                if duplicate {
                    log::debug!("dropping legacy entry {} as duplicate", view.id);
                }
                !duplicate
            })
            .collect()
    }

    /// All canonical entries plus the legacy entries no canonical entry
    /// matches, newest first. Equal timestamps keep canonical-then-legacy
    /// input order.
    pub fn merge(&self, canonical: Vec<EntryView>, legacy: Vec<EntryView>) -> Vec<EntryView> {
        let survivors = self.legacy_survivors(&canonical, &legacy);

        let mut merged = canonical;
        merged.extend(
            legacy
                .into_iter()
                .zip(survivors)
                .filter_map(|(view, keep)| keep.then_some(view)),
        );

        merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        merged
    }
}
