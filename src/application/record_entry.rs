//! Record entry use case

use crate::domain::mood::mood_tags_for;
use crate::domain::{
    DetectedEmotionResult, EmotionModel, EntryKind, JournalEntry, KeywordClassifier,
};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};
use chrono::{DateTime, Utc};

/// Classifies new text and stores it as a mood-tagged entry
pub struct RecordEntryService<M: EmotionModel = KeywordClassifier> {
    repository: FileSystemRepository,
    model: M,
}

impl RecordEntryService<KeywordClassifier> {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self::with_model(repository, KeywordClassifier::new())
    }
}

impl<M: EmotionModel> RecordEntryService<M> {
    pub fn with_model(repository: FileSystemRepository, model: M) -> Self {
        RecordEntryService { repository, model }
    }

    /// Classify `text`, then append it tagged with both mood tag forms.
    pub fn execute(
        &self,
        text: &str,
        kind: EntryKind,
        question: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(JournalEntry, DetectedEmotionResult)> {
        // Fails early outside a journal, before anything is classified
        self.repository.load_config()?;

        let detected = self.model.classify(text);

        let mut entry = JournalEntry::new(entry_id(now), now, kind)
            .with_text(text.trim())
            .with_tags(mood_tags_for(detected.emotion));
        if let Some(question) = question {
            entry = entry.with_question(question);
        }

        self.repository.append_entry(&entry)?;
        log::info!("recorded entry {} as {}", entry.id, detected.emotion);

        Ok((entry, detected))
    }
}

fn entry_id(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%S%3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::{Emotion, Locale};
    use chrono::TimeZone;
    use tempfile::TempDir;

    struct AlwaysAngry;

    impl EmotionModel for AlwaysAngry {
        fn classify(&self, _text: &str) -> DetectedEmotionResult {
            DetectedEmotionResult {
                emotion: Emotion::Anger,
                confidence: 0.9,
                reason: None,
                is_crisis: false,
                matched_keywords: Vec::new(),
            }
        }
    }

    fn repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Locale::De).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, repo)
    }

    #[test]
    fn test_records_tagged_entry() {
        let (_temp, repo) = repo();
        let now = Utc.with_ymd_and_hms(2025, 1, 17, 9, 15, 0).unwrap();
        let service = RecordEntryService::new(repo.clone());

        let (entry, detected) = service
            .execute("  Ich bin heute ruhig.  ", EntryKind::Journal, None, now)
            .unwrap();

        assert_eq!(detected.emotion, Emotion::Calm);
        assert_eq!(entry.text, "Ich bin heute ruhig.");
        assert_eq!(entry.tags, vec!["mood:Ruhig", "moodScore:3"]);
        assert_eq!(entry.id, "20250117T091500000Z");
        assert_eq!(repo.load_entries().unwrap(), vec![entry]);
    }

    #[test]
    fn test_records_question_for_reflections() {
        let (_temp, repo) = repo();
        let now = Utc.with_ymd_and_hms(2025, 1, 17, 21, 0, 0).unwrap();
        let service = RecordEntryService::new(repo.clone());

        let (entry, _) = service
            .execute(
                "Für meine Familie",
                EntryKind::Reflection,
                Some("Wofür bist du dankbar?"),
                now,
            )
            .unwrap();

        assert_eq!(entry.kind, EntryKind::Reflection);
        assert_eq!(entry.question.as_deref(), Some("Wofür bist du dankbar?"));
    }

    #[test]
    fn test_custom_model() {
        let (_temp, repo) = repo();
        let service = RecordEntryService::with_model(repo, AlwaysAngry);
        let (entry, _) = service
            .execute("sonnig", EntryKind::Story, None, Utc::now())
            .unwrap();
        assert_eq!(entry.mood_value(), Some(-2.0));
    }

    #[test]
    fn test_outside_journal_fails() {
        let temp = TempDir::new().unwrap();
        let service = RecordEntryService::new(FileSystemRepository::new(temp.path().to_path_buf()));
        assert!(service
            .execute("ruhig", EntryKind::Journal, None, Utc::now())
            .is_err());
        assert!(!temp.path().join(".moodlog").exists());
    }
}
