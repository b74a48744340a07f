//! Merged timeline use case

use crate::domain::{EntryMerger, EntryView};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};

/// Service producing the deduplicated, newest-first entry timeline
pub struct TimelineService {
    repository: FileSystemRepository,
}

impl TimelineService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TimelineService { repository }
    }

    pub fn execute(&self) -> Result<Vec<EntryView>> {
        let config = self.repository.load_config()?;
        let merger = EntryMerger::new(config.merge_tolerance()?);

        let canonical = self.repository.load_entries()?;
        let legacy = self.repository.load_legacy_entries()?;

        Ok(merger.merge(
            canonical.iter().map(EntryView::from_entry).collect(),
            legacy.iter().map(EntryView::from_entry).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::application::manage_config::ConfigService;
    use crate::domain::{EntryKind, JournalEntry, Locale};
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    const LEGACY: &str = r#"
[[entries]]
id = "l1"
created_at = "2025-01-17T08:00:45Z"
kind = "journal"
tags = ["mood:Ruhig"]
text = "Guter Start"

[[entries]]
id = "l2"
created_at = "2025-01-17T06:00:00Z"
kind = "story"
tags = []
text = "Ein Traum"
"#;

    fn setup() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Locale::De).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.append_entry(
            &JournalEntry::new(
                "c1",
                Utc.with_ymd_and_hms(2025, 1, 17, 8, 0, 0).unwrap(),
                EntryKind::Journal,
            )
            .with_text("Guter Start")
            .with_tags(["mood:Ruhig", "moodScore:3"]),
        )
        .unwrap();
        fs::write(temp.path().join(".moodlog/legacy.toml"), LEGACY).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_timeline_uses_default_tolerance() {
        let (_temp, repo) = setup();
        let ids: Vec<String> = TimelineService::new(repo)
            .execute()
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        // l1 is 45s away from c1, outside the default 30s window
        assert_eq!(ids, vec!["l1", "c1", "l2"]);
    }

    #[test]
    fn test_timeline_uses_configured_tolerance() {
        let (_temp, repo) = setup();
        ConfigService::new(repo.clone())
            .set("merge_tolerance_secs", "60")
            .unwrap();

        let ids: Vec<String> = TimelineService::new(repo)
            .execute()
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["c1", "l2"]);
    }
}
