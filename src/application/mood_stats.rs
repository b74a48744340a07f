//! Mood statistics use case

use crate::domain::{DayMood, EntryMerger, EntryView, JournalAggregator, JournalEntry};
use crate::error::Result;
use crate::infrastructure::{EntryRepository, FileSystemRepository};
use chrono::{DateTime, TimeZone};

/// Everything the stats view shows
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStats {
    pub window_days: u32,
    pub series: Vec<DayMood>,
    pub average: f64,
    pub active_days: usize,
    pub streak: u32,
    pub longest_streak: u32,
}

/// Service computing mood statistics over canonical and legacy entries
pub struct MoodStatsService {
    repository: FileSystemRepository,
}

impl MoodStatsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        MoodStatsService { repository }
    }

    /// Compute statistics relative to `now`. `days` overrides the configured
    /// window.
    pub fn execute<Tz: TimeZone>(
        &self,
        now: DateTime<Tz>,
        days: Option<u32>,
    ) -> Result<MoodStats> {
        let config = self.repository.load_config()?;
        let window_days = days.unwrap_or(config.window_days);
        let merger = EntryMerger::new(config.merge_tolerance()?);

        let entries = merged_entries(
            &merger,
            self.repository.load_entries()?,
            self.repository.load_legacy_entries()?,
        );

        let aggregator = JournalAggregator::new(now);
        Ok(MoodStats {
            window_days,
            series: aggregator.daily_series(&entries, window_days),
            average: aggregator.average_mood(&entries, window_days),
            active_days: aggregator.active_day_count(&entries),
            streak: aggregator.streak(&entries),
            longest_streak: aggregator.longest_streak(&entries),
        })
    }
}

/// Canonical entries plus the legacy entries that survive deduplication
fn merged_entries(
    merger: &EntryMerger,
    canonical: Vec<JournalEntry>,
    legacy: Vec<JournalEntry>,
) -> Vec<JournalEntry> {
    let canonical_views: Vec<EntryView> = canonical.iter().map(EntryView::from_entry).collect();
    let legacy_views: Vec<EntryView> = legacy.iter().map(EntryView::from_entry).collect();
    let survivors = merger.legacy_survivors(&canonical_views, &legacy_views);

    let mut entries = canonical;
    entries.extend(
        legacy
            .into_iter()
            .zip(survivors)
            .filter_map(|(entry, keep)| keep.then_some(entry)),
    );
    entries
}
