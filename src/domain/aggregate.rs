//! Mood statistics over a list of journal entries
//!
//! All statistics are computed relative to a reference "now". Its time zone
//! decides which local calendar day an entry belongs to.

use crate::domain::entry::JournalEntry;
use crate::domain::mood::{MOOD_MAX, MOOD_MIN};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Average mood of one local calendar day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayMood {
    pub day: NaiveDate,
    /// Within -2.0..=2.0
    pub value: f64,
}

/// Computes mood series and activity statistics anchored at `now`
#[derive(Debug, Clone)]
pub struct JournalAggregator<Tz: TimeZone> {
    now: DateTime<Tz>,
}

impl<Tz: TimeZone> JournalAggregator<Tz> {
    pub fn new(now: DateTime<Tz>) -> Self {
        JournalAggregator { now }
    }

    /// The local calendar day of `now`
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn local_day(&self, at: &DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.now.timezone()).date_naive()
    }

    /// Earliest instant inside a `days` window. Windows reaching past the
    /// representable range cover all entries.
    fn cutoff(&self, days: u32) -> DateTime<Utc> {
        Duration::try_days(i64::from(days))
            .and_then(|span| self.now.with_timezone(&Utc).checked_sub_signed(span))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Entries created no earlier than `days` days before now
    fn within_window<'a>(
        &self,
        entries: &'a [JournalEntry],
        days: u32,
    ) -> impl Iterator<Item = &'a JournalEntry> {
        let cutoff = self.cutoff(days);
        entries.iter().filter(move |entry| entry.created_at >= cutoff)
    }

    fn active_days(&self, entries: &[JournalEntry]) -> BTreeSet<NaiveDate> {
        entries
            .iter()
            .map(|entry| self.local_day(&entry.created_at))
            .collect()
    }

    /// Per-day mood averages over the last `days` days, oldest first.
    ///
    /// Days without a resolvable mood are left out rather than zero-filled.
    pub fn daily_series(&self, entries: &[JournalEntry], days: u32) -> Vec<DayMood> {
        let mut buckets: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
        for entry in self.within_window(entries, days) {
            if let Some(value) = entry.mood_value() {
                buckets
                    .entry(self.local_day(&entry.created_at))
                    .or_default()
                    .push(value);
            }
        }

        buckets
            .into_iter()
            .map(|(day, values)| DayMood {
                day,
                value: mean(&values).clamp(MOOD_MIN, MOOD_MAX),
            })
            .collect()
    }

    /// Mean of every resolvable mood in the last `window` days, 0.0 if none
    pub fn average_mood(&self, entries: &[JournalEntry], window: u32) -> f64 {
        let values: Vec<f64> = self
            .within_window(entries, window)
            .filter_map(JournalEntry::mood_value)
            .collect();
        if values.is_empty() {
            return 0.0;
        }
        mean(&values)
    }

    /// Number of distinct local days with at least one entry, all time
    pub fn active_day_count(&self, entries: &[JournalEntry]) -> usize {
        self.active_days(entries).len()
    }

    /// Consecutive active days ending today. 0 when today has no entry.
    pub fn streak(&self, entries: &[JournalEntry]) -> u32 {
        let days = self.active_days(entries);
        let mut day = self.today();
        let mut count = 0;
        while days.contains(&day) {
            count += 1;
            match day.pred_opt() {
                Some(previous) => day = previous,
                None => break,
            }
        }
        count
    }

    /// Longest run of consecutive active days anywhere in the history
    pub fn longest_streak(&self, entries: &[JournalEntry]) -> u32 {
        let mut longest = 0;
        let mut current = 0;
        let mut previous: Option<NaiveDate> = None;

        for day in self.active_days(entries) {
            current = match previous {
                Some(prev) if day - prev == Duration::days(1) => current + 1,
                _ => 1,
            };
            longest = longest.max(current);
            previous = Some(day);
        }
        longest
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
