//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod mood_stats;
pub mod record_entry;
pub mod timeline;

pub use manage_config::ConfigService;
pub use mood_stats::{MoodStats, MoodStatsService};
pub use record_entry::RecordEntryService;
pub use timeline::TimelineService;
