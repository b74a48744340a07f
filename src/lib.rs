//! moodlog - Mood journal with keyword-based emotion analytics
//!
//! Classifies free-text entries into a small set of emotions, tags them with
//! a mood label and score, and derives daily series, averages and streaks
//! over a deduplicated view of canonical and legacy entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
