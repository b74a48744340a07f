//! Output formatting utilities

use crate::application::MoodStats;
use crate::domain::{DetectedEmotionResult, EntryView, Locale};

pub const CRISIS_NOTICE: &str = "If you are thinking about harming yourself, please reach out now \
to someone you trust or a local crisis line (in Germany: TelefonSeelsorge 0800 111 0 111).";

/// Format a classification result for display
pub fn format_detection(result: &DetectedEmotionResult, locale: Locale) -> String {
    let emotion = result.emotion;
    let mut output = format!(
        "{} {} ({})  confidence {:.2}\n",
        emotion.glyph(),
        emotion.display_name(locale),
        emotion.label().display_name(locale),
        result.confidence
    );

    if let Some(reason) = &result.reason {
        output.push_str(&format!("reason: {}\n", reason));
    }
    if !result.matched_keywords.is_empty() {
        output.push_str(&format!(
            "keywords: {}\n",
            result.matched_keywords.join(", ")
        ));
    }
    if result.is_crisis {
        output.push_str(&format!("\n{}\n", CRISIS_NOTICE));
    }
    output
}

/// Format mood statistics for display
pub fn format_stats(stats: &MoodStats) -> String {
    let mut output = format!("Last {} days\n", stats.window_days);

    if stats.series.is_empty() {
        output.push_str("No moods recorded\n");
    } else {
        for day in &stats.series {
            output.push_str(&format!(
                "{}  {:+.2}\n",
                day.day.format("%d-%m-%Y"),
                day.value
            ));
        }
    }

    output.push_str(&format!("average: {:+.2}\n", stats.average));
    output.push_str(&format!("active days: {}\n", stats.active_days));
    output.push_str(&format!("streak: {}\n", stats.streak));
    output.push_str(&format!("longest streak: {}\n", stats.longest_streak));
    output
}

/// Format a merged timeline for display
pub fn format_timeline(views: &[EntryView]) -> String {
    if views.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for view in views {
        let mood = if view.mood.is_empty() { "-" } else { view.mood.as_str() };
        output.push_str(&format!(
            "{}  {:<10} {:<10} {}\n",
            view.timestamp.format("%d-%m-%Y %H:%M"),
            view.kind,
            mood,
            view.text
        ));
        if let Some(question) = &view.question {
            output.push_str(&format!("                  ? {}\n", question));
        }
    }
    output
}
