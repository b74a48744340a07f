//! Keyword-based emotion classification
//!
//! Free text is scored against per-emotion keyword sets. The emotion with the
//! most matched keywords wins; ties go to the calmer, more positive emotion
//! following [`TIE_BREAK_ORDER`]. Confidence grows with how concentrated the
//! hits are on the winning emotion.
//!
//! # Examples
//!
//! ```
//! use moodlog::domain::classifier::classify;
//! use moodlog::domain::Emotion;
//!
//! let result = classify("Heute war ich ruhig und entspannt.");
//! assert_eq!(result.emotion, Emotion::Calm);
//! assert!(result.confidence >= 0.55);
//! ```

pub mod keywords;
pub mod result;

pub use result::{DetectedEmotionResult, MAX_CONFIDENCE, MIN_CONFIDENCE};

use crate::domain::emotion::Emotion;
use keywords::{crisis_keywords, emotion_keywords, MatchText};
use std::collections::HashMap;

/// Confidence for blank input
pub const EMPTY_INPUT_CONFIDENCE: f64 = 0.66;
/// Confidence when no keyword matched
pub const NO_MATCH_CONFIDENCE: f64 = 0.62;

const MAX_REASON_KEYWORDS: usize = 5;

/// Preference among emotions with equal hit counts, strongest first
pub const TIE_BREAK_ORDER: [Emotion; 7] = [
    Emotion::Calm,
    Emotion::Joy,
    Emotion::Compassion,
    Emotion::Surprise,
    Emotion::Sadness,
    Emotion::Fear,
    Emotion::Anger,
];

/// Anything that can turn text into an emotional signal
pub trait EmotionModel {
    fn classify(&self, text: &str) -> DetectedEmotionResult;
}

/// Deterministic keyword classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        KeywordClassifier
    }
}

impl EmotionModel for KeywordClassifier {
    fn classify(&self, text: &str) -> DetectedEmotionResult {
        if text.trim().is_empty() {
            return DetectedEmotionResult {
                emotion: Emotion::Neutral,
                confidence: EMPTY_INPUT_CONFIDENCE,
                reason: Some("no content".to_string()),
                is_crisis: false,
                matched_keywords: Vec::new(),
            };
        }

        let match_text = MatchText::new(text);

        let mut hits: HashMap<Emotion, usize> = HashMap::new();
        let mut matched_keywords = Vec::new();
        for (emotion, words) in emotion_keywords() {
            for keyword in words {
                if keyword.matches(&match_text) {
                    *hits.entry(*emotion).or_insert(0) += 1;
                    matched_keywords.push(keyword.raw.to_string());
                }
            }
        }

        let is_crisis = crisis_keywords().iter().any(|kw| kw.matches(&match_text));
        if is_crisis {
            log::warn!("crisis signal detected in classified text");
        }

        let emotion = best_emotion(&hits);
        let total: usize = hits.values().sum();
        let confidence = confidence_for(hits.get(&emotion).copied().unwrap_or(0), total);

        log::debug!(
            "classified as {} (confidence {:.3}, {} keyword hits)",
            emotion,
            confidence,
            total
        );

        DetectedEmotionResult {
            emotion,
            confidence,
            reason: Some(reason_for(&matched_keywords)),
            is_crisis,
            matched_keywords,
        }
    }
}

/// Classify with the default keyword model
pub fn classify(text: &str) -> DetectedEmotionResult {
    KeywordClassifier.classify(text)
}

/// Highest hit count wins; ties follow [`TIE_BREAK_ORDER`]. Neutral when
/// nothing matched.
fn best_emotion(hits: &HashMap<Emotion, usize>) -> Emotion {
    let mut best = Emotion::Neutral;
    let mut best_hits = 0;
    for emotion in TIE_BREAK_ORDER {
        let count = hits.get(&emotion).copied().unwrap_or(0);
        if count > best_hits {
            best = emotion;
            best_hits = count;
        }
    }
    best
}

fn confidence_for(best_hits: usize, total_hits: usize) -> f64 {
    if total_hits == 0 {
        return NO_MATCH_CONFIDENCE;
    }
    let ratio = best_hits as f64 / total_hits as f64;
    (MIN_CONFIDENCE + 0.43 * ratio).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

fn reason_for(matched: &[String]) -> String {
    if matched.is_empty() {
        return "soft estimate: no emotion keywords found".to_string();
    }

    let shown = matched
        .iter()
        .take(MAX_REASON_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let hidden = matched.len().saturating_sub(MAX_REASON_KEYWORDS);
    if hidden > 0 {
        format!("matched: {} (+{} more)", shown, hidden)
    } else {
        format!("matched: {}", shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_neutral() {
        for text in ["", "   ", "\n\t"] {
            let result = classify(text);
            assert_eq!(result.emotion, Emotion::Neutral);
            assert_eq!(result.confidence, 0.66);
            assert_eq!(result.reason.as_deref(), Some("no content"));
            assert!(!result.is_crisis);
            assert!(result.matched_keywords.is_empty());
        }
    }

    #[test]
    fn test_no_keywords_is_soft_neutral() {
        let result = classify("Ich habe heute Brot gekauft.");
        assert_eq!(result.emotion, Emotion::Neutral);
        assert_eq!(result.confidence, NO_MATCH_CONFIDENCE);
        assert!(result.reason.unwrap().starts_with("soft estimate"));
    }

    #[test]
    fn test_single_calm_keyword() {
        for text in ["ruhig", "calm", "Ich bin RUHIG", "so calm today"] {
            let result = classify(text);
            assert_eq!(result.emotion, Emotion::Calm, "{}", text);
            assert!(result.confidence >= MIN_CONFIDENCE);
            assert!((result.confidence - MAX_CONFIDENCE).abs() < 1e-9);
        }
    }

    #[test]
    fn test_keywords_without_umlauts_still_match() {
        let result = classify("ich bin so wuetend");
        assert_eq!(result.emotion, Emotion::Anger);
        assert_eq!(result.matched_keywords, vec!["wütend"]);
    }

    #[test]
    fn test_majority_emotion_wins() {
        let result = classify("traurig und einsam, aber auch ein bisschen glad");
        assert_eq!(result.emotion, Emotion::Sadness);
        let expected = 0.55 + 0.43 * (2.0 / 3.0);
        assert!((result.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_tie_prefers_calmer_emotion() {
        assert_eq!(classify("angry but calm").emotion, Emotion::Calm);
        assert_eq!(classify("happy and relaxed").emotion, Emotion::Calm);
        assert_eq!(classify("happy but sad").emotion, Emotion::Joy);
        assert_eq!(classify("grateful and surprised").emotion, Emotion::Compassion);
        assert_eq!(classify("surprised and sad").emotion, Emotion::Surprise);
        assert_eq!(classify("lonely and scared").emotion, Emotion::Sadness);
        assert_eq!(classify("scared and furious").emotion, Emotion::Fear);
    }

    #[test]
    fn test_tie_confidence_reflects_split() {
        let result = classify("angry but calm");
        assert!((result.confidence - (0.55 + 0.43 * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_matched_keywords_in_scan_order() {
        let result = classify("calm, then angry, then happy");
        assert_eq!(result.matched_keywords, vec!["happy", "angry", "calm"]);
    }

    #[test]
    fn test_reason_truncates_after_five() {
        let text = "traurig weinen einsam vermisse enttäuscht niedergeschlagen hoffnungslos";
        let result = classify(text);
        assert_eq!(result.emotion, Emotion::Sadness);
        assert_eq!(result.matched_keywords.len(), 7);
        assert_eq!(
            result.reason.as_deref(),
            Some("matched: traurig, weinen, einsam, vermisse, enttäuscht (+2 more)")
        );
    }

    #[test]
    fn test_confidence_bounded_for_repeated_keywords() {
        let text = "happy sad angry scared ".repeat(2000);
        let result = classify(&text);
        assert!(result.confidence >= MIN_CONFIDENCE);
        assert!(result.confidence <= MAX_CONFIDENCE);

        let text = "ruhig ".repeat(5000);
        let result = classify(&text);
        assert_eq!(result.emotion, Emotion::Calm);
        assert!(result.confidence <= MAX_CONFIDENCE);
    }

    #[test]
    fn test_crisis_flag_does_not_change_emotion() {
        let result = classify("Ich bin so ruhig, aber ich will sterben");
        assert!(result.is_crisis);
        assert_eq!(result.emotion, Emotion::Calm);

        let result = classify("I want to hurt myself");
        assert!(result.is_crisis);
        assert_eq!(result.emotion, Emotion::Neutral);
    }

    #[test]
    fn test_crisis_has_no_negation_handling() {
        assert!(classify("I do not want to harm myself").is_crisis);
    }

    #[test]
    fn test_no_crisis_on_ordinary_text() {
        assert!(!classify("A long walk, happy and tired").is_crisis);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "überrascht und dankbar, etwas nervös";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_model_trait_object() {
        let model: Box<dyn EmotionModel> = Box::new(KeywordClassifier::new());
        assert_eq!(model.classify("furious").emotion, Emotion::Anger);
    }
}
