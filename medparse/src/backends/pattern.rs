//! Pattern-based token labeling - BIO labels via regex patterns only.
//!
//! No model weights. Only labels categories that can be reliably identified
//! by their format:
//! - Age: "54-year-old", "54 years old"
//! - Date: ISO 8601, MM/DD/YYYY, "January 15, 2024"
//! - Sex: "male", "female"
//!
//! For the full biomedical category inventory (signs, symptoms, diagnoses,
//! medications, ...) a fine-tuned token-classification model is required;
//! this backend exists so the pipeline runs deterministically without one.

use once_cell::sync::Lazy;
use regex::Regex;

use medparse_core::{Result, Token};

use crate::classify::{Classifier, Labeling};
use crate::label::OUTSIDE_TAG;

/// Pattern-based classification backend.
///
/// Splits the report into BERT-style basic tokens (whitespace words with
/// punctuation isolated) and labels every token covered by a category
/// pattern, `B-` on the first covered token of a match and `I-` on the rest.
///
/// # Example
///
/// ```rust
/// use medparse::{Classifier, PatternClassifier};
///
/// let labeling = PatternClassifier::new()
///     .classify("A 54-year-old male, seen 2024-01-15.")
///     .unwrap();
/// assert!(labeling.labels.iter().any(|l| l == "B-Age"));
/// assert!(labeling.labels.iter().any(|l| l == "B-Sex"));
/// assert!(labeling.labels.iter().any(|l| l == "B-Date"));
/// ```
pub struct PatternClassifier;

impl PatternClassifier {
    /// Create a new pattern-based classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// Static patterns - compiled once, reused forever
static AGE_HYPHENATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d{1,3}-year-old\b").expect("valid regex"));

static AGE_SPELLED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d{1,3}\s+years?\s+old\b").expect("valid regex"));

static DATE_ISO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("valid regex"));

static DATE_US: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").expect("valid regex"));

static DATE_WRITTEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?\b").expect("valid regex")
});

static SEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:male|female)\b").expect("valid regex"));

/// Patterns in priority order; earlier patterns win overlaps.
fn patterns() -> [(&'static Lazy<Regex>, &'static str); 6] {
    [
        (&AGE_HYPHENATED, "Age"),
        (&AGE_SPELLED, "Age"),
        (&DATE_ISO, "Date"),
        (&DATE_US, "Date"),
        (&DATE_WRITTEN, "Date"),
        (&SEX, "Sex"),
    ]
}

/// A matched byte range with its category.
struct PatternMatch {
    start: usize,
    end: usize,
    category: &'static str,
}

fn find_matches(text: &str) -> Vec<PatternMatch> {
    let mut accepted: Vec<PatternMatch> = Vec::new();
    for (pattern, category) in patterns() {
        for m in pattern.find_iter(text) {
            let overlaps = accepted
                .iter()
                .any(|a| m.start() < a.end && a.start < m.end());
            if !overlaps {
                accepted.push(PatternMatch {
                    start: m.start(),
                    end: m.end(),
                    category,
                });
            }
        }
    }
    accepted.sort_by_key(|m| m.start);
    accepted
}

/// BERT-style basic tokenization: whitespace words, punctuation isolated.
///
/// Returns byte ranges into the original text.
fn basic_tokenize(text: &str) -> Vec<(usize, usize)> {
    let mut pieces = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = run_start.take() {
                pieces.push((start, idx));
            }
        } else if ch.is_ascii_punctuation() {
            if let Some(start) = run_start.take() {
                pieces.push((start, idx));
            }
            pieces.push((idx, idx + ch.len_utf8()));
        } else if run_start.is_none() {
            run_start = Some(idx);
        }
    }
    if let Some(start) = run_start {
        pieces.push((start, text.len()));
    }
    pieces
}

impl Classifier for PatternClassifier {
    fn classify(&self, text: &str) -> Result<Labeling> {
        let matches = find_matches(text);
        let pieces = basic_tokenize(text);

        let mut tokens = Vec::with_capacity(pieces.len() + 2);
        let mut labels = Vec::with_capacity(pieces.len() + 2);

        tokens.push(Token::marker("[CLS]"));
        labels.push(OUTSIDE_TAG.to_string());

        let mut previous_match: Option<usize> = None;
        for (start, end) in pieces {
            let covering = matches
                .iter()
                .position(|m| start >= m.start && end <= m.end);

            let label = match covering {
                Some(idx) if previous_match == Some(idx) => {
                    format!("I-{}", matches[idx].category)
                }
                Some(idx) => format!("B-{}", matches[idx].category),
                None => OUTSIDE_TAG.to_string(),
            };

            tokens.push(Token::word(&text[start..end]));
            labels.push(label);
            previous_match = covering;
        }

        tokens.push(Token::marker("[SEP]"));
        labels.push(OUTSIDE_TAG.to_string());

        log::debug!(
            "[pattern] {} tokens, {} pattern matches",
            tokens.len(),
            matches.len()
        );

        Ok(Labeling::new(tokens, labels))
    }

    fn name(&self) -> &'static str {
        "pattern"
    }

    fn description(&self) -> &'static str {
        "Regex token labeling for format-recognizable categories (Age, Date, Sex)"
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn classification_never_panics(text in ".{0,200}") {
            let _ = PatternClassifier::new().classify(&text);
        }

        #[test]
        fn output_is_always_aligned(text in ".{0,200}") {
            let labeling = PatternClassifier::new().classify(&text).unwrap();
            prop_assert!(labeling.is_aligned());
        }
    }
}
