//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Default junk-token denylist for the noise filter.
///
/// Tokenizers split hyphenated constructions like "54-year-old" into pieces,
/// and models happily label the pieces; these fragments carry no standalone
/// meaning.
pub const DEFAULT_JUNK_TOKENS: &[&str] = &["-", "year", "old", "grade"];

/// Categories whose short all-digit entities are tokenization artifacts.
pub const DEFAULT_SHORT_NUMERIC_CATEGORIES: &[&str] = &["Age", "Date"];

/// Minimum digit count for a bare numeric entity to be kept.
pub const DEFAULT_SHORT_NUMERIC_MIN_LEN: usize = 4;

/// Configuration for a [`ReportParser`](crate::ReportParser).
///
/// Carries the model identifier and the noise-filter rule data so both are
/// swappable without touching the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Identifier of the token-classification model the classifier wraps.
    pub model: String,
    /// Exact trimmed, lower-cased strings dropped by the junk-token rule.
    pub junk_tokens: Vec<String>,
    /// Categories subject to the short-numeric rule.
    pub short_numeric_categories: Vec<String>,
    /// Bare numerics shorter than this are dropped in the above categories.
    pub short_numeric_min_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            model: crate::DEFAULT_MODEL.to_string(),
            junk_tokens: DEFAULT_JUNK_TOKENS.iter().map(|t| t.to_string()).collect(),
            short_numeric_categories: DEFAULT_SHORT_NUMERIC_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            short_numeric_min_len: DEFAULT_SHORT_NUMERIC_MIN_LEN,
        }
    }
}

impl ParserConfig {
    /// Config for the given model with default filter rules.
    #[must_use]
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }
}
