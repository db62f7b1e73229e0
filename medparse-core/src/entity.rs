//! Reconstructed entity spans and the categorized report they roll up into.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A reconstructed entity: display text plus its semantic category.
///
/// Emitted by the span reconstructor when a maximal run of same-category
/// tokens ends. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Human-readable text, already detokenized.
    pub text: String,
    /// Semantic category (e.g. `Age`, `Date`, `Sign_symptom`).
    pub category: String,
}

impl EntitySpan {
    /// Create a new entity span.
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Entities grouped by category.
///
/// Backed by a `BTreeMap` so category iteration order is deterministic.
/// After [`finalize`](CategorizedReport::finalize), every per-category list
/// is deduplicated and in ascending lexical order; that ordering is part of
/// the public contract, not an implementation detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedReport(BTreeMap<String, Vec<String>>);

impl CategorizedReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity to its category, preserving encounter order.
    pub fn push(&mut self, category: impl Into<String>, text: impl Into<String>) {
        self.0.entry(category.into()).or_default().push(text.into());
    }

    /// Sort and deduplicate every category's entity list.
    ///
    /// Idempotent; call once all spans have been consumed.
    pub fn finalize(&mut self) {
        for entities in self.0.values_mut() {
            entities.sort();
            entities.dedup();
        }
    }

    /// True if no category holds any entity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Number of categories present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of entities across all categories.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Iterate categories in ascending order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entities for one category, if present.
    #[must_use]
    pub fn entities(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Iterate `(category, entities)` pairs in ascending category order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_sorts_and_dedups() {
        let mut report = CategorizedReport::new();
        report.push("Age", "54 years");
        report.push("Age", "12 months");
        report.push("Age", "54 years");
        report.finalize();

        assert_eq!(
            report.entities("Age").unwrap(),
            &["12 months".to_string(), "54 years".to_string()]
        );
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut report = CategorizedReport::new();
        report.push("Date", "March 3");
        report.push("Date", "April 1");
        report.finalize();
        let once = report.clone();
        report.finalize();
        assert_eq!(report, once);
    }

    #[test]
    fn categories_iterate_in_order() {
        let mut report = CategorizedReport::new();
        report.push("Sign_symptom", "fever");
        report.push("Age", "54 years");
        let cats: Vec<_> = report.categories().collect();
        assert_eq!(cats, ["Age", "Sign_symptom"]);
    }

    #[test]
    fn empty_report() {
        let report = CategorizedReport::new();
        assert!(report.is_empty());
        assert_eq!(report.entity_count(), 0);
        assert!(report.entities("Age").is_none());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut report = CategorizedReport::new();
        report.push("Age", "54 years");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"Age":["54 years"]}"#);
    }
}
