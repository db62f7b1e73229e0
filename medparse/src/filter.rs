//! Noise filtering: dropping low-value artifacts from a categorized report.
//!
//! Two rules, evaluated independently per entity on its trimmed text:
//!
//! 1. junk tokens — exact matches against a configured denylist of
//!    tokenization debris (`-`, `year`, `old`, `grade`);
//! 2. short numerics — bare 1-3 digit strings in `Age`/`Date`, which are
//!    almost always mis-split fragments rather than standalone entities.
//!
//! Categories left empty are omitted from the result, and the pass is
//! idempotent.

use medparse_core::CategorizedReport;

use crate::config::ParserConfig;

fn is_junk(text: &str, config: &ParserConfig) -> bool {
    let trimmed = text.trim().to_lowercase();
    config.junk_tokens.iter().any(|junk| *junk == trimmed)
}

fn is_short_numeric(category: &str, text: &str, config: &ParserConfig) -> bool {
    if !config
        .short_numeric_categories
        .iter()
        .any(|c| c == category)
    {
        return false;
    }
    let trimmed = text.trim();
    !trimmed.is_empty()
        && trimmed.chars().all(|c| c.is_ascii_digit())
        && trimmed.len() < config.short_numeric_min_len
}

/// Remove junk and short-numeric entities from a finalized report.
///
/// Consumes the report; the cleaned report upholds the same dedup + order
/// invariant. Applying the filter twice yields the same result as once.
#[must_use]
pub fn clean_report(report: CategorizedReport, config: &ParserConfig) -> CategorizedReport {
    let mut cleaned = CategorizedReport::new();
    let mut dropped = 0usize;

    for (category, entities) in report.iter() {
        for text in entities {
            if is_junk(text, config) || is_short_numeric(category, text, config) {
                dropped += 1;
                continue;
            }
            cleaned.push(category.clone(), text.clone());
        }
    }

    if dropped > 0 {
        log::debug!("[filter] dropped {} noise entities", dropped);
    }

    cleaned.finalize();
    cleaned
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_report() -> impl Strategy<Value = CategorizedReport> {
        proptest::collection::vec(("[A-Z][a-z_]{0,8}", "[ -~]{0,12}"), 0..32).prop_map(|pairs| {
            let mut report = CategorizedReport::new();
            for (category, text) in pairs {
                report.push(category, text);
            }
            report.finalize();
            report
        })
    }

    proptest! {
        #[test]
        fn clean_is_idempotent(report in arb_report()) {
            let config = ParserConfig::default();
            let once = clean_report(report, &config);
            let twice = clean_report(once.clone(), &config);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn clean_never_adds_entities(report in arb_report()) {
            let config = ParserConfig::default();
            let before = report.entity_count();
            let cleaned = clean_report(report, &config);
            prop_assert!(cleaned.entity_count() <= before);
        }
    }
}
