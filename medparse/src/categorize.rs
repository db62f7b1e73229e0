//! Grouping reconstructed spans into a categorized report.

use medparse_core::{CategorizedReport, EntitySpan};

use crate::label::category_of;

/// Group spans by category, then deduplicate and sort each category.
///
/// Categories are normalized defensively through [`category_of`], so a span
/// that still carries a `B-` prefix groups with its bare-suffix siblings.
/// No entity text transformation happens here; trimming and noise rules
/// belong to the filter stage.
#[must_use]
pub fn categorize(spans: Vec<EntitySpan>) -> CategorizedReport {
    let mut report = CategorizedReport::new();
    for span in spans {
        let category = category_of(&span.category).to_string();
        report.push(category, span.text);
    }
    report.finalize();
    report
}
