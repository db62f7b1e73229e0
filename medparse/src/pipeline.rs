//! The report-parsing pipeline: classify, reconstruct, categorize, filter.

use medparse_core::{CategorizedReport, Result};

use crate::categorize::categorize;
use crate::classify::Classifier;
use crate::config::ParserConfig;
use crate::decode::reconstruct_spans;
use crate::filter::clean_report;

/// Extracts categorized entities from report text.
///
/// Owns a classification backend and a [`ParserConfig`]. Each call is an
/// independent, synchronous transformation; a parser shared across threads
/// may serve concurrent invocations.
///
/// # Example
///
/// ```rust
/// use medparse::{MockClassifier, ReportParser, Token};
///
/// let classifier = MockClassifier::new("mock").with_labeling(
///     vec![Token::word("54"), Token::word("years")],
///     vec!["B-Age".into(), "I-Age".into()],
/// );
/// let parser = ReportParser::new(Box::new(classifier));
///
/// let report = parser.extract("The patient is 54 years old.").unwrap();
/// assert_eq!(report.entities("Age").unwrap(), &["54 years".to_string()]);
/// ```
pub struct ReportParser {
    classifier: Box<dyn Classifier>,
    config: ParserConfig,
}

impl ReportParser {
    /// Create a parser with the default configuration.
    #[must_use]
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self::with_config(classifier, ParserConfig::default())
    }

    /// Create a parser with an explicit configuration.
    #[must_use]
    pub fn with_config(classifier: Box<dyn Classifier>, config: ParserConfig) -> Self {
        Self { classifier, config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Name of the classification backend.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Parse report text into a raw categorized report (no noise filtering).
    ///
    /// # Errors
    ///
    /// Propagates classifier failures and `InvalidInput` from misaligned
    /// token/label sequences.
    pub fn parse_report(&self, text: &str) -> Result<CategorizedReport> {
        let labeling = self.classifier.classify(text)?;
        log::debug!(
            "[{}] {} tokens labeled",
            self.classifier.name(),
            labeling.len()
        );
        let spans = reconstruct_spans(
            &labeling.tokens,
            &labeling.labels,
            self.classifier.detokenizer(),
        )?;
        Ok(categorize(spans))
    }

    /// Apply the noise filter to a categorized report.
    ///
    /// Exposed separately so the filter can be exercised on its own.
    #[must_use]
    pub fn clean_report(&self, report: CategorizedReport) -> CategorizedReport {
        clean_report(report, &self.config)
    }

    /// Parse and filter in one step.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`parse_report`](Self::parse_report).
    pub fn extract(&self, text: &str) -> Result<CategorizedReport> {
        Ok(self.clean_report(self.parse_report(text)?))
    }
}
