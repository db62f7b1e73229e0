//! A mock classifier for testing.

use medparse_core::{Error, Result};

use crate::classify::{Classifier, Labeling};

/// A mock classification backend returning a canned labeling.
///
/// By default `classify` validates that the canned token and label
/// sequences are aligned. Use [`without_validation`](Self::without_validation)
/// to disable this and exercise downstream error handling.
///
/// # Example
///
/// ```rust
/// use medparse::{Classifier, MockClassifier, Token};
///
/// let mock = MockClassifier::new("test-mock").with_labeling(
///     vec![Token::word("fever")],
///     vec!["B-Sign_symptom".into()],
/// );
/// let labeling = mock.classify("fever").unwrap();
/// assert_eq!(labeling.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockClassifier {
    name: &'static str,
    labeling: Labeling,
    /// If true, check sequence alignment before returning (default: true)
    validate: bool,
}

impl MockClassifier {
    /// Create a mock with an empty labeling.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            labeling: Labeling::default(),
            validate: true,
        }
    }

    /// Set the labeling to return on classification.
    #[must_use]
    pub fn with_labeling(
        mut self,
        tokens: Vec<medparse_core::Token>,
        labels: Vec<String>,
    ) -> Self {
        self.labeling = Labeling::new(tokens, labels);
        self
    }

    /// Disable alignment validation (for testing error paths).
    #[must_use]
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, _text: &str) -> Result<Labeling> {
        if self.validate && !self.labeling.is_aligned() {
            return Err(Error::invalid_input(format!(
                "MockClassifier labeling misaligned: {} tokens vs {} labels",
                self.labeling.tokens.len(),
                self.labeling.labels.len()
            )));
        }
        Ok(self.labeling.clone())
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Mock token classifier for testing"
    }
}
