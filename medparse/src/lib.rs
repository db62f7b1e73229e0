//! # medparse
//!
//! Categorized entity extraction from free-text medical reports.
//!
//! A token-classification model predicts one BIO label per sub-word token;
//! this crate turns that raw sequence into something readable:
//!
//! 1. **Span reconstruction** ([`decode`]) - merge sub-word fragments and
//!    BIO-tagged runs into whole entity spans with display text.
//! 2. **Categorization** ([`categorize`]) - group spans by category,
//!    deduplicate, and order deterministically.
//! 3. **Noise filtering** ([`filter`]) - drop stray punctuation tokens and
//!    truncated numeric fragments.
//!
//! Tokenization and numeric inference stay behind the [`Classifier`] seam;
//! the engine itself is a pure, synchronous transformation.
//!
//! # Example
//!
//! ```rust
//! use medparse::{PatternClassifier, ReportParser};
//!
//! let parser = ReportParser::new(Box::new(PatternClassifier::new()));
//! let report = parser
//!     .extract("A 54-year-old male admitted 2024-01-15.")
//!     .unwrap();
//!
//! assert_eq!(report.entities("Sex").unwrap(), &["male".to_string()]);
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod categorize;
pub mod classify;
pub mod config;
pub mod decode;
pub mod detok;
pub mod filter;
pub mod label;
pub mod pipeline;

// Re-export core types
pub use medparse_core::{CategorizedReport, EntitySpan, Error, Result, Token};

pub use backends::{MockClassifier, PatternClassifier};
pub use categorize::categorize;
pub use classify::{Classifier, Labeling};
pub use config::ParserConfig;
pub use decode::reconstruct_spans;
pub use detok::{Detokenizer, WordPiece};
pub use filter::clean_report;
pub use label::category_of;
pub use pipeline::ReportParser;

/// Default token-classification model for biomedical reports.
pub const DEFAULT_MODEL: &str = "d4data/biomedical-ner-all";
