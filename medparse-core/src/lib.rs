//! # medparse-core
//!
//! Core types for the medparse entity extraction pipeline: sub-word tokens,
//! reconstructed entity spans, categorized reports, and the shared error
//! type. The reconstruction engine itself lives in the `medparse` crate.

#![warn(missing_docs)]

pub mod entity;
pub mod error;
pub mod token;

pub use entity::{CategorizedReport, EntitySpan};
pub use error::{Error, Result};
pub use token::Token;
