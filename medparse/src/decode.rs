//! Span reconstruction: merging per-token BIO predictions into entities.
//!
//! A single pass over the aligned `(token, label)` sequence with one piece
//! of state, the currently open span:
//!
//! ```text
//! [CLS]  chest  ##pain  and    54     years  [SEP]
//!  -     B-Sym  I-Sym   O      B-Age  I-Age   -
//!        └─ "chestpain" ─┘     └─ "54 years" ─┘
//! ```
//!
//! Continuation decisions compare category suffixes only, never prefixes:
//! `B-X` directly after an open `X` span extends it. Models frequently emit
//! `B-X B-X` for one entity without an intervening `O`, and the merge
//! tolerates that at the cost of fusing two genuinely adjacent same-category
//! entities. Accepted trade-off.

use medparse_core::{EntitySpan, Error, Result, Token};

use crate::detok::Detokenizer;
use crate::label::{category_of, is_outside};

/// Accumulator for the entity currently being assembled.
#[derive(Debug)]
struct OpenSpan {
    fragments: Vec<String>,
    category: String,
}

impl OpenSpan {
    fn begin(text: &str, category: &str) -> Self {
        Self {
            fragments: vec![text.to_string()],
            category: category.to_string(),
        }
    }

    fn extend(&mut self, text: &str) {
        self.fragments.push(text.to_string());
    }

    fn emit(self, detok: &dyn Detokenizer) -> EntitySpan {
        EntitySpan::new(detok.detokenize(&self.fragments), self.category)
    }
}

/// Merge aligned token and label sequences into entity spans.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the sequences differ in length; this is
/// checked before any processing. The algorithm is total over well-formed
/// input: empty sequences and all-`O` sequences yield an empty vec.
pub fn reconstruct_spans(
    tokens: &[Token],
    labels: &[String],
    detok: &dyn Detokenizer,
) -> Result<Vec<EntitySpan>> {
    if tokens.len() != labels.len() {
        return Err(Error::invalid_input(format!(
            "token/label sequences misaligned: {} tokens vs {} labels",
            tokens.len(),
            labels.len()
        )));
    }

    let mut spans = Vec::new();
    let mut open: Option<OpenSpan> = None;

    for (token, label) in tokens.iter().zip(labels) {
        if token.special {
            continue;
        }

        if token.continuation {
            // Continuations carry no independently meaningful label; they
            // extend the open span or, orphaned, are dropped.
            if let Some(span) = open.as_mut() {
                span.extend(&token.text);
            }
            continue;
        }

        if is_outside(label) {
            if let Some(span) = open.take() {
                spans.push(span.emit(detok));
            }
            continue;
        }

        let category = category_of(label);
        match open {
            Some(ref mut span) if span.category == category => span.extend(&token.text),
            _ => {
                if let Some(span) = open.take() {
                    spans.push(span.emit(detok));
                }
                open = Some(OpenSpan::begin(&token.text, category));
            }
        }
    }

    if let Some(span) = open.take() {
        spans.push(span.emit(detok));
    }

    log::debug!(
        "[decode] {} spans reconstructed from {} tokens",
        spans.len(),
        tokens.len()
    );

    Ok(spans)
}
