//! Detokenization: turning accumulated sub-word fragments back into text.
//!
//! The joining policy belongs to the tokenizer that produced the fragments;
//! the reconstruction engine treats it as a black box with the contract
//! "fragments in, one readable string out".

/// Joins the text fragments of one entity into a display string.
pub trait Detokenizer: Send + Sync {
    /// Join fragments into a single human-readable string.
    fn detokenize(&self, fragments: &[String]) -> String;
}

/// WordPiece sub-word marker.
pub const CONTINUATION_PREFIX: &str = "##";

/// WordPiece joining: space between word-start fragments, `##` continuations
/// fused onto the preceding fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordPiece;

impl Detokenizer for WordPiece {
    fn detokenize(&self, fragments: &[String]) -> String {
        let mut out = String::new();
        for fragment in fragments {
            if let Some(rest) = fragment.strip_prefix(CONTINUATION_PREFIX) {
                out.push_str(rest);
            } else {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(fragment);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(fragments: &[&str]) -> String {
        let owned: Vec<String> = fragments.iter().map(|f| f.to_string()).collect();
        WordPiece.detokenize(&owned)
    }

    #[test]
    fn continuations_fuse() {
        assert_eq!(join(&["chest", "##pain"]), "chestpain");
        assert_eq!(join(&["hyper", "##ten", "##sion"]), "hypertension");
    }

    #[test]
    fn word_starts_get_spaces() {
        assert_eq!(join(&["54", "years"]), "54 years");
    }

    #[test]
    fn mixed_sequence() {
        assert_eq!(join(&["acute", "myo", "##card", "##itis"]), "acute myocarditis");
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(join(&[]), "");
        assert_eq!(join(&["fever"]), "fever");
    }

    #[test]
    fn leading_continuation_has_no_space() {
        // An orphan fragment at the front still joins cleanly.
        assert_eq!(join(&["##pain", "relief"]), "pain relief");
    }
}
