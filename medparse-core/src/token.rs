//! Sub-word tokens as produced by an external tokenizer.
//!
//! A token classification model labels *sub-word* tokens, not words: the
//! tokenizer may split "chestpain" into `chest` + `##pain` and wraps every
//! sequence in structural markers (`[CLS]`, `[SEP]`, padding). The span
//! reconstructor needs to know which tokens continue a word and which are
//! markers, so both flags travel with the text.

use serde::{Deserialize, Serialize};

/// A single sub-word token aligned with one predicted label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Raw token text, including any sub-word prefix (e.g. `##pain`).
    pub text: String,
    /// True if this token continues the previous word.
    pub continuation: bool,
    /// True if this is a structural marker with no entity content.
    pub special: bool,
}

impl Token {
    /// A word-start token.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            continuation: false,
            special: false,
        }
    }

    /// A sub-word continuation fragment.
    #[must_use]
    pub fn fragment(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            continuation: true,
            special: false,
        }
    }

    /// A structural marker token (`[CLS]`, `[SEP]`, `[PAD]`).
    #[must_use]
    pub fn marker(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            continuation: false,
            special: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_flags() {
        assert!(!Token::word("chest").continuation);
        assert!(Token::fragment("##pain").continuation);
        assert!(Token::marker("[CLS]").special);
        assert!(!Token::word("chest").special);
    }

    #[test]
    fn serde_round_trip() {
        let token = Token::fragment("##pain");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(serde_json::from_str::<Token>(&json).unwrap(), token);
    }
}
