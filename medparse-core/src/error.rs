//! Error types for medparse-core.

use thiserror::Error;

/// Result type for medparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for medparse operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Classifier initialization failed.
    #[error("Model initialization failed: {0}")]
    ModelInit(String),

    /// Classifier inference failed.
    #[error("Inference failed: {0}")]
    Inference(String),
}

impl Error {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a model initialization error.
    #[must_use]
    pub fn model_init(msg: impl Into<String>) -> Self {
        Self::ModelInit(msg.into())
    }

    /// Create an inference error.
    #[must_use]
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::invalid_input("5 tokens vs 4 labels");
        assert_eq!(err.to_string(), "Invalid input: 5 tokens vs 4 labels");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "report.txt");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
