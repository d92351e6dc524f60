//! API error types

use thiserror::Error;
use verseq_core::RecognitionFailure;

/// Errors the external recognizer can raise while parsing a query
///
/// These never escape [`crate::QueryParser::parse`]: the adapter recovers by
/// resetting the recognizer and degrading the call to "no entities found",
/// attaching the failure to the result for observability.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The recognizer's grammar failed on this input
    #[error("recognizer parse failure: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
    },

    /// The recognizer's internal state is corrupt or otherwise unusable
    #[error("recognizer internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl From<&RecognitionError> for RecognitionFailure {
    fn from(err: &RecognitionError) -> Self {
        RecognitionFailure::new(err.to_string())
    }
}

/// Result type for recognizer operations
pub type Result<T> = std::result::Result<T, RecognitionError>;
