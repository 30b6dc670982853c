//! Error types for presign requests

use thiserror::Error;

use crate::signer::ParseError;

/// Result type for presign operations
pub type PresignResult<T> = Result<T, PresignError>;

/// Request fields that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body could not be read from the connection
    #[error("unable to read request body")]
    UnreadableBody,

    /// Body is not a JSON object of the expected shape
    #[error("invalid JSON body")]
    InvalidBody,

    /// Bucket is empty after trimming
    #[error("bucket is required")]
    MissingBucket,

    /// Key is empty after trimming
    #[error("key is required")]
    MissingKey,

    /// One of days, hours or minutes is below zero
    #[error("days, hours and minutes must not be negative")]
    NegativeDuration,
}

/// Errors that can terminate a presign request
#[derive(Error, Debug)]
pub enum PresignError {
    /// Request was rejected before the signing tool ran
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Signing tool exited with a non-zero status
    #[error("{message}")]
    Tool {
        /// Trimmed tool output, or the process error when the output is empty
        message: String,
        /// Exit code, absent when the process was killed or never started
        exit_code: Option<i32>,
    },

    /// Signing tool did not finish before the deadline
    #[error("mc command timed out")]
    Timeout,

    /// Signing tool succeeded but printed no usable URL
    #[error("could not parse Share URL. mc output: {output}")]
    Parse {
        /// Why extraction failed
        #[source]
        source: ParseError,
        /// Trimmed tool output
        output: String,
    },
}
