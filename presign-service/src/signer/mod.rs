//! Signing tool seam and its `mc` implementation
mod mc;
mod output;

use std::fmt;

pub use mc::McCli;
pub use output::{
    extract_share_line, extract_url_pattern, ParseError, ParseStrategy, UnknownParseStrategy,
    SHARE_MARKER,
};

use crate::presign::{ExpirationSpec, ObjectPath};

/// `<alias>/<bucket>/<object>` handed to the signing tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningTarget(String);

impl SigningTarget {
    /// Builds the target from its parts
    #[must_use]
    pub fn new(alias: &str, bucket: &str, object: &ObjectPath) -> Self {
        Self(format!("{alias}/{bucket}/{object}"))
    }

    /// The target as passed on the command line
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SigningTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of one signing tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningOutcome {
    /// Zero exit status, with the full captured output
    Success(String),
    /// Non-zero exit status, or the process could not be started
    ToolError {
        /// Trimmed captured output, or the process error when the output is empty
        message: String,
        /// Exit code, absent when the process was killed or never started
        exit_code: Option<i32>,
    },
    /// The deadline elapsed before the tool finished
    Timeout,
}

/// Something that can produce a presigned download URL for a target
///
/// Every call is a side-effecting external execution and must not be retried.
#[async_trait::async_trait]
pub trait SigningTool: Send + Sync {
    /// Runs `share download --expire <expire> <target>`
    async fn share_download(&self, target: &SigningTarget, expire: &ExpirationSpec)
        -> SigningOutcome;
}
