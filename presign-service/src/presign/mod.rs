//! Presign pipeline: validation, path and expiry construction, signing, parsing and rewrite
mod error;
mod expiration;
mod object_path;
mod request;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::instrument;

pub use error::{PresignError, PresignResult, ValidationError};
pub use expiration::{ExpirationSpec, DEFAULT_EXPIRATION};
pub use object_path::{ObjectPath, SEPARATOR};
pub use request::PresignRequest;

use crate::{
    public_url::PublicUrlRewriter,
    signer::{ParseStrategy, SigningOutcome, SigningTarget, SigningTool},
    types::Config,
};

/// Wall-clock deadline for a single signing tool invocation
pub const SIGN_DEADLINE: Duration = Duration::from_secs(15);

/// Successful presign result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignResponse {
    /// Time-limited download URL
    pub url: String,
    /// Object path inside the bucket
    pub object: String,
    /// Bucket holding the object
    pub bucket: String,
    /// Expiration handed to the signing tool
    pub expires_in: String,
}

/// Turns presign requests into download URLs through a signing tool
pub struct Presigner {
    tool: Arc<dyn SigningTool>,
    alias: String,
    parser: ParseStrategy,
    rewriter: PublicUrlRewriter,
    deadline: Duration,
}

impl Presigner {
    /// Creates a presigner with the default [`SIGN_DEADLINE`]
    #[must_use]
    pub fn new(tool: Arc<dyn SigningTool>, config: &Config) -> Self {
        Self {
            tool,
            alias: config.minio_alias.clone(),
            parser: config.output_parser,
            rewriter: PublicUrlRewriter::new(config.public_base_url.as_deref()),
            deadline: SIGN_DEADLINE,
        }
    }

    /// Overrides the signing deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Runs the signing tool once, bounded by the deadline
    ///
    /// The tool future is dropped when the deadline elapses, which is what
    /// terminates a running subprocess.
    pub async fn sign(&self, target: &SigningTarget, expire: &ExpirationSpec) -> SigningOutcome {
        tokio::time::timeout(self.deadline, self.tool.share_download(target, expire))
            .await
            .unwrap_or(SigningOutcome::Timeout)
    }

    /// Validates the request and produces a presigned download URL
    ///
    /// # Errors
    ///
    /// - `PresignError::Validation` - missing bucket/key or negative duration
    /// - `PresignError::Tool` - the signing tool exited with a non-zero status
    /// - `PresignError::Timeout` - the signing tool missed the deadline
    /// - `PresignError::Parse` - the signing tool printed no usable URL
    #[instrument(skip_all, fields(bucket = %request.bucket.trim()))]
    pub async fn presign(&self, request: PresignRequest) -> PresignResult<PresignResponse> {
        let request = request.validate()?;
        let expires_in = ExpirationSpec::resolve(request.days, request.hours, request.minutes)?;
        let object = ObjectPath::new(&request.folder, &request.key);
        let target = SigningTarget::new(&self.alias, &request.bucket, &object);

        let output = match self.sign(&target, &expires_in).await {
            SigningOutcome::Success(output) => output,
            SigningOutcome::ToolError { message, exit_code } => {
                return Err(PresignError::Tool { message, exit_code });
            }
            SigningOutcome::Timeout => {
                tracing::warn!(%target, deadline = ?self.deadline, "Signing tool timed out");
                return Err(PresignError::Timeout);
            }
        };

        let url = self
            .parser
            .extract(&output)
            .map_err(|source| PresignError::Parse {
                source,
                output: output.trim().to_string(),
            })?;
        let url = self.rewriter.rewrite(&url);

        tracing::info!(object = %object, expires_in = %expires_in, "Presigned URL generated");
        tracing::debug!("url: {}", url);

        Ok(PresignResponse {
            url,
            object: object.to_string(),
            bucket: request.bucket,
            expires_in: expires_in.to_string(),
        })
    }
}
