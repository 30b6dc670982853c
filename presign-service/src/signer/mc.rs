use std::process::Stdio;

use tokio::process::Command;

use super::{SigningOutcome, SigningTarget, SigningTool};
use crate::presign::ExpirationSpec;

/// MinIO client (`mc`) invoked as a subprocess
///
/// The child is killed when the invocation future is dropped, so a request
/// deadline or a client disconnect never leaves it running.
#[derive(Debug, Clone)]
pub struct McCli {
    binary: String,
}

impl McCli {
    /// Creates an invoker for the given executable
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Arguments for `mc share download`
    #[must_use]
    pub fn share_args(target: &SigningTarget, expire: &ExpirationSpec) -> [String; 5] {
        [
            "share".to_string(),
            "download".to_string(),
            "--expire".to_string(),
            expire.to_string(),
            target.to_string(),
        ]
    }
}

#[async_trait::async_trait]
impl SigningTool for McCli {
    async fn share_download(
        &self,
        target: &SigningTarget,
        expire: &ExpirationSpec,
    ) -> SigningOutcome {
        tracing::debug!(binary = %self.binary, %target, %expire, "Running mc share download");

        let output = Command::new(&self.binary)
            .args(Self::share_args(target, expire))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                tracing::error!("Failed to run {}: {err}", self.binary);
                return SigningOutcome::ToolError {
                    message: format!("failed to run {}: {err}", self.binary),
                    exit_code: None,
                };
            }
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            return SigningOutcome::Success(combined);
        }

        tracing::warn!(status = %output.status, "mc exited with an error");

        let trimmed = combined.trim();
        let message = if trimmed.is_empty() {
            output.status.to_string()
        } else {
            trimmed.to_string()
        };

        SigningOutcome::ToolError {
            message,
            exit_code: output.status.code(),
        }
    }
}
