use std::sync::Mutex;
use std::time::Duration;

use presign_service::{
    presign::ExpirationSpec,
    signer::{SigningOutcome, SigningTarget, SigningTool},
};

/// Deterministic stand-in for `mc` that emits canned output
pub struct FakeSigner {
    output: String,
    exit_code: i32,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeSigner {
    /// Tool that exits with `exit_code` after printing `output`
    pub fn new(output: impl Into<String>, exit_code: i32) -> Self {
        Self {
            output: output.into(),
            exit_code,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Successful `mc share download` output for `url`
    pub fn share(url: &str) -> Self {
        Self::new(
            format!(
                "URL: myminio/b/f.pdf\nExpire: 0 days 0 hours 10 minutes 0 seconds\nShare: {url}\n"
            ),
            0,
        )
    }

    /// Sleeps before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// `(target, expire)` of every invocation so far
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SigningTool for FakeSigner {
    async fn share_download(
        &self,
        target: &SigningTarget,
        expire: &ExpirationSpec,
    ) -> SigningOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((target.to_string(), expire.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.exit_code == 0 {
            return SigningOutcome::Success(self.output.clone());
        }

        let trimmed = self.output.trim();
        SigningOutcome::ToolError {
            message: if trimmed.is_empty() {
                format!("exit status: {}", self.exit_code)
            } else {
                trimmed.to_string()
            },
            exit_code: Some(self.exit_code),
        }
    }
}
