use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, response::Response, Router};
use presign_service::{presign::Presigner, server, types::Config};
use tower::ServiceExt;

use super::FakeSigner;

/// Shared secret configured on the test server
pub const TEST_TOKEN: &str = "test-api-token";

/// Setup test environment
pub fn setup_test_env() {
    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router wired to a fake signing tool
pub struct TestSetup {
    pub router: Router,
    pub config: Config,
    pub signer: Arc<FakeSigner>,
}

impl TestSetup {
    pub fn new(signer: FakeSigner) -> Self {
        Self::with_config(
            Config {
                api_token: TEST_TOKEN.to_string(),
                ..Config::default()
            },
            signer,
        )
    }

    pub fn with_config(config: Config, signer: FakeSigner) -> Self {
        Self::with_deadline(config, signer, presign_service::presign::SIGN_DEADLINE)
    }

    pub fn with_deadline(config: Config, signer: FakeSigner, deadline: Duration) -> Self {
        setup_test_env();

        let signer = Arc::new(signer);
        let presigner = Presigner::new(signer.clone(), &config).with_deadline(deadline);
        let router = server::router(Arc::new(config.clone()), Arc::new(presigner));

        Self {
            router,
            config,
            signer,
        }
    }

    pub async fn send_post_request(
        &self,
        route: &str,
        payload: serde_json::Value,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("POST")
            .header("Content-Type", "application/json")
            .header("x-api-token", TEST_TOKEN)
            .body(Body::from(payload.to_string()))?;

        self.send(request).await
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;

        self.send(request).await
    }

    pub async fn send(
        &self,
        request: Request<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let body = self.response_text(response).await?;
        let json = serde_json::from_str(&body)?;
        Ok(json)
    }

    pub async fn response_text(
        &self,
        response: Response,
    ) -> Result<String, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        Ok(String::from_utf8(body.to_vec())?)
    }
}
