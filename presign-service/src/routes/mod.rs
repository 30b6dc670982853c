/// `/health`, any method
pub mod health;
/// `POST /presign`
pub mod presign;

use axum::{
    routing::{any, post},
    Router,
};

use crate::middleware::auth::HEALTH_PATH;

/// Path of the presign endpoint
pub const PRESIGN_PATH: &str = "/presign";

/// Creates the router with all handler routes
pub fn handler() -> Router {
    Router::new().route(HEALTH_PATH, any(health::handler)).route(
        PRESIGN_PATH,
        post(presign::create_presigned_download_url).fallback(presign::method_not_allowed),
    )
}
