/// Shared-secret authentication
pub mod auth;
/// Per-request access logging
pub mod logging;

pub use auth::{auth_middleware, AuthError};
pub use logging::log_request;
