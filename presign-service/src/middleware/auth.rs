use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
    Extension,
};
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::types::{AppError, Config};

/// Header carrying the raw shared secret
pub const API_TOKEN_HEADER: &str = "x-api-token";

/// Path that is never gated
pub const HEALTH_PATH: &str = "/health";

/// Bearer scheme prefix, matched case-insensitively
const BEARER_PREFIX: &str = "bearer ";

/// Reasons a request is denied
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The server has no shared secret; every gated request is denied
    #[error("API_TOKEN is not set on server")]
    NotConfigured,

    /// Credential missing or wrong
    #[error("unauthorized")]
    Unauthorized,
}

/// Checks the presented credentials against the shared secret
///
/// Accepts either `x-api-token: <secret>` or `Authorization: Bearer <secret>`.
/// Header values are trimmed; the token itself is compared case-sensitively.
///
/// # Errors
///
/// - `AuthError::NotConfigured` - `secret` is empty
/// - `AuthError::Unauthorized` - neither header carries the secret
pub fn authorize(secret: &str, headers: &HeaderMap) -> Result<(), AuthError> {
    let secret = secret.trim();
    if secret.is_empty() {
        return Err(AuthError::NotConfigured);
    }

    let api_token = header_value(headers, API_TOKEN_HEADER);
    let bearer = header_value(headers, AUTHORIZATION.as_str()).and_then(strip_bearer);

    let allowed = [api_token, bearer]
        .into_iter()
        .flatten()
        .any(|presented| constant_time_str_eq(presented, secret));

    if allowed {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn strip_bearer(value: &str) -> Option<&str> {
    let prefix = value.get(..BEARER_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(BEARER_PREFIX)
        .then(|| value[BEARER_PREFIX.len()..].trim())
}

fn constant_time_str_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Shared-secret authentication middleware
///
/// `/health` passes through untouched. Every other path, including unknown
/// ones, must present the secret.
///
/// # Errors
///
/// - `AppError` - 500 when no secret is configured, 401 for a bad credential
pub async fn auth_middleware(
    Extension(config): Extension<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if request.uri().path() == HEALTH_PATH {
        return Ok(next.run(request).await);
    }

    authorize(&config.api_token, request.headers())?;

    Ok(next.run(request).await)
}
