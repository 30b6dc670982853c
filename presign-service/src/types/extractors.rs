//! Custom extractors for request decoding

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::{presign::ValidationError, types::error::AppError};

/// JSON extractor that decodes the raw body regardless of `Content-Type`
pub struct RawJson<T>(pub T);

impl<T, S> FromRequest<S> for RawJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::warn!("Failed to read request body: {err}");
            AppError::from(ValidationError::UnreadableBody)
        })?;

        let payload = serde_json::from_slice(&body).map_err(|err| {
            tracing::debug!("JSON decode error: {err}");
            AppError::from(ValidationError::InvalidBody)
        })?;

        Ok(Self(payload))
    }
}
