use std::sync::Arc;

use axum::{http::StatusCode, Extension, Json};
use tracing::instrument;

use crate::{
    presign::{PresignRequest, PresignResponse, Presigner},
    types::{AppError, RawJson},
};

/// Creates a time-limited download URL for an object
///
/// Runs `mc share download` for `<alias>/<bucket>/<folder>/<key>` and returns
/// the URL it prints, rewritten onto the public base when one is configured.
///
/// # Errors
///
/// - 400 - invalid body, missing bucket/key, negative duration, or mc failure
/// - 500 - mc output did not contain a URL
/// - 504 - mc did not finish in time
#[instrument(skip_all)]
pub async fn create_presigned_download_url(
    Extension(presigner): Extension<Arc<Presigner>>,
    RawJson(request): RawJson<PresignRequest>,
) -> Result<Json<PresignResponse>, AppError> {
    let response = presigner.presign(request).await?;

    Ok(Json(response))
}

/// Any method other than POST on `/presign`
#[allow(clippy::unused_async)]
pub async fn method_not_allowed() -> AppError {
    AppError::new(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}
