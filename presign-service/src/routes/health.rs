/// Health check endpoint
///
/// Always answers `200 ok`, without authentication.
#[allow(clippy::unused_async)]
pub async fn handler() -> &'static str {
    "ok"
}
