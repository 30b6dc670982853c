use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Extension, Router};
use hyper::server::conn::http1;
use hyper_util::{
    rt::{TokioIo, TokioTimer},
    server::graceful::GracefulShutdown,
    service::TowerToHyperService,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    middleware::{auth_middleware, log_request},
    presign::Presigner,
    routes,
    types::Config,
};

/// Upper bound for a whole request, above the signing deadline so a slow
/// `mc` still ends in a 504 from the presigner
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Time a client gets to send the complete request head
pub const HEADER_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// How long in-flight connections may run after shutdown is requested
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the application router with all layers applied
pub fn router(config: Arc<Config>, presigner: Arc<Presigner>) -> Router {
    routes::handler()
        .layer(middleware::from_fn(auth_middleware))
        .layer(middleware::from_fn(log_request))
        .layer(Extension(config))
        .layer(Extension(presigner))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

/// Starts the server with the given configuration and presigner
///
/// # Errors
///
/// Returns an error if the server fails to bind to the port
pub async fn start(config: Config, presigner: Arc<Presigner>) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    if config.api_token.is_empty() {
        tracing::warn!("API_TOKEN is not set, every request except /health will be rejected");
    }

    let router = router(Arc::new(config), presigner);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 presign-service listening on http://{addr}");

    serve(listener, router, HEADER_READ_TIMEOUT, shutdown_signal()).await;
    Ok(())
}

/// Accepts connections until `shutdown` resolves, then drains in-flight ones
///
/// Each connection must deliver its request head within
/// `header_read_timeout` or it is closed.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    header_read_timeout: Duration,
    shutdown: F,
) where
    F: Future<Output = ()> + Send,
{
    let mut builder = http1::Builder::new();
    builder
        .timer(TokioTimer::new())
        .header_read_timeout(header_read_timeout);

    let graceful = GracefulShutdown::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                let (stream, addr) = match accept_result {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        tracing::error!("Failed to accept connection: {e}");
                        continue;
                    }
                };

                let service = TowerToHyperService::new(router.clone());
                let connection = builder.serve_connection(TokioIo::new(stream), service);
                let connection = graceful.watch(connection);

                tokio::spawn(async move {
                    if let Err(err) = connection.await {
                        tracing::debug!("Connection from {addr} closed: {err}");
                    }
                });
            }
            () = &mut shutdown => break,
        }
    }

    drop(listener);

    tokio::select! {
        () = graceful.shutdown() => tracing::info!("All connections drained"),
        () = tokio::time::sleep(DRAIN_TIMEOUT) => {
            tracing::warn!("Shutdown with connections still active after {DRAIN_TIMEOUT:?}");
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
