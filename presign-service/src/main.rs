use std::sync::Arc;

use presign_service::{presign::Presigner, server, signer::McCli, types::Config};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let env_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Use JSON format for staging/production, regular format for development
    if config.environment.json_logs() {
        fmt().json().with_env_filter(env_filter()).init();
    } else {
        fmt().with_env_filter(env_filter()).init();
    }

    tracing::info!(
        environment = ?config.environment,
        minio_alias = %config.minio_alias,
        mc_binary = %config.mc_binary,
        output_parser = ?config.output_parser,
        "Starting presign-service"
    );

    let mc = Arc::new(McCli::new(config.mc_binary.clone()));
    let presigner = Arc::new(Presigner::new(mc, &config));

    server::start(config, presigner).await
}
