//! Process-wide configuration, loaded once at startup

use std::env;

use anyhow::Context;

use super::Environment;
use crate::signer::ParseStrategy;

/// Default listening port
const DEFAULT_PORT: u16 = 8080;
/// Default alias handed to the signing tool
const DEFAULT_MINIO_ALIAS: &str = "myminio";
/// Default signing tool executable, resolved on `PATH`
const DEFAULT_MC_BINARY: &str = "mc";

/// Immutable service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deployment stage
    pub environment: Environment,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Alias the signing tool resolves to a storage endpoint
    pub minio_alias: String,
    /// Shared secret for gated routes. Empty means not configured.
    pub api_token: String,
    /// Public base URL used to rewrite generated URLs
    pub public_base_url: Option<String>,
    /// Signing tool executable
    pub mc_binary: String,
    /// How the signing tool output is parsed
    pub output_parser: ParseStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            port: DEFAULT_PORT,
            minio_alias: DEFAULT_MINIO_ALIAS.to_string(),
            api_token: String::new(),
            public_base_url: None,
            mc_binary: DEFAULT_MC_BINARY.to_string(),
            output_parser: ParseStrategy::default(),
        }
    }
}

impl Config {
    /// Reads the configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `MC_OUTPUT_PARSER` hold invalid values
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match var("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let output_parser = match var("MC_OUTPUT_PARSER") {
            Some(value) => value.parse()?,
            None => ParseStrategy::default(),
        };

        Ok(Self {
            environment: Environment::from_env(),
            port,
            minio_alias: var("MINIO_ALIAS").unwrap_or_else(|| DEFAULT_MINIO_ALIAS.to_string()),
            api_token: var("API_TOKEN").unwrap_or_default(),
            public_base_url: var("PUBLIC_MINIO_BASE_URL"),
            mc_binary: var("MC_BINARY").unwrap_or_else(|| DEFAULT_MC_BINARY.to_string()),
            output_parser,
        })
    }
}

/// Reads a trimmed variable, treating empty values as unset
fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
