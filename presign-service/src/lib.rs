//! Presign service: turns bucket/key requests into time-limited download URLs

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Request middleware
pub mod middleware;

/// Presign pipeline
pub mod presign;

/// Public host rewrite
pub mod public_url;

/// Route handlers
pub mod routes;

/// Router assembly and listener
pub mod server;

/// Signing tool invocation and output parsing
pub mod signer;

/// Shared types: configuration, errors, extractors
pub mod types;
