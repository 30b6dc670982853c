mod config;
mod environment;
mod error;
mod extractors;

pub use config::Config;
pub use environment::Environment;
pub use error::{ApiErrorResponse, AppError};
pub use extractors::RawJson;
