//! Error types for the registrar.

use thiserror::Error;

/// Result type for registrar operations.
pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Errors surfaced by [`Registrar`](crate::Registrar) and the CLI.
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Configuration error: {0}")]
    Config(#[from] eureka_config::ConfigError),

    #[error(transparent)]
    Eureka(#[from] eureka_client::EurekaError),

    #[error("HTTP client setup failed: {0}")]
    Http(#[from] eureka_http::HttpClientError),
}
