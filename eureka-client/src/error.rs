//! Registry and token client errors

use eureka_http::HttpClientError;
use thiserror::Error;

/// Result type for registry and token operations.
pub type Result<T> = std::result::Result<T, EurekaError>;

/// Errors returned by [`TokenClient`](crate::TokenClient) and
/// [`RegistryClient`](crate::RegistryClient).
#[derive(Debug, Error)]
pub enum EurekaError {
    /// The request could not be sent or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpClientError),

    /// The token endpoint answered with something other than 200.
    #[error("Token endpoint returned {status}: {body}")]
    AuthServer { status: u16, body: String },

    /// The registry answered with a status the operation does not accept.
    #[error("Unexpected response code: {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A response body did not match the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A configured endpoint URL could not be used as a base URL.
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Discovery succeeded but the application has no registered instances.
    #[error("No instances registered for application {app}")]
    EmptyInstanceList { app: String },
}

impl EurekaError {
    /// HTTP status carried by this error, if it came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::AuthServer { status, .. } | Self::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            Self::Transport(e) => e.status_code(),
            _ => None,
        }
    }

    /// Raw response body carried by this error, if any.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::AuthServer { body, .. } | Self::UnexpectedStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
