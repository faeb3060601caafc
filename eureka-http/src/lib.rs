//! # Eureka HTTP transport
//!
//! The single HTTP transport shared by the token client and the registry
//! client. One [`HttpClient`] is built from an [`HttpClientConfig`] and
//! injected into every component, so timeouts and TLS settings are
//! configured in exactly one place.
//!
//! Requests are sent once. There is no retry, no circuit breaker and no
//! response caching: a failed call surfaces to the caller immediately.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eureka_http::{HttpClient, HttpClientConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::builder()
//!         .timeout(Duration::from_secs(10))
//!         .build();
//!     let client = HttpClient::new(config)?;
//!
//!     let response = client
//!         .get("https://registry.example.com/eureka/apps/api")
//!         .header("Accept", "application/json")
//!         .send()
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestBuilder;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use eureka_http::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::HttpClient;
    pub use crate::config::{HttpClientConfig, HttpClientConfigBuilder};
    pub use crate::error::{HttpClientError, Result};
    pub use crate::request::RequestBuilder;
    pub use crate::response::Response;
    pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
}
