//! Eureka registration and discovery client
//!
//! Registers service instances with a Eureka-compatible registry and looks
//! up instances of named applications. Every registry call is authorized
//! with a bearer token obtained through an OAuth2 client-credentials grant.
//!
//! ## Features
//!
//! - **Registration** - `POST /eureka/apps/{app}` with the registry's
//!   dual-notation instance document
//! - **Batch registration** - sequential, stops at the first failure
//! - **Discovery** - `GET /eureka/apps/{app}` with uniform random selection
//! - **Token client** - client-credentials grant with HTTP Basic auth
//!
//! Tokens and discovery results are never cached; each operation performs
//! its own token fetch and registry round trip.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eureka_client::*;
//! use eureka_http::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = HttpClient::default_client()?;
//!     let tokens = TokenClient::new(
//!         http.clone(),
//!         "https://uaa.example.com/oauth/token",
//!         "registrar",
//!         "s3cret",
//!     );
//!     let registry = RegistryClient::new(http, "https://registry.example.com", tokens);
//!
//!     registry
//!         .register_all(&[
//!             ServiceInstance::new("api", 0, "10.0.0.5", 8080),
//!             ServiceInstance::new("api", 1, "10.0.0.6", 8080),
//!         ])
//!         .await?;
//!
//!     println!("api is at {}", registry.discover("api").await?);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod instance;
pub mod payload;
pub mod registry;
pub mod routes;
pub mod selector;
pub mod token;

pub use error::{EurekaError, Result};
pub use instance::ServiceInstance;
pub use payload::{DiscoveredInstance, DiscoveryResponse, RegistrationRequest};
pub use registry::RegistryClient;
pub use routes::{app_route, join_url};
pub use selector::InstanceSelector;
pub use token::{Token, TokenClient, TokenProvider};
