// Eureka Registrar - register service instances with a Eureka registry and
// discover them again, authorized by OAuth2 client credentials.
//
// The workspace crates are re-exported so applications can depend on this
// crate alone.

mod error;
mod registrar;

pub use error::{RegistrarError, Result};
pub use registrar::Registrar;

pub use eureka_client;
pub use eureka_config;
pub use eureka_http;
pub use eureka_log;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::error::{RegistrarError, Result};
    pub use crate::registrar::Registrar;
    pub use eureka_client::{
        EurekaError, InstanceSelector, RegistryClient, ServiceInstance, TokenClient,
        TokenProvider,
    };
    pub use eureka_config::RegistrarConfig;
    pub use eureka_http::{HttpClient, HttpClientConfig};
}
