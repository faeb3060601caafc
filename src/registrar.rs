//! Configuration-driven registration and discovery.

use crate::error::Result;
use eureka_client::{InstanceSelector, RegistryClient, ServiceInstance, TokenClient};
use eureka_config::RegistrarConfig;
use eureka_http::{HttpClient, HttpClientConfig};
use tracing::{info, warn};

/// Wires one [`HttpClient`] into a [`TokenClient`] and a [`RegistryClient`]
/// and holds the instances to register.
pub struct Registrar {
    registry: RegistryClient,
    instances: Vec<ServiceInstance>,
}

impl Registrar {
    /// Build the transport and both clients from a validated configuration.
    pub fn from_config(config: &RegistrarConfig) -> Result<Self> {
        let mut http_config = HttpClientConfig::builder()
            .timeout(config.http.timeout())
            .connect_timeout(config.http.connect_timeout());
        if let Some(user_agent) = &config.http.user_agent {
            http_config = http_config.user_agent(user_agent.clone());
        }
        let http = HttpClient::new(http_config.build())?;

        let tokens = TokenClient::new(
            http.clone(),
            config.token.url.clone(),
            config.token.client_name.clone(),
            config.token.client_secret.clone(),
        );

        Ok(Self {
            registry: RegistryClient::new(http, config.registry.base_url.clone(), tokens),
            instances: config.instances.clone(),
        })
    }

    /// Replace the selector used for discovery.
    pub fn with_selector(mut self, selector: InstanceSelector) -> Self {
        self.registry = self.registry.with_selector(selector);
        self
    }

    pub fn registry(&self) -> &RegistryClient {
        &self.registry
    }

    /// Instances that [`register_all`](Self::register_all) will register.
    pub fn instances(&self) -> &[ServiceInstance] {
        &self.instances
    }

    /// Register every configured instance in order, stopping at the first
    /// failure. Returns how many instances were registered.
    pub async fn register_all(&self) -> Result<usize> {
        if self.instances.is_empty() {
            warn!("No instances configured, nothing to register");
            return Ok(0);
        }

        self.registry.register_all(&self.instances).await?;
        info!(count = self.instances.len(), "Registered all instances");
        Ok(self.instances.len())
    }

    /// Resolve one `host:port` for `app_name`.
    pub async fn discover(&self, app_name: &str) -> Result<String> {
        Ok(self.registry.discover(app_name).await?)
    }
}
