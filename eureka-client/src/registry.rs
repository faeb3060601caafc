//! Eureka registry client

use crate::payload::{DiscoveredInstance, DiscoveryResponse, RegistrationRequest};
use crate::routes::{app_route, join_url};
use crate::selector::InstanceSelector;
use crate::token::{TokenClient, TokenProvider};
use crate::{EurekaError, Result, ServiceInstance};
use eureka_http::{HttpClient, StatusCode};
use tracing::{debug, info, warn};

/// Client for registering with and discovering from a Eureka registry.
///
/// Every operation fetches a fresh token from its [`TokenProvider`] and
/// then issues exactly one registry request. Nothing is cached between
/// calls.
///
/// # Examples
///
/// ```rust,ignore
/// use eureka_client::{RegistryClient, ServiceInstance, TokenClient};
/// use eureka_http::HttpClient;
///
/// let http = HttpClient::default_client()?;
/// let tokens = TokenClient::new(http.clone(), "https://uaa.example.com/oauth/token", "registrar", "s3cret");
/// let registry = RegistryClient::new(http, "https://registry.example.com", tokens);
///
/// registry.register(&ServiceInstance::new("api", 0, "10.0.0.5", 8080)).await?;
/// let address = registry.discover("api").await?;
/// ```
pub struct RegistryClient<P = TokenClient> {
    http: HttpClient,
    base_url: String,
    tokens: P,
    selector: InstanceSelector,
}

impl<P: TokenProvider> RegistryClient<P> {
    /// Create new registry client
    pub fn new(http: HttpClient, base_url: impl Into<String>, tokens: P) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            tokens,
            selector: InstanceSelector::random(),
        }
    }

    /// Replace the instance selector used by [`discover`](Self::discover).
    pub fn with_selector(mut self, selector: InstanceSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Configured registry base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token provider used to authorize requests
    pub fn token_provider(&self) -> &P {
        &self.tokens
    }

    /// Register one instance. Succeeds only on `204 No Content`.
    pub async fn register(&self, instance: &ServiceInstance) -> Result<()> {
        let token = self.tokens.access_token().await?;

        let payload = RegistrationRequest::from(instance);
        let body = serde_json::to_vec(&payload).map_err(EurekaError::Encode)?;
        let url = join_url(&self.base_url, &app_route(&instance.name))?;

        let response = self
            .http
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("bearer {}", token))
            .body(body)
            .send()
            .await?;

        if response.status() != StatusCode::NO_CONTENT {
            warn!(
                host_name = %payload.instance.host_name,
                status = response.status().as_u16(),
                "Registration rejected"
            );
            return Err(EurekaError::UnexpectedStatus {
                status: response.status().as_u16(),
                body: response.text_lossy(),
            });
        }

        info!(
            app = %instance.name,
            host_name = %payload.instance.host_name,
            "Registered instance with registry"
        );
        Ok(())
    }

    /// Register instances one after another, in order.
    ///
    /// Stops at the first failure and returns it. Instances registered
    /// before the failure stay registered; later ones are never attempted.
    pub async fn register_all(&self, instances: &[ServiceInstance]) -> Result<()> {
        for (position, instance) in instances.iter().enumerate() {
            if let Err(e) = self.register(instance).await {
                warn!(
                    app = %instance.name,
                    registered = position,
                    skipped = instances.len() - position - 1,
                    error = %e,
                    "Stopping batch registration"
                );
                return Err(e);
            }
        }
        Ok(())
    }

    /// Fetch every registered instance of `app_name`.
    pub async fn instances(&self, app_name: &str) -> Result<Vec<DiscoveredInstance>> {
        let token = self.tokens.access_token().await?;
        let url = join_url(&self.base_url, &app_route(app_name))?;

        let response = self
            .http
            .get(url.as_str())
            .header("Accept", "application/json")
            .header("Authorization", format!("bearer {}", token))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(EurekaError::UnexpectedStatus {
                status: response.status().as_u16(),
                body: response.text_lossy(),
            });
        }

        let discovered: DiscoveryResponse =
            serde_json::from_slice(response.bytes()).map_err(EurekaError::Decode)?;

        debug!(
            "Discovered {} instances of application {}",
            discovered.application.instances.len(),
            app_name
        );
        Ok(discovered.application.instances)
    }

    /// Discover `app_name` and return one instance as `ip:port`, chosen
    /// uniformly at random.
    pub async fn discover(&self, app_name: &str) -> Result<String> {
        let instances = self.instances(app_name).await?;

        let instance =
            self.selector
                .pick(&instances)
                .ok_or_else(|| EurekaError::EmptyInstanceList {
                    app: app_name.to_string(),
                })?;

        Ok(instance.address())
    }
}
