//! Shared transport.

use http::Method;
use reqwest::redirect::Policy;
use std::sync::Arc;
use tracing::debug;

use crate::{HttpClientConfig, HttpClientError, RequestBuilder, Response, Result};

/// HTTP client shared by every component that talks to the registry or the
/// token issuer.
///
/// Cloning is cheap; clones share the same connection state and
/// configuration.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let redirects = match config.max_redirects {
            0 => Policy::none(),
            max => Policy::limited(max),
        };

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(redirects)
            .build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Client with [`HttpClientConfig::default`] settings.
    pub fn default_client() -> Result<Self> {
        Self::new(HttpClientConfig::default())
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn get(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        self.request(Method::GET, url)
    }

    pub fn post(&self, url: impl Into<String>) -> RequestBuilder<'_> {
        self.request(Method::POST, url)
    }

    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, url.into())
    }

    pub(crate) fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Send once and buffer the response body.
    pub(crate) async fn execute(&self, request: reqwest::Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "Sending HTTP request");

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(|e| HttpClientError::from_send(e, self.config.timeout))?;
        let response = Response::read(response).await?;

        debug!(
            %method,
            %url,
            status = response.status().as_u16(),
            bytes = response.bytes().len(),
            "Received HTTP response"
        );

        Ok(response)
    }
}
