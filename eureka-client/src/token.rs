//! OAuth2 client-credentials token client

use crate::{EurekaError, Result};
use async_trait::async_trait;
use eureka_http::{HttpClient, StatusCode};
use serde::Deserialize;
use std::fmt;
use tracing::debug;
use url::Url;

/// Source of bearer tokens for registry calls.
///
/// Every registry operation asks for a token right before sending its
/// request, so implementations are expected to hand out a fresh one.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtain an access token.
    async fn access_token(&self) -> Result<String>;
}

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Client for the token endpoint.
///
/// ```rust,ignore
/// use eureka_client::TokenClient;
/// use eureka_http::HttpClient;
///
/// let tokens = TokenClient::new(
///     HttpClient::default_client()?,
///     "https://uaa.example.com/oauth/token",
///     "registrar",
///     "s3cret",
/// );
/// let token = tokens.get_token().await?;
/// ```
#[derive(Clone)]
pub struct TokenClient {
    http: HttpClient,
    token_url: String,
    client_name: String,
    client_secret: String,
}

impl TokenClient {
    /// Create new token client
    pub fn new(
        http: HttpClient,
        token_url: impl Into<String>,
        client_name: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            client_name: client_name.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Configured token endpoint
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Configured OAuth client name
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Perform a client-credentials grant and return the full token response.
    pub async fn fetch_token(&self) -> Result<Token> {
        let url = Url::parse(&self.token_url).map_err(|e| EurekaError::InvalidBaseUrl {
            url: self.token_url.clone(),
            reason: e.to_string(),
        })?;

        let response = self
            .http
            .post(url.as_str())
            .basic_auth(&self.client_name, &self.client_secret)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(EurekaError::AuthServer {
                status: response.status().as_u16(),
                body: response.text_lossy(),
            });
        }

        let token: Token = serde_json::from_slice(response.bytes()).map_err(EurekaError::Decode)?;

        debug!(
            client = %self.client_name,
            expires_in = ?token.expires_in,
            "Obtained access token"
        );
        Ok(token)
    }

    /// Perform a client-credentials grant and return the access token.
    pub async fn get_token(&self) -> Result<String> {
        Ok(self.fetch_token().await?.access_token)
    }
}

#[async_trait]
impl TokenProvider for TokenClient {
    async fn access_token(&self) -> Result<String> {
        self.get_token().await
    }
}

impl fmt::Debug for TokenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenClient")
            .field("token_url", &self.token_url)
            .field("client_name", &self.client_name)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token_url: &str) -> TokenClient {
        TokenClient::new(
            HttpClient::default_client().unwrap(),
            token_url,
            "registrar",
            "s3cret",
        )
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", client("https://uaa.example.com/oauth/token"));
        assert!(rendered.contains("registrar"));
        assert!(!rendered.contains("s3cret"));
    }

    #[tokio::test]
    async fn test_invalid_token_url() {
        let err = client("uaa.example.com/oauth/token")
            .get_token()
            .await
            .unwrap_err();
        assert!(matches!(err, EurekaError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_token_response_optional_fields() {
        let token: Token = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(token.token_type.is_none());

        let token: Token = serde_json::from_str(
            r#"{"access_token": "abc", "token_type": "bearer", "expires_in": 43199, "jti": "x"}"#,
        )
        .unwrap();
        assert_eq!(token.expires_in, Some(43199));
    }
}
