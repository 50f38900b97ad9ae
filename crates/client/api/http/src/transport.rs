//! `reqwest`-backed [`ServerTransport`].

use async_trait::async_trait;
use client_api_core::traits::{ServerTransport, TransportError};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::ApiConfig;

/// JSON-over-HTTP transport to the game server.
pub struct HttpTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn handle(response: reqwest::Response) -> Result<Value, TransportError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TransportError::Unauthorized(status.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Http {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ServerTransport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::handle(response).await
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Self::handle(response).await
    }

    async fn health_check(&self) -> Result<(), TransportError> {
        self.get_json("/health").await.map(|_| ())
    }
}
