//! HTTP API configuration loaded from the environment.

use std::env;
use std::time::Duration;

use client_api_core::traits::TransportError;

/// Connection settings for the remote game server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://api.idledevotion.example.com`.
    pub base_url: String,
    /// Bearer token attached to every request when present.
    pub auth_token: Option<String>,
    /// Environment label reported through `GameServerApi::environment`.
    pub environment: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            environment: "production".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEVOTION_API_URL` - Base URL of the game server (required)
    /// - `DEVOTION_AUTH_TOKEN` - Bearer token (optional)
    /// - `DEVOTION_API_ENV` - Environment label (default: "production")
    /// - `DEVOTION_API_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Result<Self, TransportError> {
        let base_url = env::var("DEVOTION_API_URL")
            .map_err(|_| TransportError::Config("DEVOTION_API_URL is not set".into()))?;

        let mut config = Self::new(base_url);
        config.auth_token = env::var("DEVOTION_AUTH_TOKEN").ok();
        if let Ok(environment) = env::var("DEVOTION_API_ENV") {
            config.environment = environment;
        }
        if let Some(secs) = env::var("DEVOTION_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs.max(1));
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot possibly reach a server.
    pub fn validate(&self) -> Result<(), TransportError> {
        if self.base_url.trim().is_empty() {
            return Err(TransportError::Config("base URL is empty".into()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(TransportError::Config(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_http_urls() {
        assert!(ApiConfig::new("https://api.example.com").validate().is_ok());
        assert!(ApiConfig::new("http://localhost:8080").validate().is_ok());
    }

    #[test]
    fn validate_rejects_unusable_urls() {
        assert!(ApiConfig::new("").validate().is_err());
        assert!(ApiConfig::new("ftp://api.example.com").validate().is_err());
    }
}
