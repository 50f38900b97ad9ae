//! HTTP implementation of the game server transport.
//!
//! Wraps `reqwest` behind the [`ServerTransport`] trait so the domain layer
//! in `client-api-core` never sees HTTP details. Construct via [`ApiConfig`]
//! (usually from environment variables) and wrap the transport in
//! [`HttpGameServer`].
pub mod config;
pub mod transport;

pub use config::ApiConfig;
pub use transport::HttpTransport;

use client_api_core::RemoteGameServer;
use client_api_core::traits::TransportError;

/// Remote game server client over HTTP.
pub type HttpGameServer = RemoteGameServer<HttpTransport>;

/// Build a remote client from a validated configuration.
pub fn connect(config: ApiConfig) -> Result<HttpGameServer, TransportError> {
    let environment = config.environment.clone();
    let transport = HttpTransport::new(config)?;
    Ok(RemoteGameServer::new(transport, environment))
}
