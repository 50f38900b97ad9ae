//! Shared bootstrap utilities for client surfaces.
//!
//! Provides configuration loading, logging setup, the auth token store, and
//! the session builder that wires the API client, purchase provider, flag
//! policy, and services together.
pub mod builder;
pub mod config;
pub mod logging;
pub mod session;
pub mod token;

pub use builder::SessionBuilder;
pub use config::{ClientConfig, RolloutConfig};
pub use session::ClientSession;
pub use token::{AuthTokenStore, TokenStoreError};
