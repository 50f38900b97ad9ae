//! Game server abstraction traits.
//!
//! This module defines a layered server abstraction:
//! - Layer 0: ServerTransport (pure infrastructure)
//! - Layer 1: ProfileApi, SummonApi, ClaimApi, ProgressionApi (game domain)
//! - Layer 2: GameServerApi (composite trait)

use async_trait::async_trait;
use devotion_core::{GachaReceipt, HeroId, ReceiptError, RewardReceipt};
use serde_json::Value;

use crate::types::{ClaimRequest, OwnedHero, PlayerProfile, PromotionResult, SummonRequest};

// ============================================================================
// Error Types
// ============================================================================

/// Transport layer errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Domain-level API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed payload: {0}")]
    InvalidPayload(String),

    #[error("Malformed receipt: {0}")]
    MalformedReceipt(#[from] ReceiptError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient funds: required {required} {currency}, available {available}")]
    InsufficientFunds {
        currency: String,
        required: i64,
        available: i64,
    },

    #[error("Server rejected the request: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

// ============================================================================
// Layer 0: Pure Infrastructure
// ============================================================================

/// Pure request/response plumbing without any game knowledge.
///
/// Implementations handle base URLs, auth headers, and status mapping; the
/// domain layer above them handles payload shapes.
#[async_trait]
pub trait ServerTransport: Send + Sync {
    /// Fetch a JSON document.
    async fn get_json(&self, path: &str) -> std::result::Result<Value, TransportError>;

    /// Post a JSON document and return the JSON response.
    async fn post_json(
        &self,
        path: &str,
        body: Value,
    ) -> std::result::Result<Value, TransportError>;

    /// Verify connectivity to the server.
    async fn health_check(&self) -> std::result::Result<(), TransportError>;
}

// ============================================================================
// Layer 1: Game Domain Traits
// ============================================================================

/// Account profile and hero roster reads.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the account profile (balances, pity counters).
    async fn fetch_profile(&self) -> Result<PlayerProfile>;

    /// Fetch the owned hero roster with catalog payloads.
    async fn fetch_roster(&self) -> Result<Vec<OwnedHero>>;
}

/// Gacha summoning. All RNG and pity accounting happen server-side; the
/// client only carries the idempotency key and renders the receipt.
#[async_trait]
pub trait SummonApi: Send + Sync {
    async fn summon(&self, request: SummonRequest) -> Result<GachaReceipt>;
}

/// Idempotent reward claims (daily login, mail, event payouts).
#[async_trait]
pub trait ClaimApi: Send + Sync {
    /// Claim a reward. Replaying a `source_id` returns the original receipt
    /// with `already_claimed` set instead of granting twice.
    async fn claim(&self, request: ClaimRequest) -> Result<RewardReceipt>;
}

/// Star promotion and awakening. The server validates shard costs and
/// returns the hero's new state; the client never mutates stars locally.
#[async_trait]
pub trait ProgressionApi: Send + Sync {
    async fn promote_star(&self, hero: HeroId) -> Result<PromotionResult>;

    async fn awaken(&self, hero: HeroId) -> Result<PromotionResult>;
}

// ============================================================================
// Layer 2: Composite Trait
// ============================================================================

/// Everything a client surface needs from the game server.
pub trait GameServerApi:
    ProfileApi + SummonApi + ClaimApi + ProgressionApi + Send + Sync
{
    /// Implementation name (e.g., "remote", "mock").
    fn name(&self) -> &str;

    /// Environment label (e.g., "production", "staging", "in-memory").
    fn environment(&self) -> &str;
}
