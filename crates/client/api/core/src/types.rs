//! Wire types exchanged with the game server.
//!
//! Request/response envelopes use camelCase field names like the receipt
//! payloads; hero payloads keep the snake_case shape of the catalog service.

use std::collections::BTreeMap;

use devotion_core::{Hero, HeroData, RewardReceipt};
use serde::{Deserialize, Serialize};

/// Account-level profile snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub user_id: String,
    pub display_name: String,
    /// Authoritative currency balances, keyed by currency name.
    pub balances: BTreeMap<String, i64>,
    /// Per-banner pity counters, display-only.
    #[serde(default)]
    pub pity: BTreeMap<String, u32>,
}

/// One roster entry: the owned instance plus its catalog payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnedHero {
    pub hero: Hero,
    pub data: HeroData,
}

/// Summon request. `request_id` is the client-generated idempotency key;
/// replaying the same id returns the original receipt instead of pulling
/// again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonRequest {
    pub banner_id: String,
    pub pull_count: u32,
    pub request_id: String,
}

/// Reward claim request. `source_id` doubles as the idempotency key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub source: String,
    pub source_id: String,
}

/// Server response to a star promotion or awakening: the hero's new state
/// plus the receipt describing what was consumed and granted. The client
/// swaps in the returned hero verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromotionResult {
    pub hero: Hero,
    pub receipt: RewardReceipt,
}
