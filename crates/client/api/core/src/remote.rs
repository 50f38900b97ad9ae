//! Domain API implementation over a [`ServerTransport`].
//!
//! Generic over the transport so the HTTP client, and any test double that
//! speaks raw JSON, share the same payload handling. Every receipt is run
//! through the boundary guards before typed decoding.

use async_trait::async_trait;
use devotion_core::{GachaReceipt, HeroId, RewardReceipt};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::traits::{
    ApiError, ClaimApi, GameServerApi, ProfileApi, ProgressionApi, Result, ServerTransport,
    SummonApi,
};
use crate::types::{ClaimRequest, OwnedHero, PlayerProfile, PromotionResult, SummonRequest};
use crate::validate;

/// Game server client speaking the wire protocol over any transport.
pub struct RemoteGameServer<T> {
    transport: T,
    environment: String,
}

impl<T: ServerTransport> RemoteGameServer<T> {
    pub fn new(transport: T, environment: impl Into<String>) -> Self {
        Self {
            transport,
            environment: environment.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn decode<D: DeserializeOwned>(value: Value, what: &str) -> Result<D> {
        serde_json::from_value(value).map_err(|e| ApiError::InvalidPayload(format!("{what}: {e}")))
    }
}

#[async_trait]
impl<T: ServerTransport> ProfileApi for RemoteGameServer<T> {
    async fn fetch_profile(&self) -> Result<PlayerProfile> {
        let value = self.transport.get_json("/v1/profile").await?;
        Self::decode(value, "profile")
    }

    async fn fetch_roster(&self) -> Result<Vec<OwnedHero>> {
        let value = self.transport.get_json("/v1/roster").await?;
        Self::decode(value, "roster")
    }
}

#[async_trait]
impl<T: ServerTransport> SummonApi for RemoteGameServer<T> {
    async fn summon(&self, request: SummonRequest) -> Result<GachaReceipt> {
        tracing::debug!(banner = %request.banner_id, count = request.pull_count, "summon request");
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::InvalidPayload(format!("summon request: {e}")))?;
        let value = self.transport.post_json("/v1/summon", body).await?;
        validate::decode_gacha_receipt(value)
    }
}

#[async_trait]
impl<T: ServerTransport> ClaimApi for RemoteGameServer<T> {
    async fn claim(&self, request: ClaimRequest) -> Result<RewardReceipt> {
        tracing::debug!(source = %request.source, source_id = %request.source_id, "claim request");
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::InvalidPayload(format!("claim request: {e}")))?;
        let value = self.transport.post_json("/v1/claim", body).await?;
        validate::decode_receipt(value)
    }
}

#[async_trait]
impl<T: ServerTransport> ProgressionApi for RemoteGameServer<T> {
    async fn promote_star(&self, hero: HeroId) -> Result<PromotionResult> {
        let path = format!("/v1/heroes/{}/promote", hero.0);
        let value = self.transport.post_json(&path, json!({})).await?;
        decode_promotion(value)
    }

    async fn awaken(&self, hero: HeroId) -> Result<PromotionResult> {
        let path = format!("/v1/heroes/{}/awaken", hero.0);
        let value = self.transport.post_json(&path, json!({})).await?;
        decode_promotion(value)
    }
}

impl<T: ServerTransport> GameServerApi for RemoteGameServer<T> {
    fn name(&self) -> &str {
        "remote"
    }

    fn environment(&self) -> &str {
        &self.environment
    }
}

/// Promotion payloads embed a receipt; guard it before decoding the whole.
fn decode_promotion(value: Value) -> Result<PromotionResult> {
    let receipt = value
        .get("receipt")
        .ok_or_else(|| ApiError::InvalidPayload("promotion: missing field `receipt`".into()))?;
    validate::assert_valid_receipt(receipt)?;
    let result: PromotionResult = serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidPayload(format!("promotion: {e}")))?;
    result.receipt.validate()?;
    Ok(result)
}
