//! Idempotent reward claims.

use std::sync::Arc;

use client_api_core::traits::{ApiError, GameServerApi};
use client_api_core::types::ClaimRequest;

use super::{Result, ServiceError};
use crate::format::{ReceiptSummary, receipt_summary};

/// Claims rewards and renders the result.
pub struct ClaimService {
    api: Arc<dyn GameServerApi>,
}

impl ClaimService {
    pub fn new(api: Arc<dyn GameServerApi>) -> Self {
        Self { api }
    }

    /// Claim a reward source. `source_id` is the idempotency key: replays
    /// come back flagged `already_claimed` and render as such.
    ///
    /// A malformed receipt means the grant may still have happened
    /// server-side, so it degrades to the generic "Claimed!" banner instead
    /// of surfacing an error for a success.
    pub async fn claim(&self, source: &str, source_id: &str) -> Result<ReceiptSummary> {
        let request = ClaimRequest {
            source: source.to_string(),
            source_id: source_id.to_string(),
        };

        match self.api.claim(request).await {
            Ok(receipt) => Ok(receipt_summary(&receipt)),
            Err(e @ (ApiError::InvalidPayload(_) | ApiError::MalformedReceipt(_))) => {
                tracing::warn!(error = %e, source, source_id, "unrenderable receipt; using fallback");
                Ok(ReceiptSummary::fallback())
            }
            Err(e) => Err(ServiceError::Api(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use self::stub::BrokenReceiptServer;
    use client_api_core::MockGameServer;

    #[tokio::test]
    async fn replayed_claims_render_as_already_claimed() {
        let service = ClaimService::new(Arc::new(MockGameServer::new()));

        let first = service.claim("daily_login", "daily:1").await.unwrap();
        assert_eq!(first.headline, "Rewards claimed!");

        let replay = service.claim("daily_login", "daily:1").await.unwrap();
        assert_eq!(replay.headline, "Already claimed");
    }

    #[tokio::test]
    async fn malformed_receipts_fall_back_to_the_generic_banner() {
        let service = ClaimService::new(Arc::new(BrokenReceiptServer));
        let summary = service.claim("mail", "mail:1").await.unwrap();
        assert_eq!(summary, ReceiptSummary::fallback());
    }

    #[tokio::test]
    async fn other_errors_still_propagate() {
        let service = ClaimService::new(Arc::new(MockGameServer::new()));
        let err = service.claim("", "").await.unwrap_err();
        assert!(matches!(err, ServiceError::Api(ApiError::Rejected(_))));
    }

    /// A server whose receipts never validate, for the fallback path.
    mod stub {
        use async_trait::async_trait;
        use client_api_core::traits::{
            ApiError, ClaimApi, GameServerApi, ProfileApi, ProgressionApi, Result, SummonApi,
        };
        use client_api_core::types::{
            ClaimRequest, OwnedHero, PlayerProfile, PromotionResult, SummonRequest,
        };
        use devotion_core::{GachaReceipt, HeroId, RewardReceipt};

        pub struct BrokenReceiptServer;

        #[async_trait]
        impl ProfileApi for BrokenReceiptServer {
            async fn fetch_profile(&self) -> Result<PlayerProfile> {
                Err(ApiError::NotFound("profile".into()))
            }

            async fn fetch_roster(&self) -> Result<Vec<OwnedHero>> {
                Ok(Vec::new())
            }
        }

        #[async_trait]
        impl SummonApi for BrokenReceiptServer {
            async fn summon(&self, _request: SummonRequest) -> Result<GachaReceipt> {
                Err(ApiError::InvalidPayload("gacha receipt: broken".into()))
            }
        }

        #[async_trait]
        impl ClaimApi for BrokenReceiptServer {
            async fn claim(&self, _request: ClaimRequest) -> Result<RewardReceipt> {
                Err(ApiError::InvalidPayload("receipt: missing field `balances`".into()))
            }
        }

        #[async_trait]
        impl ProgressionApi for BrokenReceiptServer {
            async fn promote_star(&self, hero: HeroId) -> Result<PromotionResult> {
                Err(ApiError::NotFound(hero.to_string()))
            }

            async fn awaken(&self, hero: HeroId) -> Result<PromotionResult> {
                Err(ApiError::NotFound(hero.to_string()))
            }
        }

        impl GameServerApi for BrokenReceiptServer {
            fn name(&self) -> &str {
                "broken"
            }

            fn environment(&self) -> &str {
                "test"
            }
        }
    }
}
