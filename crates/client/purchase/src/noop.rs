//! Degraded provider for environments without a store backend.

use async_trait::async_trait;

use crate::traits::{PurchaseError, PurchaseProvider};
use crate::types::{EntitlementKey, ProductId, PurchaseOutcome, StorefrontProduct};

/// Provider used when no store SDK is available (e.g. stripped preview
/// builds). The storefront is empty, nothing is owned, and purchase attempts
/// fail with [`PurchaseError::StoreUnavailable`] instead of crashing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPurchaseProvider;

#[async_trait]
impl PurchaseProvider for NoopPurchaseProvider {
    async fn products(&self) -> Result<Vec<StorefrontProduct>, PurchaseError> {
        Ok(Vec::new())
    }

    async fn purchase(&self, product: &ProductId) -> Result<PurchaseOutcome, PurchaseError> {
        tracing::warn!(product = %product, "purchase attempted without a store backend");
        Err(PurchaseError::StoreUnavailable)
    }

    async fn entitlements(&self) -> Result<Vec<EntitlementKey>, PurchaseError> {
        Ok(Vec::new())
    }

    async fn restore(&self) -> Result<Vec<EntitlementKey>, PurchaseError> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devotion_core::HeroDataId;

    #[tokio::test]
    async fn everything_degrades_cleanly() {
        let store = NoopPurchaseProvider;
        assert!(store.products().await.unwrap().is_empty());
        assert!(
            !store
                .owns(&EntitlementKey::cinematic(HeroDataId(1)))
                .await
                .unwrap()
        );
        assert!(matches!(
            store.purchase(&ProductId::new("anything")).await,
            Err(PurchaseError::StoreUnavailable)
        ));
    }
}
