//! Mock purchase provider for testing and sandboxed environments.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use devotion_core::HeroDataId;

use crate::traits::{PurchaseError, PurchaseProvider};
use crate::types::{EntitlementKey, ProductId, PurchaseOutcome, StorefrontProduct};

/// In-memory storefront.
///
/// Purchases settle immediately and grants survive for the provider's
/// lifetime, which is enough to exercise every entitlement-dependent path
/// without a store SDK.
#[derive(Clone)]
pub struct MockPurchaseProvider {
    catalog: Vec<StorefrontProduct>,
    owned: Arc<Mutex<BTreeSet<EntitlementKey>>>,
}

impl MockPurchaseProvider {
    pub fn new() -> Self {
        Self {
            catalog: seed_catalog(),
            owned: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    /// Pre-grant an entitlement, for tests that start from an owning state.
    pub fn grant(&self, key: EntitlementKey) {
        self.owned.lock().unwrap().insert(key);
    }
}

impl Default for MockPurchaseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PurchaseProvider for MockPurchaseProvider {
    async fn products(&self) -> Result<Vec<StorefrontProduct>, PurchaseError> {
        Ok(self.catalog.clone())
    }

    async fn purchase(&self, product: &ProductId) -> Result<PurchaseOutcome, PurchaseError> {
        let item = self
            .catalog
            .iter()
            .find(|p| &p.id == product)
            .ok_or_else(|| PurchaseError::ProductUnknown(product.clone()))?;

        self.owned.lock().unwrap().insert(item.grants);
        tracing::debug!(product = %product, "mock purchase completed");
        Ok(PurchaseOutcome::Completed(item.grants))
    }

    async fn entitlements(&self) -> Result<Vec<EntitlementKey>, PurchaseError> {
        Ok(self.owned.lock().unwrap().iter().copied().collect())
    }

    async fn restore(&self) -> Result<Vec<EntitlementKey>, PurchaseError> {
        self.entitlements().await
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn seed_catalog() -> Vec<StorefrontProduct> {
    vec![
        StorefrontProduct {
            id: ProductId::new("cinematic.seraphine"),
            title: "Seraphine: Dawnbreak Cinematic".into(),
            price_label: "$4.99".into(),
            grants: EntitlementKey::cinematic(HeroDataId(14)),
        },
        StorefrontProduct {
            id: ProductId::new("cinematic.maelis"),
            title: "Maelis: Tidecall Cinematic".into(),
            price_label: "$4.99".into(),
            grants: EntitlementKey::cinematic(HeroDataId(13)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn purchase_grants_the_entitlement() {
        let store = MockPurchaseProvider::new();
        let key = EntitlementKey::cinematic(HeroDataId(14));
        assert!(!store.owns(&key).await.unwrap());

        let outcome = store
            .purchase(&ProductId::new("cinematic.seraphine"))
            .await
            .unwrap();
        assert_eq!(outcome, PurchaseOutcome::Completed(key));
        assert!(store.owns(&key).await.unwrap());

        // Re-purchasing an owned product settles without a second grant.
        store
            .purchase(&ProductId::new("cinematic.seraphine"))
            .await
            .unwrap();
        assert_eq!(store.entitlements().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_products_are_rejected() {
        let store = MockPurchaseProvider::new();
        let err = store
            .purchase(&ProductId::new("cinematic.nobody"))
            .await
            .unwrap_err();
        assert!(matches!(err, PurchaseError::ProductUnknown(_)));
    }

    #[tokio::test]
    async fn restore_replays_grants() {
        let store = MockPurchaseProvider::new();
        let key = EntitlementKey::cinematic(HeroDataId(13));
        store.grant(key);
        assert_eq!(store.restore().await.unwrap(), vec![key]);
    }
}
