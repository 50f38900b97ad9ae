//! Purchase provider trait and errors.

use async_trait::async_trait;

use crate::types::{EntitlementKey, ProductId, PurchaseOutcome, StorefrontProduct};

/// Purchase layer errors.
#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    #[error("Store backend is unavailable")]
    StoreUnavailable,

    #[error("Unknown product: {0}")]
    ProductUnknown(ProductId),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Abstract purchase store.
///
/// Implementations wrap a platform SDK (or an in-memory stand-in). All
/// methods are idempotent from the caller's perspective: re-purchasing an
/// owned product completes without granting twice, and `restore` replays
/// prior grants.
#[async_trait]
pub trait PurchaseProvider: Send + Sync {
    /// Catalog of currently purchasable products.
    async fn products(&self) -> Result<Vec<StorefrontProduct>, PurchaseError>;

    /// Run a purchase flow for one product.
    async fn purchase(&self, product: &ProductId) -> Result<PurchaseOutcome, PurchaseError>;

    /// Entitlements owned by the current account.
    async fn entitlements(&self) -> Result<Vec<EntitlementKey>, PurchaseError>;

    /// Whether a specific entitlement is owned. Defaults to a lookup over
    /// [`PurchaseProvider::entitlements`].
    async fn owns(&self, key: &EntitlementKey) -> Result<bool, PurchaseError> {
        Ok(self.entitlements().await?.contains(key))
    }

    /// Re-sync entitlements from the store (e.g. after a reinstall).
    async fn restore(&self) -> Result<Vec<EntitlementKey>, PurchaseError>;

    /// Provider name for logs (e.g., "mock", "noop").
    fn name(&self) -> &str;
}
