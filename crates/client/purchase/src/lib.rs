//! Purchase store abstraction.
//!
//! The real store SDKs (App Store, Play Billing) live behind native modules
//! the client may not have at runtime. Everything here is expressed against
//! the [`PurchaseProvider`] trait so screens and services never touch an SDK
//! directly:
//! - [`MockPurchaseProvider`]: fully functional in-memory storefront for
//!   tests and sandboxed preview environments.
//! - [`NoopPurchaseProvider`]: graceful degradation when no store backend is
//!   available; purchases fail cleanly and nothing is owned.
pub mod mock;
pub mod noop;
pub mod traits;
pub mod types;

pub use mock::MockPurchaseProvider;
pub use noop::NoopPurchaseProvider;
pub use traits::{PurchaseError, PurchaseProvider};
pub use types::{EntitlementKey, EntitlementKind, ProductId, PurchaseOutcome, StorefrontProduct};
