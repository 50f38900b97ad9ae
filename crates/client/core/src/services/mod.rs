//! Thin orchestration over the server and store boundaries.
//!
//! Services call the injected trait objects, validate what comes back, and
//! return display-ready values. They never compute outcomes locally: a
//! summon, claim, or promotion result is whatever the server's receipt says.
mod claim;
mod progression;
mod roster;
mod summon;

pub use claim::ClaimService;
pub use progression::ProgressionService;
pub use roster::RosterService;
pub use summon::SummonService;

use client_api_core::traits::ApiError;
use client_purchase::PurchaseError;

/// Failures surfaced to the calling screen.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Server error: {0}")]
    Api(#[from] ApiError),

    #[error("Store error: {0}")]
    Purchase(#[from] PurchaseError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
