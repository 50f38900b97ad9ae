//! Game server API abstraction.
//!
//! This crate defines the layered boundary between the client and the
//! authoritative game server:
//! - Layer 0: [`ServerTransport`] (pure JSON-over-HTTP plumbing)
//! - Layer 1: [`ProfileApi`], [`SummonApi`], [`ClaimApi`], [`ProgressionApi`]
//!   (game domain)
//! - Layer 2: [`GameServerApi`] (composite trait)
//!
//! Every receipt that crosses this boundary passes the structural guards in
//! [`validate`] before typed decoding. The in-memory [`MockGameServer`]
//! stands in for the backend in tests and offline runs.
pub mod mock;
pub mod remote;
pub mod traits;
pub mod types;
pub mod validate;

pub use mock::MockGameServer;
pub use remote::RemoteGameServer;
pub use traits::{
    ApiError, ClaimApi, GameServerApi, ProfileApi, ProgressionApi, ServerTransport, SummonApi,
    TransportError,
};
pub use types::{ClaimRequest, OwnedHero, PlayerProfile, PromotionResult, SummonRequest};
pub use validate::{
    assert_valid_gacha_receipt, assert_valid_receipt, decode_gacha_receipt, decode_receipt,
    is_valid_gacha_receipt, is_valid_receipt,
};
