//! Assembled client session bundle.

use std::sync::Arc;

use client_api_core::traits::{GameServerApi, ProfileApi, Result as ApiResult};
use client_api_core::types::PlayerProfile;
use client_core::{
    AccentScheduler, ClaimService, InteractionBus, ProgressionService, RosterService,
    SummonService,
};
use client_purchase::PurchaseProvider;
use devotion_core::{FeatureFlagProvider, FlagContext};

use crate::config::ClientConfig;

/// Everything a client surface needs for one signed-in session.
///
/// Built by [`crate::SessionBuilder`]; all members are cheap to clone or
/// share, and the whole bundle is dropped on sign-out.
pub struct ClientSession {
    pub config: ClientConfig,
    pub session_id: String,
    /// Flag evaluation context for this account.
    pub ctx: FlagContext,

    pub api: Arc<dyn GameServerApi>,
    pub purchases: Arc<dyn PurchaseProvider>,
    pub flags: Arc<dyn FeatureFlagProvider>,

    pub bus: InteractionBus,
    pub accents: AccentScheduler,

    pub roster: RosterService,
    pub summon: SummonService,
    pub claim: ClaimService,
    pub progression: ProgressionService,
}

impl ClientSession {
    /// Fetch the account profile from the wired server.
    pub async fn profile(&self) -> ApiResult<PlayerProfile> {
        self.api.fetch_profile().await
    }
}
