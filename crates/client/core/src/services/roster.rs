//! Roster loading and view assembly.

use std::sync::Arc;

use client_api_core::traits::GameServerApi;
use client_purchase::{EntitlementKey, PurchaseProvider};
use devotion_core::{FeatureFlagProvider, FlagContext};

use super::Result;
use crate::view_model::{HeroView, RosterView};

/// Loads the hero roster and derives the display views.
pub struct RosterService {
    api: Arc<dyn GameServerApi>,
    purchases: Arc<dyn PurchaseProvider>,
    flags: Arc<dyn FeatureFlagProvider>,
}

impl RosterService {
    pub fn new(
        api: Arc<dyn GameServerApi>,
        purchases: Arc<dyn PurchaseProvider>,
        flags: Arc<dyn FeatureFlagProvider>,
    ) -> Self {
        Self {
            api,
            purchases,
            flags,
        }
    }

    /// Fetch the roster and assemble one [`HeroView`] per owned hero.
    ///
    /// Entitlements are read once per load; a store failure downgrades to
    /// "owns nothing" rather than blocking the roster.
    pub async fn load(&self, ctx: &FlagContext) -> Result<RosterView> {
        let roster = self.api.fetch_roster().await?;

        let owned_keys = match self.purchases.entitlements().await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "store unavailable; rendering without entitlements");
                Vec::new()
            }
        };

        let heroes = roster
            .iter()
            .map(|owned| {
                let owns_cinematic =
                    owned_keys.contains(&EntitlementKey::cinematic(owned.hero.hero_data_id));
                HeroView::from_owned(owned, owns_cinematic, self.flags.as_ref(), ctx)
            })
            .collect();

        Ok(RosterView { heroes })
    }
}
