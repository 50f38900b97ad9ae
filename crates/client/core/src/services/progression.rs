//! Star promotion and awakening calls.

use std::sync::Arc;

use client_api_core::traits::GameServerApi;
use devotion_core::{Hero, HeroId};

use super::Result;
use crate::format::{ReceiptSummary, receipt_summary};

/// Forwards progression actions to the server and presents the outcome.
///
/// The returned [`Hero`] is the server's new state, swapped in verbatim; the
/// client performs no local star or awakening math.
pub struct ProgressionService {
    api: Arc<dyn GameServerApi>,
}

impl ProgressionService {
    pub fn new(api: Arc<dyn GameServerApi>) -> Self {
        Self { api }
    }

    pub async fn promote_star(&self, hero: HeroId) -> Result<(Hero, ReceiptSummary)> {
        let result = self.api.promote_star(hero).await?;
        tracing::info!(hero = %hero, stars = result.hero.stars, "star promotion applied");
        let summary = receipt_summary(&result.receipt);
        Ok((result.hero, summary))
    }

    pub async fn awaken(&self, hero: HeroId) -> Result<(Hero, ReceiptSummary)> {
        let result = self.api.awaken(hero).await?;
        tracing::info!(
            hero = %hero,
            awakening = result.hero.awakening_level,
            "awakening applied"
        );
        let summary = receipt_summary(&result.receipt);
        Ok((result.hero, summary))
    }
}
