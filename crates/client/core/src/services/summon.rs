//! Gacha summon orchestration.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use client_api_core::traits::GameServerApi;
use client_api_core::types::SummonRequest;
use devotion_core::GachaReceipt;

use super::Result;
use crate::format::{ReceiptSummary, gacha_summary};

/// Runs summons against the server with client-generated idempotency keys.
pub struct SummonService {
    api: Arc<dyn GameServerApi>,
    /// Session-unique prefix for request ids, so retries within a session
    /// replay instead of double-spending.
    session: String,
    sequence: AtomicU64,
}

impl SummonService {
    pub fn new(api: Arc<dyn GameServerApi>, session: impl Into<String>) -> Self {
        Self {
            api,
            session: session.into(),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_request_id(&self, banner_id: &str) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}:{}:{}", self.session, banner_id, seq)
    }

    /// Summon on a banner. Returns the validated receipt plus its summary.
    pub async fn summon(
        &self,
        banner_id: &str,
        pull_count: u32,
    ) -> Result<(GachaReceipt, ReceiptSummary)> {
        let request = SummonRequest {
            banner_id: banner_id.to_string(),
            pull_count,
            request_id: self.next_request_id(banner_id),
        };

        let receipt = self.api.summon(request).await?;
        tracing::info!(
            banner = %receipt.banner_id,
            pulls = receipt.pull_count,
            pity_triggered = receipt.pity_triggered,
            "summon complete"
        );

        let summary = gacha_summary(&receipt);
        Ok((receipt, summary))
    }

    /// Retry a specific request id (e.g. after a network drop). The server
    /// replays the original receipt for a known id.
    pub async fn retry(
        &self,
        banner_id: &str,
        pull_count: u32,
        request_id: &str,
    ) -> Result<(GachaReceipt, ReceiptSummary)> {
        let receipt = self
            .api
            .summon(SummonRequest {
                banner_id: banner_id.to_string(),
                pull_count,
                request_id: request_id.to_string(),
            })
            .await?;
        let summary = gacha_summary(&receipt);
        Ok((receipt, summary))
    }
}
