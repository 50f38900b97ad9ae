//! Builds the session bundle used by client surfaces.
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use client_api_core::{MockGameServer, traits::GameServerApi};
use client_api_http::ApiConfig;
use client_core::{
    AccentScheduler, ClaimService, InteractionBus, ProgressionService, RosterService,
    SummonService,
};
use client_purchase::{MockPurchaseProvider, NoopPurchaseProvider, PurchaseProvider};
use devotion_core::{FeatureFlag, FeatureFlagProvider, FlagContext, RolloutFlagProvider};

use crate::config::ClientConfig;
use crate::session::ClientSession;

/// Builder that assembles the API client, providers, bus, and services.
pub struct SessionBuilder {
    config: ClientConfig,
    api_override: Option<Arc<dyn GameServerApi>>,
    purchases_override: Option<Arc<dyn PurchaseProvider>>,
}

impl SessionBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            api_override: None,
            purchases_override: None,
        }
    }

    /// Provide a custom server client (tests, embedded replays).
    pub fn api(mut self, api: Arc<dyn GameServerApi>) -> Self {
        self.api_override = Some(api);
        self
    }

    /// Provide a custom purchase provider.
    pub fn purchases(mut self, purchases: Arc<dyn PurchaseProvider>) -> Self {
        self.purchases_override = Some(purchases);
        self
    }

    pub fn build(self) -> Result<ClientSession> {
        let config = self.config;

        let session_id = config
            .session_id
            .clone()
            .unwrap_or_else(generate_session_id);

        // Server API: explicit override, then HTTP when configured, then the
        // in-memory mock.
        let api: Arc<dyn GameServerApi> = match self.api_override {
            Some(api) => api,
            None => match ApiConfig::from_env() {
                Ok(api_config) => {
                    tracing::info!(
                        environment = %api_config.environment,
                        "connecting to remote game server"
                    );
                    Arc::new(client_api_http::connect(api_config)?)
                }
                Err(e) => {
                    tracing::warn!(
                        "Game server not configured: {e}. Continuing with the in-memory mock server."
                    );
                    Arc::new(MockGameServer::new())
                }
            },
        };

        // Purchase provider: sandbox mock by default; without a sandbox and
        // without a native store backend, purchases degrade to disabled.
        let purchases: Arc<dyn PurchaseProvider> = match self.purchases_override {
            Some(purchases) => purchases,
            None if config.store_sandbox => Arc::new(MockPurchaseProvider::new()),
            None => {
                tracing::warn!(
                    "No store backend linked in this build. Continuing with purchases disabled."
                );
                Arc::new(NoopPurchaseProvider)
            }
        };

        let flags: Arc<dyn FeatureFlagProvider> = Arc::new(
            RolloutFlagProvider::new()
                .percent(
                    FeatureFlag::AwakeningPreviewUi,
                    config.rollouts.awakening_preview,
                )
                .percent(FeatureFlag::DesireAccents, config.rollouts.desire_accents)
                .percent(FeatureFlag::StorefrontV2, config.rollouts.storefront_v2),
        );

        let bus = InteractionBus::new();
        let accents = AccentScheduler::new(bus.clone());
        let ctx = FlagContext::new(config.user_id.clone());

        let roster = RosterService::new(api.clone(), purchases.clone(), flags.clone());
        let summon = SummonService::new(api.clone(), session_id.clone());
        let claim = ClaimService::new(api.clone());
        let progression = ProgressionService::new(api.clone());

        tracing::info!(
            api = api.name(),
            environment = api.environment(),
            store = purchases.name(),
            session = %session_id,
            "client session assembled"
        );

        Ok(ClientSession {
            config,
            session_id,
            ctx,
            api,
            purchases,
            flags,
            bus,
            accents,
            roster,
            summon,
            claim,
            progression,
        })
    }
}

fn generate_session_id() -> String {
    let epoch_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("session-{epoch_secs}")
}
