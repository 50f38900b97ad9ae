//! Client runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Rollout percentages for the flag policy, 0–100 per flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct RolloutConfig {
    pub awakening_preview: u8,
    pub desire_accents: u8,
    pub storefront_v2: u8,
}

/// Configuration required to bootstrap a client session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Stable account id used for flag bucketing and request attribution.
    pub user_id: String,
    /// Session label for logs and idempotency key prefixes. Auto-generated
    /// when absent.
    pub session_id: Option<String>,
    /// Run the purchase store in sandbox (mock) mode. When off and no native
    /// store backend is linked, purchases degrade to disabled.
    pub store_sandbox: bool,
    pub rollouts: RolloutConfig,
    /// Directory for rolling log files; stderr-only when absent.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_id: "anonymous".to_string(),
            session_id: None,
            store_sandbox: true,
            rollouts: RolloutConfig::default(),
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEVOTION_USER_ID` - Account id for flag bucketing (default: "anonymous")
    /// - `DEVOTION_SESSION_ID` - Session label (default: auto-generated)
    /// - `DEVOTION_STORE_SANDBOX` - Sandbox store mode (default: true)
    /// - `DEVOTION_LOG_DIR` - Directory for rolling log files (default: none)
    /// - `AWAKENING_PREVIEW_ROLLOUT` - Rollout percent 0-100 (default: 0)
    /// - `DESIRE_ACCENTS_ROLLOUT` - Rollout percent 0-100 (default: 0)
    /// - `STOREFRONT_V2_ROLLOUT` - Rollout percent 0-100 (default: 0)
    ///
    /// The API endpoint itself is read by `client-api-http`
    /// (`DEVOTION_API_URL` and friends); absence of an endpoint selects the
    /// in-memory mock server.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(user_id) = env::var("DEVOTION_USER_ID")
            && !user_id.trim().is_empty()
        {
            config.user_id = user_id;
        }

        config.session_id = env::var("DEVOTION_SESSION_ID").ok();
        config.log_dir = env::var("DEVOTION_LOG_DIR").ok().map(PathBuf::from);

        if let Some(sandbox) = read_env::<bool>("DEVOTION_STORE_SANDBOX") {
            config.store_sandbox = sandbox;
        }

        config.rollouts = RolloutConfig {
            awakening_preview: read_percent("AWAKENING_PREVIEW_ROLLOUT"),
            desire_accents: read_percent("DESIRE_ACCENTS_ROLLOUT"),
            storefront_v2: read_percent("STOREFRONT_V2_ROLLOUT"),
        };

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_percent(key: &str) -> u8 {
    read_env::<u8>(key).map(|p| p.min(100)).unwrap_or(0)
}
