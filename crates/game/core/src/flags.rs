//! Feature flag policy.
//!
//! Capability toggles are decided by an explicit [`FeatureFlagProvider`]
//! injected where needed; there is no hidden global configuration. Rollout
//! bucketing hashes a stable user id so a given user sees the same decision
//! on every device and every session.

use std::collections::{BTreeMap, BTreeSet};

use sha2::{Digest, Sha256};

/// Known capability toggles.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureFlag {
    /// Display-only awakening preview tiers (7–10) on the hero screen.
    AwakeningPreviewUi,
    /// Idle "desire accent" cues on the home screen.
    DesireAccents,
    /// Reworked storefront layout.
    StorefrontV2,
}

/// Evaluation context for a flag decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagContext {
    /// Stable user identifier used for rollout bucketing.
    pub user_id: String,
}

impl FlagContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Policy object deciding whether a capability is enabled for a user.
pub trait FeatureFlagProvider: Send + Sync {
    fn is_enabled(&self, flag: FeatureFlag, ctx: &FlagContext) -> bool;
}

/// Fixed flag set; everything not listed is off. Handy for tests and for
/// environments without a rollout config.
#[derive(Clone, Debug, Default)]
pub struct StaticFlagProvider {
    enabled: BTreeSet<FeatureFlag>,
}

impl StaticFlagProvider {
    pub fn with_flags(flags: impl IntoIterator<Item = FeatureFlag>) -> Self {
        Self {
            enabled: flags.into_iter().collect(),
        }
    }
}

impl FeatureFlagProvider for StaticFlagProvider {
    fn is_enabled(&self, flag: FeatureFlag, _ctx: &FlagContext) -> bool {
        self.enabled.contains(&flag)
    }
}

/// Percentage rollout keyed by deterministic user bucketing.
///
/// Each user lands in a bucket 0–99 per flag; the flag is on when the bucket
/// falls under the configured percentage. Buckets are independent across
/// flags so one rollout does not correlate with another.
#[derive(Clone, Debug, Default)]
pub struct RolloutFlagProvider {
    percents: BTreeMap<FeatureFlag, u8>,
}

impl RolloutFlagProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rollout percentage for a flag. Values above 100 mean fully on.
    pub fn set_percent(&mut self, flag: FeatureFlag, percent: u8) {
        self.percents.insert(flag, percent.min(100));
    }

    pub fn percent(mut self, flag: FeatureFlag, percent: u8) -> Self {
        self.set_percent(flag, percent);
        self
    }

    /// Deterministic bucket 0–99 for a (flag, user) pair.
    pub fn bucket(flag: FeatureFlag, user_id: &str) -> u8 {
        let mut hasher = Sha256::new();
        hasher.update(flag.as_ref().as_bytes());
        hasher.update(b":");
        hasher.update(user_id.as_bytes());
        let digest = hasher.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(head) % 100) as u8
    }
}

impl FeatureFlagProvider for RolloutFlagProvider {
    fn is_enabled(&self, flag: FeatureFlag, ctx: &FlagContext) -> bool {
        let percent = self.percents.get(&flag).copied().unwrap_or(0);
        Self::bucket(flag, &ctx.user_id) < percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_keys_are_stable_strings() {
        assert_eq!(
            FeatureFlag::AwakeningPreviewUi.as_ref(),
            "AWAKENING_PREVIEW_UI"
        );
        assert_eq!(FeatureFlag::DesireAccents.to_string(), "DESIRE_ACCENTS");
    }

    #[test]
    fn static_provider_only_enables_listed_flags() {
        let flags = StaticFlagProvider::with_flags([FeatureFlag::StorefrontV2]);
        let ctx = FlagContext::new("u1");
        assert!(flags.is_enabled(FeatureFlag::StorefrontV2, &ctx));
        assert!(!flags.is_enabled(FeatureFlag::AwakeningPreviewUi, &ctx));
    }

    #[test]
    fn bucketing_is_deterministic_per_user() {
        let a = RolloutFlagProvider::bucket(FeatureFlag::DesireAccents, "user-42");
        let b = RolloutFlagProvider::bucket(FeatureFlag::DesireAccents, "user-42");
        assert_eq!(a, b);
        assert!(a < 100);
    }

    #[test]
    fn zero_and_full_rollout_are_absolute() {
        let off = RolloutFlagProvider::new().percent(FeatureFlag::DesireAccents, 0);
        let on = RolloutFlagProvider::new().percent(FeatureFlag::DesireAccents, 100);
        for user in ["a", "b", "c", "user-42", "another"] {
            let ctx = FlagContext::new(user);
            assert!(!off.is_enabled(FeatureFlag::DesireAccents, &ctx));
            assert!(on.is_enabled(FeatureFlag::DesireAccents, &ctx));
        }
    }

    #[test]
    fn unconfigured_flags_default_to_off() {
        let provider = RolloutFlagProvider::new();
        assert!(!provider.is_enabled(FeatureFlag::StorefrontV2, &FlagContext::new("u")));
    }
}
