//! Progression facade: tier derivation plus roster labels.
//!
//! Re-exports the tier mapper and adds the label formatting used on roster
//! rows, together with the flag-gated awakening preview extension (tiers
//! 7–10, display-only, no gameplay effect).

pub use crate::tier::{DisplayTier, effective_tier, resolve_tier_art, unlocked_tier};

use crate::flags::{FeatureFlag, FeatureFlagProvider, FlagContext};
use crate::hero::Hero;

/// Ascension names shown next to the tier number, tiers 1–6.
const TIER_SUFFIXES: [&str; 6] = [
    "Initiate",
    "Devoted",
    "Blessed",
    "Radiant",
    "Exalted",
    "Transcendent",
];

/// Preview names for the display-only awakened tiers 7–10.
const PREVIEW_SUFFIXES: [&str; 4] = [
    "Awakened I",
    "Awakened II",
    "Awakened III",
    "Awakened IV",
];

/// Star rank label, e.g. `"3★"`. Out-of-range input is clamped.
pub fn star_label(stars: u8) -> String {
    format!("{}★", stars.min(Hero::MAX_STARS))
}

/// Human-readable name for a display tier.
pub fn tier_suffix(tier: DisplayTier) -> &'static str {
    let n = tier.get();
    if tier.is_preview() {
        PREVIEW_SUFFIXES[(n - DisplayTier::MAX.get() - 1).min(3) as usize]
    } else {
        TIER_SUFFIXES[(n.max(1) - 1) as usize]
    }
}

/// Unlocked tier with the awakening preview extension applied.
///
/// When `AWAKENING_PREVIEW_UI` is enabled for this user and the hero has any
/// awakening progress, the result extends past tier 6 into the preview range
/// (one preview tier per awakening level, capped at 10). Without the flag
/// this is exactly [`unlocked_tier`]. Monotonicity is preserved: the preview
/// result is never below the base result.
pub fn unlocked_tier_with_preview(
    hero: &Hero,
    flags: &dyn FeatureFlagProvider,
    ctx: &FlagContext,
) -> DisplayTier {
    let base = unlocked_tier(hero);
    if hero.awakening_level == 0 || !flags.is_enabled(FeatureFlag::AwakeningPreviewUi, ctx) {
        return base;
    }
    let step = hero.awakening_level.clamp(1, 4) as u8;
    DisplayTier::clamped_preview(DisplayTier::MAX.get() + step)
}
