//! Motion tier ladder driven by hero affinity.
//!
//! Affinity unlocks progressively livelier idle motion on the hero portrait.
//! The mapping is a non-decreasing step function over a fixed threshold
//! table; each tier carries a fixed set of animation amplitudes consumed by
//! the rendering layer. Purely a lookup, no state.

use std::fmt;

/// Cosmetic motion bucket, 0 (still) through 5 (full idle animation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MotionTier(u8);

impl MotionTier {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(5);

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MotionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Animation amplitudes for one motion tier.
///
/// All values are amplitudes around the rest pose; a tier with all zeroes
/// renders a static portrait.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionParams {
    pub breathing_scale: f32,
    pub sway_x: f32,
    pub sway_y: f32,
    pub bob_y: f32,
    pub rotate_z: f32,
}

impl MotionParams {
    pub const STILL: Self = Self {
        breathing_scale: 0.0,
        sway_x: 0.0,
        sway_y: 0.0,
        bob_y: 0.0,
        rotate_z: 0.0,
    };
}

/// Ladder row for the affinity screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTierInfo {
    pub tier: MotionTier,
    pub label: &'static str,
    pub min_affinity: u32,
    pub params: MotionParams,
}

/// Minimum affinity level for each tier; tier *n* unlocks at affinity ≥ *n*.
const AFFINITY_THRESHOLDS: [u32; 6] = [0, 1, 2, 3, 4, 5];

/// Fixed per-tier ladder. Tiers 0 and 1 render no motion.
const TIER_TABLE: [MotionTierInfo; 6] = [
    MotionTierInfo {
        tier: MotionTier(0),
        label: "Still",
        min_affinity: AFFINITY_THRESHOLDS[0],
        params: MotionParams::STILL,
    },
    MotionTierInfo {
        tier: MotionTier(1),
        label: "Stirring",
        min_affinity: AFFINITY_THRESHOLDS[1],
        params: MotionParams::STILL,
    },
    MotionTierInfo {
        tier: MotionTier(2),
        label: "Breathing",
        min_affinity: AFFINITY_THRESHOLDS[2],
        params: MotionParams {
            breathing_scale: 0.010,
            sway_x: 0.0,
            sway_y: 0.0,
            bob_y: 1.2,
            rotate_z: 0.0,
        },
    },
    MotionTierInfo {
        tier: MotionTier(3),
        label: "Swaying",
        min_affinity: AFFINITY_THRESHOLDS[3],
        params: MotionParams {
            breathing_scale: 0.015,
            sway_x: 1.5,
            sway_y: 0.8,
            bob_y: 2.0,
            rotate_z: 0.2,
        },
    },
    MotionTierInfo {
        tier: MotionTier(4),
        label: "Lively",
        min_affinity: AFFINITY_THRESHOLDS[4],
        params: MotionParams {
            breathing_scale: 0.020,
            sway_x: 2.2,
            sway_y: 1.2,
            bob_y: 2.8,
            rotate_z: 0.35,
        },
    },
    MotionTierInfo {
        tier: MotionTier(5),
        label: "Devoted",
        min_affinity: AFFINITY_THRESHOLDS[5],
        params: MotionParams {
            breathing_scale: 0.028,
            sway_x: 3.0,
            sway_y: 1.8,
            bob_y: 3.6,
            rotate_z: 0.5,
        },
    },
];

/// Map an affinity level to its motion tier.
///
/// Non-decreasing step function, capped at [`MotionTier::MAX`].
pub fn resolve_motion_tier(affinity_level: u32) -> MotionTier {
    let mut tier = MotionTier::MIN;
    for info in &TIER_TABLE {
        if affinity_level >= info.min_affinity {
            tier = info.tier;
        }
    }
    tier
}

/// Animation amplitudes for a tier.
pub fn motion_params(tier: MotionTier) -> MotionParams {
    tier_info(tier).params
}

/// Ladder row for a tier.
pub fn tier_info(tier: MotionTier) -> &'static MotionTierInfo {
    let idx = tier.get().min(MotionTier::MAX.get()) as usize;
    &TIER_TABLE[idx]
}

/// The full ladder, lowest tier first, for the affinity screen.
pub fn tier_table() -> &'static [MotionTierInfo] {
    &TIER_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_follows_the_threshold_table() {
        assert_eq!(resolve_motion_tier(0).get(), 0);
        assert_eq!(resolve_motion_tier(2).get(), 2);
        assert_eq!(resolve_motion_tier(5).get(), 5);
        assert_eq!(resolve_motion_tier(100).get(), 5);
    }

    #[test]
    fn resolver_is_non_decreasing() {
        let mut prev = MotionTier::MIN;
        for affinity in 0..50u32 {
            let tier = resolve_motion_tier(affinity);
            assert!(tier >= prev);
            prev = tier;
        }
    }

    #[test]
    fn low_tiers_render_no_motion() {
        assert_eq!(motion_params(MotionTier(0)), MotionParams::STILL);
        assert_eq!(motion_params(MotionTier(1)), MotionParams::STILL);
        assert!(motion_params(MotionTier(2)).breathing_scale > 0.0);
    }

    #[test]
    fn amplitudes_grow_with_tier() {
        for pair in TIER_TABLE.windows(2) {
            assert!(pair[1].params.breathing_scale >= pair[0].params.breathing_scale);
            assert!(pair[1].params.bob_y >= pair[0].params.bob_y);
        }
    }

    #[test]
    fn tier_info_clamps_out_of_range_tiers() {
        assert_eq!(tier_info(MotionTier(9)).tier, MotionTier::MAX);
        assert_eq!(tier_table().len(), 6);
    }
}
