//! Pure derivation layer for the Idle Devotion client.
//!
//! `devotion-core` defines the hero/receipt data model and the deterministic
//! display derivations (tiers, motion, power estimates) shared by every client
//! surface. Everything here is a total, synchronous function of its inputs:
//! no I/O, no RNG, no mutation. Authoritative game state (stars, balances,
//! gacha outcomes, combat results) is owned by the remote server and only
//! displayed by this layer.
pub mod flags;
pub mod hero;
pub mod motion;
pub mod progression;
pub mod receipt;
pub mod stats;
pub mod tier;

pub use flags::{FeatureFlag, FeatureFlagProvider, FlagContext, RolloutFlagProvider, StaticFlagProvider};
pub use hero::{Hero, HeroData, HeroDataId, HeroId, Rarity};
pub use motion::{MotionParams, MotionTier, MotionTierInfo, motion_params, resolve_motion_tier, tier_info, tier_table};
pub use receipt::{GachaReceipt, GachaResult, ReceiptError, RewardItem, RewardReceipt, SummonOutcome};
pub use stats::{CombatBonuses, CombatStats, compute_combat_stats, compute_power, compute_team_power};
pub use tier::{DisplayTier, effective_tier, resolve_tier_art, unlocked_tier};
