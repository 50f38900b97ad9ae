//! Display-only combat stat estimators.
//!
//! Combines catalog base stats (or server-tracked current values) with a
//! small ownership-based bonus stack into the "power" numbers shown on
//! roster and team screens. Advisory only: actual combat resolution happens
//! server-side and never consumes these values.
pub mod bonus;
pub mod combat;
pub mod power;

pub use bonus::{Bonus, BonusStack, StatBounds};
pub use combat::{CombatBonuses, CombatStats, cinematic_bonuses, compute_combat_stats, effective_base};
pub use power::{compute_power, compute_team_power};
