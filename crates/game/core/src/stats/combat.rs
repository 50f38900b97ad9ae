//! Combat stat assembly: base selection plus ownership bonuses.

use super::bonus::{BonusStack, StatBounds};
use crate::hero::{Hero, HeroData};

/// Display combat statistics for one hero.
///
/// Never fed back into server combat resolution; recomputed from the latest
/// payload whenever a screen needs it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
}

/// Bonuses applied on top of the effective base stats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatBonuses {
    pub hp: BonusStack,
    pub atk: BonusStack,
    pub def: BonusStack,
}

impl CombatBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply all stacks to a base stat block.
    pub fn apply(&self, base: CombatStats) -> CombatStats {
        const BOUNDS: StatBounds = StatBounds::COMBAT;
        CombatStats {
            hp: self.hp.apply(base.hp, BOUNDS),
            atk: self.atk.apply(base.atk, BOUNDS),
            def: self.def.apply(base.def, BOUNDS),
        }
    }
}

/// Pick the stat base for a hero: server-tracked current values when present,
/// raw catalog base stats otherwise.
pub fn effective_base(hero: &Hero, data: &HeroData) -> CombatStats {
    CombatStats {
        hp: hero.current_hp.unwrap_or(data.base_hp),
        atk: hero.current_atk.unwrap_or(data.base_atk),
        def: hero.current_def.unwrap_or(data.base_def),
    }
}

/// Bonus stack for the premium-cinematic entitlement: +10% HP, +5% ATK.
///
/// The entitlement is an IAP-gated cosmetic unlock scoped to a single hero;
/// ownership is decided by the purchase provider, not here.
pub fn cinematic_bonuses() -> CombatBonuses {
    CombatBonuses {
        hp: BonusStack::new().increased(10),
        atk: BonusStack::new().increased(5),
        def: BonusStack::new(),
    }
}

/// Compute the display combat stats for one hero.
pub fn compute_combat_stats(hero: &Hero, data: &HeroData, owns_cinematic: bool) -> CombatStats {
    let base = effective_base(hero, data);
    if owns_cinematic {
        cinematic_bonuses().apply(base)
    } else {
        base
    }
}
