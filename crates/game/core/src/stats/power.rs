//! Power number formulas.
//!
//! Two deliberately different weightings coexist: the roster/detail screens
//! use [`compute_power`], the team builder uses [`compute_team_power`]. The
//! divergence is an inherited product decision; do not unify them.

use super::combat::CombatStats;

/// Roster power: `hp + atk×3 + def×2`.
pub fn compute_power(stats: &CombatStats) -> i64 {
    stats.hp + stats.atk * 3 + stats.def * 2
}

/// Team-builder power: `hp + atk×2 + def`.
pub fn compute_team_power(stats: &CombatStats) -> i64 {
    stats.hp + stats.atk * 2 + stats.def
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: CombatStats = CombatStats {
        hp: 1000,
        atk: 100,
        def: 50,
    };

    #[test]
    fn roster_power_weighting() {
        assert_eq!(compute_power(&STATS), 1400);
    }

    #[test]
    fn team_power_weighting() {
        assert_eq!(compute_team_power(&STATS), 1250);
    }

    #[test]
    fn the_two_formulas_stay_distinct() {
        assert_ne!(compute_power(&STATS), compute_team_power(&STATS));
    }
}
