//! View-model snapshots derived from server payloads.

use client_api_core::types::OwnedHero;
use devotion_core::{
    DisplayTier, FeatureFlagProvider, FlagContext, HeroId, MotionParams, Rarity,
    compute_combat_stats, compute_power, compute_team_power, motion_params,
    progression::{star_label, tier_suffix, unlocked_tier_with_preview},
    resolve_motion_tier, resolve_tier_art,
};

/// One roster card, fully derived and ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroView {
    pub id: HeroId,
    pub name: String,
    pub rarity: Rarity,
    pub stars: u8,
    pub star_label: String,
    pub tier: DisplayTier,
    pub tier_suffix: &'static str,
    /// `None` means the caller shows the placeholder asset.
    pub art_url: Option<String>,
    pub power: i64,
    pub motion: MotionParams,
}

impl HeroView {
    /// Derive a card from a roster entry.
    ///
    /// `owns_cinematic` comes from the purchase provider; the awakening
    /// preview tier is gated by the injected flag policy.
    pub fn from_owned(
        owned: &OwnedHero,
        owns_cinematic: bool,
        flags: &dyn FeatureFlagProvider,
        ctx: &FlagContext,
    ) -> Self {
        let hero = &owned.hero;
        let data = &owned.data;

        let tier = unlocked_tier_with_preview(hero, flags, ctx);
        let stats = compute_combat_stats(hero, data, owns_cinematic);
        let motion_tier = resolve_motion_tier(hero.affinity_level);

        Self {
            id: hero.id,
            name: data.name.clone(),
            rarity: data.rarity,
            stars: hero.stars_clamped(),
            star_label: star_label(hero.stars),
            tier,
            tier_suffix: tier_suffix(tier),
            art_url: resolve_tier_art(data, tier).map(str::to_string),
            power: compute_power(&stats),
            motion: motion_params(motion_tier),
        }
    }
}

/// Roster screen snapshot.
#[derive(Clone, Debug, Default)]
pub struct RosterView {
    pub heroes: Vec<HeroView>,
}

impl RosterView {
    /// Sum of roster powers, shown in the header.
    pub fn total_power(&self) -> i64 {
        self.heroes.iter().map(|h| h.power).sum()
    }
}

/// Team-builder snapshot. Uses the team power formula, which deliberately
/// differs from the roster one.
#[derive(Clone, Debug, Default)]
pub struct TeamView {
    pub members: Vec<HeroView>,
    pub team_power: i64,
}

impl TeamView {
    /// Assemble a team from roster entries, re-deriving stats with the team
    /// weighting.
    pub fn from_owned(
        members: &[&OwnedHero],
        owns_cinematic: impl Fn(&OwnedHero) -> bool,
        flags: &dyn FeatureFlagProvider,
        ctx: &FlagContext,
    ) -> Self {
        let team_power = members
            .iter()
            .map(|&owned| {
                let stats =
                    compute_combat_stats(&owned.hero, &owned.data, owns_cinematic(owned));
                compute_team_power(&stats)
            })
            .sum();
        Self {
            members: members
                .iter()
                .map(|&owned| HeroView::from_owned(owned, owns_cinematic(owned), flags, ctx))
                .collect(),
            team_power,
        }
    }
}
