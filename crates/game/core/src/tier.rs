//! Display tier derivation from stars and awakening.
//!
//! A hero's roster card shows one of six ascension looks. Which one is
//! unlocked is a pure function of the server-reported star rank and awakening
//! level; callers may request a lower tier (art browsing) but never a higher
//! one. Art resolution degrades gracefully: tier art, then the generic
//! portrait, then nothing (the caller substitutes a placeholder asset).

use crate::hero::{Hero, HeroData};
use std::fmt;

/// UI-only ascension bucket controlling which artwork is shown.
///
/// Valid range is 1–6; the awakening-preview extension (see
/// [`crate::progression`]) may surface display-only values up to 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DisplayTier(u8);

impl DisplayTier {
    /// Lowest tier, shown for a freshly summoned zero-star hero.
    pub const MIN: Self = Self(1);

    /// Highest tier with dedicated artwork.
    pub const MAX: Self = Self(6);

    /// Upper bound of the display-only awakening preview extension.
    pub const PREVIEW_MAX: Self = Self(10);

    /// Clamp an arbitrary raw value into the art range [1, 6].
    pub fn clamped(raw: u8) -> Self {
        Self(raw.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Clamp an arbitrary raw value into the preview range [1, 10].
    pub fn clamped_preview(raw: u8) -> Self {
        Self(raw.clamp(Self::MIN.0, Self::PREVIEW_MAX.0))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for the display-only preview tiers (7–10).
    pub const fn is_preview(self) -> bool {
        self.0 > Self::MAX.0
    }
}

impl fmt::Display for DisplayTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Highest tier this hero has unlocked.
///
/// Awakened heroes and five-plus-star heroes sit at tier 6; below that each
/// star unlocks the next look. Monotonic non-decreasing in both stars and
/// awakening level.
pub fn unlocked_tier(hero: &Hero) -> DisplayTier {
    let stars = hero.stars_clamped();
    if hero.awakening_level > 0 || stars >= 5 {
        DisplayTier::MAX
    } else {
        DisplayTier((stars + 1).clamp(1, 5))
    }
}

/// Clamp a caller-requested tier down to the hero's unlocked maximum.
///
/// Requests at or below the unlocked tier pass through unchanged; requests
/// above it are lowered, never raised.
pub fn effective_tier(hero: &Hero, requested: DisplayTier) -> DisplayTier {
    let unlocked = unlocked_tier(hero);
    DisplayTier(requested.get().min(unlocked.get()).max(DisplayTier::MIN.get()))
}

/// Resolve the artwork URL for a tier.
///
/// The tier is clamped into the art range [1, 6] before lookup, so preview
/// tiers resolve to the tier-6 art. Empty or whitespace-only URLs are treated
/// as absent.
pub fn resolve_tier_art(data: &HeroData, tier: DisplayTier) -> Option<&str> {
    let key = DisplayTier::clamped(tier.get()).get().to_string();
    data.ascension_images
        .get(&key)
        .map(String::as_str)
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            data.image_url
                .as_deref()
                .filter(|url| !url.trim().is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::{HeroDataId, HeroId, Rarity};
    use std::collections::BTreeMap;

    fn hero(stars: u8, awakening_level: u32) -> Hero {
        Hero {
            id: HeroId(1),
            hero_data_id: HeroDataId(1),
            stars,
            awakening_level,
            affinity_level: 0,
            current_hp: None,
            current_atk: None,
            current_def: None,
        }
    }

    fn data(images: &[(&str, &str)], image_url: Option<&str>) -> HeroData {
        HeroData {
            id: HeroDataId(1),
            name: "Seraphine".into(),
            rarity: Rarity::Ssr,
            image_url: image_url.map(String::from),
            ascension_images: images
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            base_hp: 1000,
            base_atk: 100,
            base_def: 50,
            base_speed: 10,
        }
    }

    #[test]
    fn unlocked_tier_matches_star_ladder() {
        assert_eq!(unlocked_tier(&hero(0, 0)), DisplayTier::MIN);
        assert_eq!(unlocked_tier(&hero(4, 0)).get(), 5);
        assert_eq!(unlocked_tier(&hero(5, 0)), DisplayTier::MAX);
        assert_eq!(unlocked_tier(&hero(0, 1)), DisplayTier::MAX);
    }

    #[test]
    fn unlocked_tier_is_monotonic_and_in_range() {
        for awakening in 0..3u32 {
            let mut prev = DisplayTier::MIN;
            for stars in 0..=6u8 {
                let tier = unlocked_tier(&hero(stars, awakening));
                assert!(tier >= DisplayTier::MIN && tier <= DisplayTier::MAX);
                assert!(tier >= prev, "tier decreased at stars={stars}");
                prev = tier;
            }
        }
        // Raising awakening never lowers the tier either.
        for stars in 0..=6u8 {
            assert!(unlocked_tier(&hero(stars, 1)) >= unlocked_tier(&hero(stars, 0)));
        }
    }

    #[test]
    fn unlocked_tier_clamps_wild_star_counts() {
        assert_eq!(unlocked_tier(&hero(250, 0)), DisplayTier::MAX);
    }

    #[test]
    fn effective_tier_never_exceeds_unlocked() {
        let h = hero(2, 0); // unlocked tier 3
        assert_eq!(effective_tier(&h, DisplayTier::clamped(2)).get(), 2);
        assert_eq!(effective_tier(&h, DisplayTier::clamped(3)).get(), 3);
        assert_eq!(effective_tier(&h, DisplayTier::clamped(6)).get(), 3);
    }

    #[test]
    fn tier_art_prefers_exact_tier_match() {
        let d = data(&[("3", "http://x/img3.png")], Some("http://x/base.png"));
        assert_eq!(
            resolve_tier_art(&d, DisplayTier::clamped(3)),
            Some("http://x/img3.png")
        );
    }

    #[test]
    fn tier_art_clamps_out_of_range_lookups() {
        let d = data(&[("6", "http://x/img6.png")], None);
        // Preview tier 7 clamps to the tier-6 key, not an out-of-bounds key.
        assert_eq!(
            resolve_tier_art(&d, DisplayTier::clamped_preview(7)),
            Some("http://x/img6.png")
        );
    }

    #[test]
    fn tier_art_falls_back_to_generic_then_none() {
        let with_base = data(&[], Some("http://x/base.png"));
        assert_eq!(
            resolve_tier_art(&with_base, DisplayTier::MIN),
            Some("http://x/base.png")
        );

        let empty_urls = data(&[("1", "   ")], Some(""));
        assert_eq!(resolve_tier_art(&empty_urls, DisplayTier::MIN), None);
    }
}
