//! Hero data model as reported by the game server.
//!
//! Two halves: [`Hero`] is the per-player owned instance (stars, awakening,
//! affinity, tracked combat values) and [`HeroData`] is the shared catalog
//! entry (name, rarity, art, base stats). Both are server-owned; the client
//! reads them from profile/roster payloads and never writes them back.

use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for an owned hero instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HeroId(pub u64);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hero#{}", self.0)
    }
}

/// Unique identifier for a hero catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HeroDataId(pub u64);

impl fmt::Display for HeroDataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data#{}", self.0)
    }
}

/// Hero rarity band, from common pulls to limited banner tops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    #[strum(serialize = "N")]
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    N,
    #[strum(serialize = "R")]
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    R,
    #[strum(serialize = "SR")]
    #[cfg_attr(feature = "serde", serde(rename = "SR"))]
    Sr,
    #[strum(serialize = "SSR")]
    #[cfg_attr(feature = "serde", serde(rename = "SSR"))]
    Ssr,
    #[strum(serialize = "SSR+")]
    #[cfg_attr(feature = "serde", serde(rename = "SSR+"))]
    SsrPlus,
    #[strum(serialize = "UR")]
    #[cfg_attr(feature = "serde", serde(rename = "UR"))]
    Ur,
    #[strum(serialize = "UR+")]
    #[cfg_attr(feature = "serde", serde(rename = "UR+"))]
    UrPlus,
}

/// Per-player hero instance state.
///
/// All fields are server-authoritative: star promotion, awakening, and
/// affinity changes arrive as fresh payloads after the corresponding server
/// call. The derivation functions clamp out-of-range values instead of
/// rejecting them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub id: HeroId,
    pub hero_data_id: HeroDataId,
    /// Star rank, 0–6. Clamped on use.
    pub stars: u8,
    /// Awakening rank past six stars. Any non-zero value unlocks the top tier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub awakening_level: u32,
    /// Bond level driving the cosmetic motion ladder.
    #[cfg_attr(feature = "serde", serde(default))]
    pub affinity_level: u32,
    /// Server-tracked post-upgrade values. Preferred over catalog base stats
    /// when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_hp: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_atk: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_def: Option<i64>,
}

impl Hero {
    /// Highest star rank the server will ever report.
    pub const MAX_STARS: u8 = 6;

    /// Star rank clamped into the documented 0–6 range.
    pub fn stars_clamped(&self) -> u8 {
        self.stars.min(Self::MAX_STARS)
    }
}

/// Shared catalog entry for a hero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroData {
    pub id: HeroDataId,
    pub name: String,
    pub rarity: Rarity,
    /// Generic portrait, used when no tier-specific art exists.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_url: Option<String>,
    /// Tier-specific ascension art keyed by tier number as a string ("1".."6").
    #[cfg_attr(feature = "serde", serde(default))]
    pub ascension_images: BTreeMap<String, String>,
    pub base_hp: i64,
    pub base_atk: i64,
    pub base_def: i64,
    pub base_speed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(stars: u8) -> Hero {
        Hero {
            id: HeroId(1),
            hero_data_id: HeroDataId(10),
            stars,
            awakening_level: 0,
            affinity_level: 0,
            current_hp: None,
            current_atk: None,
            current_def: None,
        }
    }

    #[test]
    fn stars_clamped_caps_at_six() {
        assert_eq!(hero(0).stars_clamped(), 0);
        assert_eq!(hero(6).stars_clamped(), 6);
        assert_eq!(hero(200).stars_clamped(), 6);
    }

    #[test]
    fn rarity_round_trips_through_strum() {
        use std::str::FromStr;

        for (raw, rarity) in [
            ("N", Rarity::N),
            ("SSR+", Rarity::SsrPlus),
            ("UR+", Rarity::UrPlus),
        ] {
            assert_eq!(rarity.to_string(), raw);
            assert_eq!(Rarity::from_str(raw).unwrap(), rarity);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn hero_decodes_from_wire_payload() {
        let hero: Hero = serde_json::from_str(
            r#"{
                "id": 7,
                "hero_data_id": 42,
                "stars": 3,
                "awakening_level": 0,
                "affinity_level": 2,
                "current_hp": 1200
            }"#,
        )
        .unwrap();
        assert_eq!(hero.id, HeroId(7));
        assert_eq!(hero.stars, 3);
        assert_eq!(hero.current_hp, Some(1200));
        assert_eq!(hero.current_atk, None);
    }
}
