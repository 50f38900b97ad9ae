//! Store catalog and entitlement types.

use std::fmt;

use devotion_core::HeroDataId;
use serde::{Deserialize, Serialize};

/// Store product identifier, e.g. `cinematic.seraphine`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an entitlement unlocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementKind {
    /// Premium summon cinematic for one hero; also grants the small display
    /// stat bonus on that hero's card.
    CinematicSummon,
}

/// An owned entitlement, scoped to a specific hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntitlementKey {
    pub kind: EntitlementKind,
    pub hero: HeroDataId,
}

impl EntitlementKey {
    pub fn cinematic(hero: HeroDataId) -> Self {
        Self {
            kind: EntitlementKind::CinematicSummon,
            hero,
        }
    }
}

/// Purchasable item as presented by the storefront.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontProduct {
    pub id: ProductId,
    pub title: String,
    /// Localized price string straight from the store; never parsed.
    pub price_label: String,
    pub grants: EntitlementKey,
}

/// Result of a purchase attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Purchase settled; the entitlement is now owned.
    Completed(EntitlementKey),
    /// User backed out of the store sheet.
    Cancelled,
}
