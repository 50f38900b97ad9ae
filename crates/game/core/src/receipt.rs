//! Server-issued reward receipts.
//!
//! A receipt is the server's idempotent record of exactly what a source
//! action granted: the client renders `items` and `balances` verbatim and
//! never recomputes them. `source_id` doubles as the idempotency key; a
//! replayed claim comes back with `already_claimed` set.

use std::collections::BTreeMap;

/// Validation failures for receipt payloads.
///
/// Raised by the typed `validate` methods; the boundary-level structural
/// guards live in the API crate and never construct these.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt is missing a source")]
    MissingSource,

    #[error("receipt is missing a source id")]
    MissingSourceId,

    #[error("gacha receipt is missing a banner id")]
    MissingBannerId,

    #[error("gacha receipt has an invalid pull count: {0}")]
    InvalidPullCount(u32),

    #[error("gacha receipt has no results")]
    EmptyResults,

    #[error("gacha receipt pity regressed: before {before}, after {after}")]
    PityRegressed { before: u32, after: u32 },
}

/// One granted item line, e.g. 300 gold or 50 shards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardItem {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub amount: i64,
}

/// Generic reward receipt for claims, mail, and event payouts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RewardReceipt {
    /// Action family that produced this receipt, e.g. `"daily_login"`.
    pub source: String,
    /// Idempotency key for the specific action instance.
    pub source_id: String,
    pub items: Vec<RewardItem>,
    /// Post-grant currency balances, keyed by currency name.
    pub balances: BTreeMap<String, i64>,
    /// Set by the server when the same `source_id` was claimed before.
    #[cfg_attr(feature = "serde", serde(default))]
    pub already_claimed: Option<bool>,
}

impl RewardReceipt {
    /// True when the server flagged this as a replayed claim.
    pub fn is_replay(&self) -> bool {
        self.already_claimed.unwrap_or(false)
    }

    /// Typed invariant check, used after structural decoding.
    pub fn validate(&self) -> Result<(), ReceiptError> {
        if self.source.trim().is_empty() {
            return Err(ReceiptError::MissingSource);
        }
        if self.source_id.trim().is_empty() {
            return Err(ReceiptError::MissingSourceId);
        }
        Ok(())
    }
}

/// Whether a gacha result was a first copy or a duplicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SummonOutcome {
    New,
    Dupe,
}

/// One pulled hero within a gacha receipt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GachaResult {
    pub rarity: crate::hero::Rarity,
    pub hero_data_id: crate::hero::HeroDataId,
    pub hero_name: String,
    pub outcome: SummonOutcome,
    /// Shards granted instead of a copy on duplicate pulls.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shards_granted: Option<i64>,
    /// Low-rarity padding in multi-pulls.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_filler: Option<bool>,
}

/// Receipt for a gacha summon, extending the generic receipt with banner and
/// pity accounting. Pity is tracked and enforced server-side; the fields here
/// exist only so the UI can show the counter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GachaReceipt {
    pub source: String,
    pub source_id: String,
    pub banner_id: String,
    pub pull_count: u32,
    pub pity_before: u32,
    pub pity_after: u32,
    pub pity_triggered: bool,
    pub results: Vec<GachaResult>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<RewardItem>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub balances: BTreeMap<String, i64>,
}

impl GachaReceipt {
    /// Typed invariant check, used after structural decoding.
    pub fn validate(&self) -> Result<(), ReceiptError> {
        if self.source.trim().is_empty() {
            return Err(ReceiptError::MissingSource);
        }
        if self.source_id.trim().is_empty() {
            return Err(ReceiptError::MissingSourceId);
        }
        if self.banner_id.trim().is_empty() {
            return Err(ReceiptError::MissingBannerId);
        }
        if self.pull_count == 0 {
            return Err(ReceiptError::InvalidPullCount(self.pull_count));
        }
        if self.results.is_empty() {
            return Err(ReceiptError::EmptyResults);
        }
        // Pity only resets when the server says it triggered.
        if !self.pity_triggered && self.pity_after < self.pity_before {
            return Err(ReceiptError::PityRegressed {
                before: self.pity_before,
                after: self.pity_after,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::{HeroDataId, Rarity};

    fn reward_receipt() -> RewardReceipt {
        RewardReceipt {
            source: "daily_login".into(),
            source_id: "daily_login:2026-08-06".into(),
            items: vec![RewardItem {
                kind: "gold".into(),
                amount: 300,
            }],
            balances: BTreeMap::from([("gold".into(), 12_300)]),
            already_claimed: None,
        }
    }

    fn gacha_receipt() -> GachaReceipt {
        GachaReceipt {
            source: "summon".into(),
            source_id: "req-001".into(),
            banner_id: "banner-eternal-dawn".into(),
            pull_count: 1,
            pity_before: 10,
            pity_after: 11,
            pity_triggered: false,
            results: vec![GachaResult {
                rarity: Rarity::Sr,
                hero_data_id: HeroDataId(4),
                hero_name: "Karis".into(),
                outcome: SummonOutcome::New,
                shards_granted: None,
                is_filler: None,
            }],
            items: Vec::new(),
            balances: BTreeMap::new(),
        }
    }

    #[test]
    fn valid_receipts_pass() {
        assert_eq!(reward_receipt().validate(), Ok(()));
        assert_eq!(gacha_receipt().validate(), Ok(()));
    }

    #[test]
    fn blank_identifiers_are_rejected() {
        let mut r = reward_receipt();
        r.source = "  ".into();
        assert_eq!(r.validate(), Err(ReceiptError::MissingSource));

        let mut r = reward_receipt();
        r.source_id = String::new();
        assert_eq!(r.validate(), Err(ReceiptError::MissingSourceId));
    }

    #[test]
    fn gacha_receipt_rejects_degenerate_payloads() {
        let mut r = gacha_receipt();
        r.pull_count = 0;
        assert_eq!(r.validate(), Err(ReceiptError::InvalidPullCount(0)));

        let mut r = gacha_receipt();
        r.results.clear();
        assert_eq!(r.validate(), Err(ReceiptError::EmptyResults));

        let mut r = gacha_receipt();
        r.pity_after = 3;
        assert_eq!(
            r.validate(),
            Err(ReceiptError::PityRegressed {
                before: 10,
                after: 3
            })
        );
        // A triggered pity is allowed to reset the counter.
        r.pity_triggered = true;
        assert_eq!(r.validate(), Ok(()));
    }

    #[test]
    fn replay_flag_maps_through() {
        let mut r = reward_receipt();
        assert!(!r.is_replay());
        r.already_claimed = Some(true);
        assert!(r.is_replay());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn receipt_decodes_from_camel_case_wire_payload() {
        let r: RewardReceipt = serde_json::from_str(
            r#"{
                "source": "mail",
                "sourceId": "mail:17",
                "items": [{"type": "gems", "amount": 50}],
                "balances": {"gems": 450},
                "alreadyClaimed": true
            }"#,
        )
        .unwrap();
        assert_eq!(r.items[0].kind, "gems");
        assert!(r.is_replay());
        assert_eq!(r.validate(), Ok(()));
    }
}
