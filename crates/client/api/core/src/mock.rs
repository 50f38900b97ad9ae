//! Mock game server for testing and offline runs.
//!
//! Simulates the authoritative backend in-memory: balances, pity, claims,
//! and promotions follow the server rules, but gacha picks cycle the seeded
//! catalog deterministically instead of rolling RNG. The client stays
//! RNG-free either way.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use devotion_core::{
    GachaReceipt, GachaResult, Hero, HeroData, HeroDataId, HeroId, Rarity, RewardItem,
    RewardReceipt, SummonOutcome,
};

use crate::traits::{
    ApiError, ClaimApi, GameServerApi, ProfileApi, ProgressionApi, Result, SummonApi,
};
use crate::types::{ClaimRequest, OwnedHero, PlayerProfile, PromotionResult, SummonRequest};

/// Gem cost per pull.
pub const SUMMON_COST: i64 = 150;

/// Pity threshold: a top-rarity hero is guaranteed on the pull that reaches it.
pub const PITY_THRESHOLD: u32 = 10;

/// Shards granted for a duplicate pull.
pub const DUPE_SHARDS: i64 = 50;

/// Shard cost for one star promotion.
pub const PROMOTE_COST: i64 = 50;

/// Shard cost for one awakening level.
pub const AWAKEN_COST: i64 = 100;

struct MockState {
    profile: PlayerProfile,
    catalog: Vec<HeroData>,
    roster: HashMap<HeroId, Hero>,
    claims: HashMap<String, RewardReceipt>,
    summons: HashMap<String, GachaReceipt>,
    pity: u32,
    next_hero_id: u64,
    summon_seq: usize,
}

/// In-memory stand-in for the game server.
#[derive(Clone)]
pub struct MockGameServer {
    state: Arc<Mutex<MockState>>,
}

impl MockGameServer {
    pub fn new() -> Self {
        let catalog = seed_catalog();
        let mut roster = HashMap::new();
        // Every account starts with one common hero.
        roster.insert(
            HeroId(1),
            Hero {
                id: HeroId(1),
                hero_data_id: catalog[0].id,
                stars: 1,
                awakening_level: 0,
                affinity_level: 2,
                current_hp: None,
                current_atk: None,
                current_def: None,
            },
        );

        let profile = PlayerProfile {
            user_id: "mock-user".into(),
            display_name: "Wanderer".into(),
            balances: BTreeMap::from([
                ("gold".into(), 10_000),
                ("gems".into(), 3_000),
                ("shards".into(), 200),
            ]),
            pity: BTreeMap::new(),
        };

        Self {
            state: Arc::new(Mutex::new(MockState {
                profile,
                catalog,
                roster,
                claims: HashMap::new(),
                summons: HashMap::new(),
                pity: 0,
                next_hero_id: 2,
                summon_seq: 0,
            })),
        }
    }

    fn spend(
        state: &mut MockState,
        currency: &str,
        amount: i64,
    ) -> std::result::Result<(), ApiError> {
        let available = state
            .profile
            .balances
            .get(currency)
            .copied()
            .unwrap_or(0);
        if available < amount {
            return Err(ApiError::InsufficientFunds {
                currency: currency.to_string(),
                required: amount,
                available,
            });
        }
        state
            .profile
            .balances
            .insert(currency.to_string(), available - amount);
        Ok(())
    }

    fn grant(state: &mut MockState, currency: &str, amount: i64) {
        let entry = state.profile.balances.entry(currency.to_string()).or_insert(0);
        *entry += amount;
    }
}

impl Default for MockGameServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileApi for MockGameServer {
    async fn fetch_profile(&self) -> Result<PlayerProfile> {
        Ok(self.state.lock().unwrap().profile.clone())
    }

    async fn fetch_roster(&self) -> Result<Vec<OwnedHero>> {
        let state = self.state.lock().unwrap();
        let mut roster: Vec<OwnedHero> = state
            .roster
            .values()
            .filter_map(|hero| {
                let data = state
                    .catalog
                    .iter()
                    .find(|d| d.id == hero.hero_data_id)?
                    .clone();
                Some(OwnedHero {
                    hero: hero.clone(),
                    data,
                })
            })
            .collect();
        roster.sort_by_key(|owned| owned.hero.id);
        Ok(roster)
    }
}

#[async_trait]
impl SummonApi for MockGameServer {
    async fn summon(&self, request: SummonRequest) -> Result<GachaReceipt> {
        if request.pull_count == 0 {
            return Err(ApiError::Rejected("pull count must be at least 1".into()));
        }

        let mut state = self.state.lock().unwrap();

        // Idempotent replay: same request id, same receipt.
        if let Some(receipt) = state.summons.get(&request.request_id) {
            tracing::debug!(request_id = %request.request_id, "replaying summon receipt");
            return Ok(receipt.clone());
        }

        Self::spend(&mut state, "gems", SUMMON_COST * i64::from(request.pull_count))?;

        let pity_before = state.pity;
        let mut pity_triggered = false;
        let mut results = Vec::with_capacity(request.pull_count as usize);
        let mut shards_total = 0;

        for _ in 0..request.pull_count {
            state.pity += 1;
            let forced = state.pity >= PITY_THRESHOLD;

            let data = if forced {
                pity_triggered = true;
                state.pity = 0;
                state
                    .catalog
                    .iter()
                    .find(|d| d.rarity >= Rarity::Ssr)
                    .expect("catalog seeds at least one top-rarity hero")
                    .clone()
            } else {
                let idx = state.summon_seq % state.catalog.len();
                state.summon_seq += 1;
                state.catalog[idx].clone()
            };

            let already_owned = state.roster.values().any(|h| h.hero_data_id == data.id);
            let outcome = if already_owned {
                shards_total += DUPE_SHARDS;
                SummonOutcome::Dupe
            } else {
                let id = HeroId(state.next_hero_id);
                state.next_hero_id += 1;
                state.roster.insert(
                    id,
                    Hero {
                        id,
                        hero_data_id: data.id,
                        stars: 0,
                        awakening_level: 0,
                        affinity_level: 0,
                        current_hp: None,
                        current_atk: None,
                        current_def: None,
                    },
                );
                SummonOutcome::New
            };

            results.push(GachaResult {
                rarity: data.rarity,
                hero_data_id: data.id,
                hero_name: data.name.clone(),
                outcome,
                shards_granted: (outcome == SummonOutcome::Dupe).then_some(DUPE_SHARDS),
                is_filler: (data.rarity <= Rarity::R).then_some(true),
            });
        }

        let mut items = Vec::new();
        if shards_total > 0 {
            Self::grant(&mut state, "shards", shards_total);
            items.push(RewardItem {
                kind: "shards".into(),
                amount: shards_total,
            });
        }

        let pity_after = state.pity;
        state
            .profile
            .pity
            .insert(request.banner_id.clone(), pity_after);

        let receipt = GachaReceipt {
            source: "summon".into(),
            source_id: request.request_id.clone(),
            banner_id: request.banner_id,
            pull_count: request.pull_count,
            pity_before,
            pity_after,
            pity_triggered,
            results,
            items,
            balances: state.profile.balances.clone(),
        };

        state
            .summons
            .insert(request.request_id, receipt.clone());
        Ok(receipt)
    }
}

#[async_trait]
impl ClaimApi for MockGameServer {
    async fn claim(&self, request: ClaimRequest) -> Result<RewardReceipt> {
        if request.source.trim().is_empty() || request.source_id.trim().is_empty() {
            return Err(ApiError::Rejected("claim requires source and source id".into()));
        }

        let mut state = self.state.lock().unwrap();

        if let Some(original) = state.claims.get(&request.source_id) {
            tracing::debug!(source_id = %request.source_id, "replaying claim receipt");
            let mut replay = original.clone();
            replay.already_claimed = Some(true);
            return Ok(replay);
        }

        let items = match request.source.as_str() {
            "daily_login" => vec![
                RewardItem {
                    kind: "gold".into(),
                    amount: 300,
                },
                RewardItem {
                    kind: "gems".into(),
                    amount: 50,
                },
            ],
            _ => vec![RewardItem {
                kind: "gold".into(),
                amount: 100,
            }],
        };
        for item in &items {
            Self::grant(&mut state, &item.kind, item.amount);
        }

        let receipt = RewardReceipt {
            source: request.source,
            source_id: request.source_id.clone(),
            items,
            balances: state.profile.balances.clone(),
            already_claimed: None,
        };

        state.claims.insert(request.source_id, receipt.clone());
        Ok(receipt)
    }
}

#[async_trait]
impl ProgressionApi for MockGameServer {
    async fn promote_star(&self, hero: HeroId) -> Result<PromotionResult> {
        let mut state = self.state.lock().unwrap();

        let stars = state
            .roster
            .get(&hero)
            .ok_or_else(|| ApiError::NotFound(hero.to_string()))?
            .stars;
        if stars >= Hero::MAX_STARS {
            return Err(ApiError::Rejected("hero is already at six stars".into()));
        }

        Self::spend(&mut state, "shards", PROMOTE_COST)?;
        let updated = {
            let entry = state.roster.get_mut(&hero).expect("checked above");
            entry.stars += 1;
            entry.clone()
        };

        let receipt = RewardReceipt {
            source: "star_promotion".into(),
            source_id: format!("promote:{}:{}", hero.0, updated.stars),
            items: vec![RewardItem {
                kind: "shards".into(),
                amount: -PROMOTE_COST,
            }],
            balances: state.profile.balances.clone(),
            already_claimed: None,
        };

        Ok(PromotionResult {
            hero: updated,
            receipt,
        })
    }

    async fn awaken(&self, hero: HeroId) -> Result<PromotionResult> {
        let mut state = self.state.lock().unwrap();

        let current = state
            .roster
            .get(&hero)
            .ok_or_else(|| ApiError::NotFound(hero.to_string()))?;
        if current.stars < Hero::MAX_STARS {
            return Err(ApiError::Rejected(
                "awakening requires a six-star hero".into(),
            ));
        }

        Self::spend(&mut state, "shards", AWAKEN_COST)?;
        let updated = {
            let entry = state.roster.get_mut(&hero).expect("checked above");
            entry.awakening_level += 1;
            entry.clone()
        };

        let receipt = RewardReceipt {
            source: "awakening".into(),
            source_id: format!("awaken:{}:{}", hero.0, updated.awakening_level),
            items: vec![RewardItem {
                kind: "shards".into(),
                amount: -AWAKEN_COST,
            }],
            balances: state.profile.balances.clone(),
            already_claimed: None,
        };

        Ok(PromotionResult {
            hero: updated,
            receipt,
        })
    }
}

impl GameServerApi for MockGameServer {
    fn name(&self) -> &str {
        "mock"
    }

    fn environment(&self) -> &str {
        "in-memory"
    }
}

fn seed_catalog() -> Vec<HeroData> {
    let entry = |id: u64, name: &str, rarity, hp, atk, def, speed| HeroData {
        id: HeroDataId(id),
        name: name.to_string(),
        rarity,
        image_url: Some(format!("https://cdn.example.com/heroes/{id}/base.png")),
        ascension_images: (1..=6)
            .map(|tier| {
                (
                    tier.to_string(),
                    format!("https://cdn.example.com/heroes/{id}/tier{tier}.png"),
                )
            })
            .collect(),
        base_hp: hp,
        base_atk: atk,
        base_def: def,
        base_speed: speed,
    };

    vec![
        entry(10, "Bryn", Rarity::R, 800, 70, 40, 9),
        entry(11, "Oren", Rarity::N, 600, 50, 30, 8),
        entry(12, "Karis", Rarity::Sr, 1_000, 100, 50, 10),
        entry(13, "Maelis", Rarity::Ssr, 1_400, 150, 70, 11),
        entry(14, "Seraphine", Rarity::Ur, 1_900, 210, 95, 12),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn summon_is_idempotent_per_request_id() {
        let server = MockGameServer::new();
        let request = SummonRequest {
            banner_id: "banner-1".into(),
            pull_count: 2,
            request_id: "req-1".into(),
        };

        let first = server.summon(request.clone()).await.unwrap();
        let gems_after_first = server.fetch_profile().await.unwrap().balances["gems"];

        let replay = server.summon(request).await.unwrap();
        let gems_after_replay = server.fetch_profile().await.unwrap().balances["gems"];

        assert_eq!(first, replay);
        assert_eq!(gems_after_first, gems_after_replay);
    }

    #[tokio::test]
    async fn summons_fail_without_gems() {
        let server = MockGameServer::new();
        // 3000 seed gems cover exactly 20 pulls.
        let err = server
            .summon(SummonRequest {
                banner_id: "banner-1".into(),
                pull_count: 21,
                request_id: "req-broke".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InsufficientFunds { .. }));
    }
}
