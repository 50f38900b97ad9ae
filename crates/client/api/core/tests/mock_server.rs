//! End-to-end flows against the in-memory mock server.

use client_api_core::{
    ClaimRequest, MockGameServer, SummonRequest, mock,
    traits::{ApiError, ClaimApi, GameServerApi, ProfileApi, ProgressionApi, SummonApi},
};
use devotion_core::{Hero, SummonOutcome};

#[tokio::test]
async fn claim_replays_return_the_original_receipt() {
    let server = MockGameServer::new();
    let request = ClaimRequest {
        source: "daily_login".into(),
        source_id: "daily_login:2026-08-06".into(),
    };

    let first = server.claim(request.clone()).await.unwrap();
    assert!(!first.is_replay());
    assert!(first.validate().is_ok());
    let gold_after_first = first.balances["gold"];

    let replay = server.claim(request).await.unwrap();
    assert!(replay.is_replay());
    assert_eq!(replay.items, first.items);
    // The replay must not grant again.
    assert_eq!(replay.balances["gold"], gold_after_first);
    assert_eq!(
        server.fetch_profile().await.unwrap().balances["gold"],
        gold_after_first
    );
}

#[tokio::test]
async fn summon_receipts_validate_and_grow_the_roster() {
    let server = MockGameServer::new();
    let before = server.fetch_roster().await.unwrap().len();

    let receipt = server
        .summon(SummonRequest {
            banner_id: "banner-eternal-dawn".into(),
            pull_count: 3,
            request_id: "req-roster".into(),
        })
        .await
        .unwrap();

    assert!(receipt.validate().is_ok());
    assert_eq!(receipt.results.len(), 3);

    let new_pulls = receipt
        .results
        .iter()
        .filter(|r| r.outcome == SummonOutcome::New)
        .count();
    let after = server.fetch_roster().await.unwrap().len();
    assert_eq!(after, before + new_pulls);

    // Dupes carry shards instead of a copy.
    for result in &receipt.results {
        match result.outcome {
            SummonOutcome::New => assert!(result.shards_granted.is_none()),
            SummonOutcome::Dupe => assert_eq!(result.shards_granted, Some(mock::DUPE_SHARDS)),
        }
    }
}

#[tokio::test]
async fn pity_triggers_at_the_threshold() {
    let server = MockGameServer::new();

    let receipt = server
        .summon(SummonRequest {
            banner_id: "banner-eternal-dawn".into(),
            pull_count: mock::PITY_THRESHOLD,
            request_id: "req-pity".into(),
        })
        .await
        .unwrap();

    assert!(receipt.pity_triggered);
    // The counter resets when pity fires on the final pull.
    assert_eq!(receipt.pity_after, 0);
    assert!(receipt.validate().is_ok());
}

#[tokio::test]
async fn promotion_is_server_driven_and_monotonic() {
    let server = MockGameServer::new();
    let roster = server.fetch_roster().await.unwrap();
    let starter = roster[0].hero.clone();

    let result = server.promote_star(starter.id).await.unwrap();
    assert_eq!(result.hero.stars, starter.stars + 1);
    assert!(result.receipt.validate().is_ok());

    // Promotion spent shards; the receipt reports the authoritative balance.
    let profile = server.fetch_profile().await.unwrap();
    assert_eq!(profile.balances["shards"], result.receipt.balances["shards"]);
}

#[tokio::test]
async fn awakening_requires_six_stars() {
    let server = MockGameServer::new();
    let roster = server.fetch_roster().await.unwrap();
    let starter = roster[0].hero.clone();
    assert!(starter.stars < Hero::MAX_STARS);

    let err = server.awaken(starter.id).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
}

#[tokio::test]
async fn composite_trait_reports_identity() {
    let server = MockGameServer::new();
    assert_eq!(server.name(), "mock");
    assert_eq!(server.environment(), "in-memory");
}
