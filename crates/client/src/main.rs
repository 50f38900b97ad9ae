//! Idle Devotion client binary.
//!
//! Composition root that assembles the client session and runs a headless
//! smoke flow against it: profile, roster derivations, a daily claim, and a
//! summon. Without `DEVOTION_API_URL` everything runs against the in-memory
//! mock server, which makes this binary a self-contained diagnostic for the
//! whole derivation and boundary stack.

use anyhow::Result;
use client_bootstrap::{ClientConfig, SessionBuilder, logging};
use client_core::{InteractionEvent, ReceiptSummary};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging (the guard must outlive the session)
    let session_label = config.session_id.as_deref().unwrap_or("devotion");
    let _guard = logging::setup(session_label, config.log_dir.as_deref())?;

    tracing::info!("Starting Idle Devotion client");
    tracing::info!("User: {}", config.user_id);

    // 3. Build the session (API, store, flags, services)
    let session = SessionBuilder::new(config).build()?;

    // 4. Accent cues are cancelled by any tap for the session's lifetime
    tokio::spawn(session.accents.clone().run());

    // 5. Profile and roster
    let profile = session.profile().await?;
    tracing::info!(
        "Signed in as {} ({} currencies tracked)",
        profile.display_name,
        profile.balances.len()
    );

    let roster = session.roster.load(&session.ctx).await?;
    tracing::info!("Roster: {} heroes, total power {}", roster.heroes.len(), roster.total_power());
    for hero in &roster.heroes {
        tracing::info!(
            "  {} [{}] {} tier {} ({}) power {}",
            hero.name,
            hero.rarity,
            hero.star_label,
            hero.tier,
            hero.tier_suffix,
            hero.power
        );
    }

    // 6. Claim the daily login reward; replays render as already claimed
    let claim = session.claim.claim("daily_login", "daily_login:today").await?;
    report("Claim", &claim);

    // 7. One summon to exercise the gacha receipt path
    let (receipt, summary) = session.summon.summon("banner-eternal-dawn", 1).await?;
    report("Summon", &summary);
    tracing::info!("Pity counter: {} → {}", receipt.pity_before, receipt.pity_after);

    // 8. A tap on the way out cancels any pending accent cues
    session.bus.publish(InteractionEvent::Tap { surface: "exit" });

    tracing::info!("Client shutdown complete");
    Ok(())
}

fn report(label: &str, summary: &ReceiptSummary) {
    tracing::info!("{label}: {}", summary.headline);
    for line in &summary.lines {
        tracing::info!("  {line}");
    }
}
