//! Display formatting for receipts and amounts.
//!
//! Receipt summaries are assembled from validated payloads only; anything
//! that failed the boundary guards gets the generic fallback instead of a
//! crash or a half-rendered list.

use devotion_core::{GachaReceipt, RewardReceipt, SummonOutcome};

/// Rendered "what you got" block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptSummary {
    pub headline: String,
    pub lines: Vec<String>,
}

impl ReceiptSummary {
    /// Generic fallback when the receipt could not be rendered.
    pub fn fallback() -> Self {
        Self {
            headline: "Claimed!".to_string(),
            lines: Vec::new(),
        }
    }
}

/// Group an amount with thin thousands separators, e.g. `12,300`.
pub fn format_amount(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Summary for a generic reward receipt.
pub fn receipt_summary(receipt: &RewardReceipt) -> ReceiptSummary {
    let headline = if receipt.is_replay() {
        "Already claimed".to_string()
    } else {
        "Rewards claimed!".to_string()
    };

    let lines = receipt
        .items
        .iter()
        .filter(|item| item.amount != 0)
        .map(|item| {
            if item.amount > 0 {
                format!("+{} {}", format_amount(item.amount), item.kind)
            } else {
                format!("{} {}", format_amount(item.amount), item.kind)
            }
        })
        .collect();

    ReceiptSummary { headline, lines }
}

/// Summary for a gacha receipt: one line per pull, plus the pity callout.
pub fn gacha_summary(receipt: &GachaReceipt) -> ReceiptSummary {
    let headline = match receipt.pull_count {
        1 => "Summon complete".to_string(),
        n => format!("{n}× summon complete"),
    };

    let mut lines: Vec<String> = receipt
        .results
        .iter()
        .map(|result| match result.outcome {
            SummonOutcome::New => {
                format!("NEW  {} ({})", result.hero_name, result.rarity)
            }
            SummonOutcome::Dupe => {
                let shards = result.shards_granted.unwrap_or(0);
                format!(
                    "{} ({}) - {} shards",
                    result.hero_name,
                    result.rarity,
                    format_amount(shards)
                )
            }
        })
        .collect();

    if receipt.pity_triggered {
        lines.push("Pity triggered: guaranteed drop!".to_string());
    }

    ReceiptSummary { headline, lines }
}
