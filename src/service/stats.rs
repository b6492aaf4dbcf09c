//! Statistics aggregation over the full journal.
//!
//! Recomputed from scratch on every view. With at most a few thousand
//! manually entered rows there is nothing worth caching.

use serde::Serialize;

use crate::domain::{TradeRecord, RULES};

/// One point of the cumulative profit series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityPoint {
    pub date: String,
    pub cumulative: f64,
}

/// Summary statistics for the whole journal.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub total: usize,
    /// Wins over total, as a percentage. 0 for an empty journal.
    pub win_rate: f64,
    /// Mean profit over winning trades; 0 when there are none.
    pub avg_win: f64,
    /// Mean profit over losing trades (negative); 0 when there are none.
    pub avg_loss: f64,
    /// Label of the rule marked true most often. The historical name is
    /// kept even though the computation counts "marked", not "broken".
    pub most_broken_rule: &'static str,
    /// Running profit sum in store iteration order, not sorted by date.
    pub equity_curve: Vec<EquityPoint>,
}

/// Compute the full statistics snapshot.
#[must_use]
pub fn summarize(trades: &[TradeRecord]) -> StatsSummary {
    let total = trades.len();

    let wins: Vec<f64> = trades
        .iter()
        .map(|t| t.profit_percent)
        .filter(|p| *p > 0.0)
        .collect();
    let losses: Vec<f64> = trades
        .iter()
        .map(|t| t.profit_percent)
        .filter(|p| *p < 0.0)
        .collect();

    let win_rate = if total == 0 {
        0.0
    } else {
        wins.len() as f64 / total as f64 * 100.0
    };
    let avg_win = if wins.is_empty() {
        0.0
    } else {
        wins.iter().sum::<f64>() / wins.len() as f64
    };
    let avg_loss = if losses.is_empty() {
        0.0
    } else {
        losses.iter().sum::<f64>() / losses.len() as f64
    };

    let mut rule_counts = [0usize; 5];
    for trade in trades {
        for (slot, flag) in rule_counts.iter_mut().zip(trade.checklist.flags()) {
            *slot += usize::from(flag);
        }
    }
    // Ties (and an empty journal) resolve to the first rule in declared order.
    let mut top = 0;
    for (index, count) in rule_counts.iter().enumerate() {
        if *count > rule_counts[top] {
            top = index;
        }
    }
    let most_broken_rule = RULES[top].1;

    let mut cumulative = 0.0;
    let equity_curve = trades
        .iter()
        .map(|trade| {
            cumulative += trade.profit_percent;
            EquityPoint {
                date: trade.date.clone(),
                cumulative,
            }
        })
        .collect();

    StatsSummary {
        total,
        win_rate,
        avg_win,
        avg_loss,
        most_broken_rule,
        equity_curve,
    }
}
