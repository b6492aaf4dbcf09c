//! History view filtering.

use crate::domain::TradeRecord;

/// Win/loss side of the history filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeFilter {
    /// Keep trades with positive profit.
    Winning,
    /// Keep trades with negative profit.
    Losing,
}

/// Composable predicate over the history view.
///
/// All set conditions must hold (logical AND). An unset or empty strategy
/// filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct TradeFilter {
    pub outcome: Option<OutcomeFilter>,
    pub strategy: Option<String>,
}

impl TradeFilter {
    #[must_use]
    pub fn matches(&self, trade: &TradeRecord) -> bool {
        match self.outcome {
            Some(OutcomeFilter::Winning) if trade.profit_percent <= 0.0 => return false,
            Some(OutcomeFilter::Losing) if trade.profit_percent >= 0.0 => return false,
            _ => {}
        }

        match self.strategy.as_deref() {
            Some(needle) if !needle.is_empty() => trade
                .strategy
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}
