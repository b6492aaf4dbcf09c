//! Handler for the `edit` command.

use tracing::info;

use crate::domain::{parse_or_zero, TradePatch};
use crate::error::Result;
use crate::store::TradeStore;

use super::{open_journal, output, EditArgs};

pub fn execute(args: &EditArgs) -> Result<()> {
    let (_, store) = open_journal(&args.config)?;

    let Some(current) = store.get(args.id)? else {
        output::warn(&format!("Trade #{} not found", args.id));
        return Ok(());
    };

    // Unset flags keep the stored value. Checklist flags and screenshots
    // are not editable here.
    let patch = TradePatch {
        date: args.date.clone().unwrap_or(current.date),
        pair: args.pair.clone().unwrap_or(current.pair),
        direction: args.direction.unwrap_or(current.direction),
        quantity: args
            .quantity
            .as_deref()
            .map(parse_or_zero)
            .unwrap_or(current.quantity),
        strategy: args.strategy.clone().unwrap_or(current.strategy),
        profit_percent: args
            .profit
            .as_deref()
            .map(parse_or_zero)
            .unwrap_or(current.profit_percent),
        notes: args.notes.clone().unwrap_or(current.notes),
    };

    if store.update(args.id, &patch)? {
        info!(id = args.id, "Trade updated");
        output::ok(&format!("Trade #{} updated", args.id));
    } else {
        output::warn(&format!("Trade #{} not found", args.id));
    }
    Ok(())
}
