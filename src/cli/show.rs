//! Handler for the `show` command.

use crate::domain::RULES;
use crate::error::Result;
use crate::service::images;
use crate::store::TradeStore;

use super::{open_journal, output, ShowArgs};

pub fn execute(args: &ShowArgs) -> Result<()> {
    let (_, store) = open_journal(&args.config)?;

    let Some(trade) = store.get(args.id)? else {
        output::warn(&format!("Trade #{} not found", args.id));
        return Ok(());
    };

    output::section(&format!("Trade #{}", trade.id));
    output::key_value("Date", &trade.date);
    output::key_value("Pair", &trade.pair);
    output::key_value("Type", trade.direction);
    output::key_value("Quantity", trade.quantity);
    output::key_value("Strategy", &trade.strategy);
    output::key_value("P/L %", format!("{:.2}%", trade.profit_percent));
    output::key_value("Outcome", trade.outcome().as_str());
    output::key_value("Notes", &trade.notes);

    output::section("Checklist");
    for ((_, label), flag) in RULES.iter().zip(trade.checklist.flags()) {
        println!("  {} {label}", if flag { "✓" } else { "✗" });
    }

    // A stored path whose file has gone missing is skipped, not an error.
    let screenshots: Vec<(&str, &String)> = [
        ("Pre-trade", trade.pre_image_path.as_ref()),
        ("Post-trade", trade.post_image_path.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, path)| path.map(|p| (label, p)))
    .filter(|(_, path)| images::is_present(path))
    .collect();

    if !screenshots.is_empty() {
        output::section("Screenshots");
        for (label, path) in screenshots {
            output::key_value(label, path);
        }
    }

    Ok(())
}
