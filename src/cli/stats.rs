//! Handler for the `stats` command.

use crate::error::{Error, Result};
use crate::service::stats;
use crate::store::TradeStore;

use super::{open_journal, StatsArgs};

pub fn execute(args: &StatsArgs) -> Result<()> {
    let (_, store) = open_journal(&args.config)?;

    let trades = store.list_all()?;
    let summary = stats::summarize(&trades);

    if args.json {
        let json =
            serde_json::to_string_pretty(&summary).map_err(|e| Error::Parse(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    println!();
    println!("═══════════════════════════════════════════════════");
    println!("  Journal Statistics");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("    Total Trades:     {:>8}", summary.total);
    println!("    Win Rate:         {:>7.1}%", summary.win_rate);
    println!("    Avg Win:          {:>7.2}%", summary.avg_win);
    println!("    Avg Loss:         {:>7.2}%", summary.avg_loss);
    println!("    Most Broken Rule: {}", summary.most_broken_rule);
    println!();

    if !summary.equity_curve.is_empty() {
        println!("  Equity Curve");
        println!("  ─────────────────────────────────────────────────");
        println!("    {:12} {:>12}", "Date", "Cum P/L %");
        for point in &summary.equity_curve {
            println!("    {:12} {:>12.2}", point.date, point.cumulative);
        }
        println!();
    }

    Ok(())
}
