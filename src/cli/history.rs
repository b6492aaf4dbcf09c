//! Handler for the `history` command.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::{Outcome, TradeRecord};
use crate::error::{Error, Result};
use crate::service::filter::{OutcomeFilter, TradeFilter};
use crate::store::TradeStore;

use super::{open_journal, output, HistoryArgs};

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Type")]
    direction: String,
    #[tabled(rename = "P/L %")]
    profit: String,
    #[tabled(rename = "Win/Loss")]
    outcome: String,
    #[tabled(rename = "Strategy")]
    strategy: String,
}

fn outcome_cell(trade: &TradeRecord) -> String {
    match trade.outcome() {
        Outcome::Win => "Win".green().to_string(),
        Outcome::Loss => "Loss".red().to_string(),
        Outcome::Breakeven => "Breakeven".dimmed().to_string(),
    }
}

pub fn execute(args: &HistoryArgs) -> Result<()> {
    let (_, store) = open_journal(&args.config)?;

    let filter = TradeFilter {
        outcome: if args.winning {
            Some(OutcomeFilter::Winning)
        } else if args.losing {
            Some(OutcomeFilter::Losing)
        } else {
            None
        },
        strategy: args.strategy.clone(),
    };

    let trades: Vec<TradeRecord> = store
        .list_all()?
        .into_iter()
        .filter(|trade| filter.matches(trade))
        .collect();

    if args.json {
        let json =
            serde_json::to_string_pretty(&trades).map_err(|e| Error::Parse(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    if trades.is_empty() {
        output::note("No trades match.");
        return Ok(());
    }

    let rows: Vec<HistoryRow> = trades
        .iter()
        .map(|trade| HistoryRow {
            id: trade.id,
            date: trade.date.clone(),
            pair: trade.pair.clone(),
            direction: trade.direction.to_string(),
            profit: format!("{:.2}%", trade.profit_percent),
            outcome: outcome_cell(trade),
            strategy: trade.strategy.clone(),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::sharp()));
    Ok(())
}
