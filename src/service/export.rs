//! CSV export of the full journal.

use std::io::Write;

use crate::domain::TradeRecord;
use crate::error::Result;

/// Fixed column order matching the table schema.
const HEADER: [&str; 15] = [
    "ID",
    "Date",
    "Pair",
    "Direction",
    "Quantity",
    "Strategy",
    "Waited 4H",
    "Trend Followed",
    "RR OK",
    "Emotional",
    "Followed Plan",
    "Profit%",
    "Notes",
    "Pre Image",
    "Post Image",
];

/// Write every record, header first, one row per trade in store order.
///
/// Checklist flags export as 0/1; absent screenshot paths as empty cells.
/// Quoting of embedded delimiters and newlines is the writer's concern.
pub fn write_csv<W: Write>(writer: W, trades: &[TradeRecord]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;

    for trade in trades {
        let flags = trade.checklist.flags();
        out.write_record([
            trade.id.to_string(),
            trade.date.clone(),
            trade.pair.clone(),
            trade.direction.to_string(),
            trade.quantity.to_string(),
            trade.strategy.clone(),
            i32::from(flags[0]).to_string(),
            i32::from(flags[1]).to_string(),
            i32::from(flags[2]).to_string(),
            i32::from(flags[3]).to_string(),
            i32::from(flags[4]).to_string(),
            trade.profit_percent.to_string(),
            trade.notes.clone(),
            trade.pre_image_path.clone().unwrap_or_default(),
            trade.post_image_path.clone().unwrap_or_default(),
        ])?;
    }

    out.flush()?;
    Ok(())
}
