//! Handler for the `export` command.

use crate::error::Result;
use crate::service::export;
use crate::store::TradeStore;

use super::{open_journal, output, ExportArgs};

pub fn execute(args: &ExportArgs) -> Result<()> {
    let (_, store) = open_journal(&args.config)?;

    let trades = store.list_all()?;

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            export::write_csv(file, &trades)?;
            output::note(&format!(
                "Exported {} trades to {}",
                trades.len(),
                path.display()
            ));
        }
        None => export::write_csv(std::io::stdout().lock(), &trades)?,
    }
    Ok(())
}
