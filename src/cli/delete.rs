//! Handler for the `delete` command.

use dialoguer::Confirm;
use tracing::info;

use crate::error::Result;
use crate::store::TradeStore;

use super::{open_journal, output, DeleteArgs};

pub fn execute(args: &DeleteArgs) -> Result<()> {
    let (_, store) = open_journal(&args.config)?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete trade #{} permanently?", args.id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("Aborted.");
            return Ok(());
        }
    }

    if store.delete(args.id)? {
        info!(id = args.id, "Trade deleted");
        output::ok(&format!("Trade #{} deleted", args.id));
    } else {
        output::warn(&format!("Trade #{} not found", args.id));
    }
    Ok(())
}
