//! Handler for the `add` command.

use tracing::info;

use crate::domain::{parse_or_zero, Checklist, NewTrade};
use crate::error::Result;
use crate::service::images;
use crate::store::TradeStore;

use super::{open_journal, output, AddArgs};

pub fn execute(args: &AddArgs) -> Result<()> {
    let (config, store) = open_journal(&args.config)?;

    let pre_image_path = args
        .pre_image
        .as_deref()
        .map(|path| images::attach(path, &config.storage.images_dir))
        .transpose()?;
    let post_image_path = args
        .post_image
        .as_deref()
        .map(|path| images::attach(path, &config.storage.images_dir))
        .transpose()?;

    let trade = NewTrade {
        date: args
            .date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
        pair: args.pair.clone(),
        direction: args.direction,
        quantity: parse_or_zero(&args.quantity),
        strategy: args.strategy.clone(),
        checklist: Checklist {
            waited_4h: args.waited_4h,
            trend_followed: args.trend_followed,
            rr_ok: args.rr_ok,
            emotional: args.emotional,
            followed_plan: args.followed_plan,
        },
        profit_percent: parse_or_zero(&args.profit),
        notes: args.notes.clone(),
        pre_image_path,
        post_image_path,
    };

    let id = store.create(&trade)?;
    info!(id, pair = %trade.pair, "Trade saved");
    output::ok(&format!("Trade #{id} saved"));
    Ok(())
}
