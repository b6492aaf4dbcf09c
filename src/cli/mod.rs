//! Command-line interface definitions.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod history;
pub mod output;
pub mod show;
pub mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::db;
use crate::domain::Direction;
use crate::error::Result;
use crate::store::SqliteTradeStore;

/// Tradelog - discipline-tracking trading journal.
#[derive(Parser, Debug)]
#[command(name = "tradelog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new trade
    Add(AddArgs),

    /// Browse and filter the trade history
    History(HistoryArgs),

    /// Show one trade in full, checklist and screenshots included
    Show(ShowArgs),

    /// Edit an existing trade
    Edit(EditArgs),

    /// Delete a trade permanently
    Delete(DeleteArgs),

    /// Show journal statistics and the equity curve
    Stats(StatsArgs),

    /// Export the full journal as CSV
    Export(ExportArgs),
}

/// Shared argument for commands that need a config path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Trade date (ISO format); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Trading pair / instrument
    #[arg(long)]
    pub pair: String,

    /// Trade type
    #[arg(long, value_enum, default_value = "buy", ignore_case = true)]
    pub direction: Direction,

    /// Quantity / lot size (non-numeric input counts as 0)
    #[arg(long, default_value = "0")]
    pub quantity: String,

    /// Strategy name
    #[arg(long, default_value = "")]
    pub strategy: String,

    /// Waited for 4H candle close
    #[arg(long)]
    pub waited_4h: bool,

    /// Followed trend
    #[arg(long)]
    pub trend_followed: bool,

    /// Proper risk-reward
    #[arg(long)]
    pub rr_ok: bool,

    /// No emotional entry
    #[arg(long)]
    pub emotional: bool,

    /// Entry matched plan
    #[arg(long)]
    pub followed_plan: bool,

    /// Profit/loss percent (non-numeric input counts as 0)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub profit: String,

    /// Free-form notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Pre-trade screenshot to copy into the images directory
    #[arg(long)]
    pub pre_image: Option<PathBuf>,

    /// Post-trade screenshot to copy into the images directory
    #[arg(long)]
    pub post_image: Option<PathBuf>,
}

/// Arguments for the `history` subcommand.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Keep only winning trades
    #[arg(long, conflicts_with = "losing")]
    pub winning: bool,

    /// Keep only losing trades
    #[arg(long)]
    pub losing: bool,

    /// Keep trades whose strategy contains this text (case-insensitive)
    #[arg(long)]
    pub strategy: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Trade id
    pub id: i32,
}

/// Arguments for the `edit` subcommand. Unset flags keep the stored value.
#[derive(Args, Debug)]
pub struct EditArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Trade id
    pub id: i32,

    /// Trade date (ISO format)
    #[arg(long)]
    pub date: Option<String>,

    /// Trading pair / instrument
    #[arg(long)]
    pub pair: Option<String>,

    /// Trade type
    #[arg(long, value_enum, ignore_case = true)]
    pub direction: Option<Direction>,

    /// Quantity / lot size (non-numeric input counts as 0)
    #[arg(long)]
    pub quantity: Option<String>,

    /// Strategy name
    #[arg(long)]
    pub strategy: Option<String>,

    /// Profit/loss percent (non-numeric input counts as 0)
    #[arg(long, allow_negative_numbers = true)]
    pub profit: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for the `delete` subcommand.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Trade id
    pub id: i32,

    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Emit JSON instead of the report
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Write CSV to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Add(args) => add::execute(&args),
        Commands::History(args) => history::execute(&args),
        Commands::Show(args) => show::execute(&args),
        Commands::Edit(args) => edit::execute(&args),
        Commands::Delete(args) => delete::execute(&args),
        Commands::Stats(args) => stats::execute(&args),
        Commands::Export(args) => export::execute(&args),
    }
}

/// Load configuration, wire logging, and open the journal store.
pub(crate) fn open_journal(arg: &ConfigPathArg) -> Result<(Config, SqliteTradeStore)> {
    let config = Config::load_or_default(&arg.config)?;
    config.logging.init();

    let pool = db::create_pool(&config.storage.database_path.to_string_lossy())?;
    db::run_migrations(&pool)?;

    Ok((config, SqliteTradeStore::new(pool)))
}
