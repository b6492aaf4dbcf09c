//! Tradelog - discipline-tracking trading journal.
//!
//! Records trades against a fixed five-rule checklist in a local SQLite
//! database and reports on them: a filterable history view, summary
//! statistics with an equity curve, and CSV export.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files and logging setup
//! - [`domain`] - Trade records, the rule checklist, and input coercion
//! - [`db`] - Diesel/SQLite connection pool and embedded migrations
//! - [`store`] - The trade store trait with SQLite and in-memory backends
//! - [`service`] - Aggregation, filtering, CSV export, screenshot storage
//! - [`cli`] - Command-line surface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use tradelog::db;
//! use tradelog::service::stats;
//! use tradelog::store::{SqliteTradeStore, TradeStore};
//!
//! # fn main() -> tradelog::error::Result<()> {
//! let pool = db::create_pool("journal.db")?;
//! db::run_migrations(&pool)?;
//!
//! let store = SqliteTradeStore::new(pool);
//! let summary = stats::summarize(&store.list_all()?);
//! println!("win rate: {:.1}%", summary.win_rate);
//! # Ok(()) }
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;
