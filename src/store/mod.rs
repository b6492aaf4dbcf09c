//! Persistence layer with pluggable storage backends.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteTradeStore;

use crate::domain::{NewTrade, TradePatch, TradeRecord};
use crate::error::Result;

/// Durable collection of trade records, queried and mutated synchronously.
///
/// Every operation acquires a scoped connection and releases it on all exit
/// paths. Failures surface to the caller; there is no retry and no rollback
/// beyond the single statement.
pub trait TradeStore {
    /// Persist a new trade and return its assigned id.
    fn create(&self, trade: &NewTrade) -> Result<i32>;

    /// Every record, in insertion order.
    fn list_all(&self) -> Result<Vec<TradeRecord>>;

    /// Point lookup. `None` when the id does not exist.
    fn get(&self, id: i32) -> Result<Option<TradeRecord>>;

    /// Overwrite the editable fields of a record.
    ///
    /// Returns false (and changes nothing) when the id is gone. The id,
    /// checklist, and screenshot paths are never touched.
    fn update(&self, id: i32, patch: &TradePatch) -> Result<bool>;

    /// Remove a record permanently. Returns false when the id is gone.
    fn delete(&self, id: i32) -> Result<bool>;
}
