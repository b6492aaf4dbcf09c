//! In-memory store implementation for testing.

use parking_lot::RwLock;

use super::TradeStore;
use crate::domain::{NewTrade, TradePatch, TradeRecord};
use crate::error::Result;

/// In-memory store for testing purposes. Keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    trades: Vec<TradeRecord>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TradeStore for MemoryStore {
    fn create(&self, trade: &NewTrade) -> Result<i32> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.trades.push(TradeRecord {
            id,
            date: trade.date.clone(),
            pair: trade.pair.clone(),
            direction: trade.direction,
            quantity: trade.quantity,
            strategy: trade.strategy.clone(),
            checklist: trade.checklist,
            profit_percent: trade.profit_percent,
            notes: trade.notes.clone(),
            pre_image_path: trade.pre_image_path.clone(),
            post_image_path: trade.post_image_path.clone(),
        });
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<TradeRecord>> {
        Ok(self.inner.read().trades.clone())
    }

    fn get(&self, id: i32) -> Result<Option<TradeRecord>> {
        Ok(self
            .inner
            .read()
            .trades
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    fn update(&self, id: i32, patch: &TradePatch) -> Result<bool> {
        let mut inner = self.inner.write();
        let Some(trade) = inner.trades.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        trade.date = patch.date.clone();
        trade.pair = patch.pair.clone();
        trade.direction = patch.direction;
        trade.quantity = patch.quantity;
        trade.strategy = patch.strategy.clone();
        trade.profit_percent = patch.profit_percent;
        trade.notes = patch.notes.clone();
        Ok(true)
    }

    fn delete(&self, id: i32) -> Result<bool> {
        let mut inner = self.inner.write();
        let before = inner.trades.len();
        inner.trades.retain(|t| t.id != id);
        Ok(inner.trades.len() < before)
    }
}
