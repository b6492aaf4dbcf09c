//! SQLite store implementation using Diesel.

use std::str::FromStr;

use diesel::dsl::max;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tracing::debug;

use super::TradeStore;
use crate::db::model::{NewTradeRow, TradeRow};
use crate::db::schema::trades;
use crate::db::DbPool;
use crate::domain::{Checklist, Direction, NewTrade, TradePatch, TradeRecord};
use crate::error::{Error, Result};

/// SQLite-backed trade store.
pub struct SqliteTradeStore {
    pool: DbPool,
}

impl SqliteTradeStore {
    /// Create a new SQLite trade store over an owned pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    fn to_row(trade: &NewTrade) -> NewTradeRow {
        let flags = trade.checklist.flags();
        NewTradeRow {
            date: trade.date.clone(),
            pair: trade.pair.clone(),
            direction: trade.direction.to_string(),
            quantity: trade.quantity,
            strategy: trade.strategy.clone(),
            waited_4h: i32::from(flags[0]),
            trend_followed: i32::from(flags[1]),
            rr_ok: i32::from(flags[2]),
            emotional: i32::from(flags[3]),
            followed_plan: i32::from(flags[4]),
            profit_percent: trade.profit_percent,
            notes: trade.notes.clone(),
            pre_image_path: trade.pre_image_path.clone(),
            post_image_path: trade.post_image_path.clone(),
        }
    }

    fn from_row(row: TradeRow) -> Result<TradeRecord> {
        let id = row
            .id
            .ok_or_else(|| Error::Database("trade row without id".to_string()))?;
        let direction = Direction::from_str(&row.direction)?;

        Ok(TradeRecord {
            id,
            date: row.date,
            pair: row.pair,
            direction,
            quantity: row.quantity,
            strategy: row.strategy,
            checklist: Checklist {
                waited_4h: row.waited_4h != 0,
                trend_followed: row.trend_followed != 0,
                rr_ok: row.rr_ok != 0,
                emotional: row.emotional != 0,
                followed_plan: row.followed_plan != 0,
            },
            profit_percent: row.profit_percent,
            notes: row.notes,
            pre_image_path: row.pre_image_path,
            post_image_path: row.post_image_path,
        })
    }
}

impl TradeStore for SqliteTradeStore {
    fn create(&self, trade: &NewTrade) -> Result<i32> {
        let row = Self::to_row(trade);
        let mut conn = self.conn()?;

        diesel::insert_into(trades::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        // Single connection, single writer: the newest rowid is ours.
        let id: Option<i32> = trades::table
            .select(max(trades::id))
            .first(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let id = id.ok_or_else(|| Error::Database("insert produced no row id".to_string()))?;
        debug!(id, pair = %trade.pair, "Trade persisted");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<TradeRecord>> {
        let mut conn = self.conn()?;

        // Unordered scan returns rowid order, i.e. insertion order.
        let rows: Vec<TradeRow> = trades::table
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    fn get(&self, id: i32) -> Result<Option<TradeRecord>> {
        let mut conn = self.conn()?;

        let row: Option<TradeRow> = trades::table
            .filter(trades::id.eq(id))
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    fn update(&self, id: i32, patch: &TradePatch) -> Result<bool> {
        let mut conn = self.conn()?;

        let changed = diesel::update(trades::table.filter(trades::id.eq(id)))
            .set((
                trades::date.eq(&patch.date),
                trades::pair.eq(&patch.pair),
                trades::direction.eq(patch.direction.as_str()),
                trades::quantity.eq(patch.quantity),
                trades::strategy.eq(&patch.strategy),
                trades::profit_percent.eq(patch.profit_percent),
                trades::notes.eq(&patch.notes),
            ))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id, changed, "Trade update");
        Ok(changed > 0)
    }

    fn delete(&self, id: i32) -> Result<bool> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(trades::table.filter(trades::id.eq(id)))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id, deleted, "Trade delete");
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations};

    fn setup_test_db() -> DbPool {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        pool
    }

    fn sample_trade() -> NewTrade {
        NewTrade {
            date: "2026-08-20".to_string(),
            pair: "EURUSD".to_string(),
            direction: Direction::Buy,
            quantity: 1.5,
            strategy: "EMA Cross".to_string(),
            checklist: Checklist {
                waited_4h: true,
                rr_ok: true,
                ..Default::default()
            },
            profit_percent: 2.0,
            notes: "clean breakout".to_string(),
            pre_image_path: Some("images/pre.png".to_string()),
            post_image_path: None,
        }
    }

    #[test]
    fn create_then_get_roundtrip() {
        let store = SqliteTradeStore::new(setup_test_db());

        let id = store.create(&sample_trade()).unwrap();
        let loaded = store.get(id).unwrap().unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.pair, "EURUSD");
        assert_eq!(loaded.direction, Direction::Buy);
        assert!((loaded.quantity - 1.5).abs() < f64::EPSILON);
        assert!(loaded.checklist.waited_4h);
        assert!(loaded.checklist.rr_ok);
        assert!(!loaded.checklist.emotional);
        assert_eq!(loaded.pre_image_path.as_deref(), Some("images/pre.png"));
        assert_eq!(loaded.post_image_path, None);
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let store = SqliteTradeStore::new(setup_test_db());

        let first = store.create(&sample_trade()).unwrap();
        let second = store.create(&sample_trade()).unwrap();
        assert_ne!(first, second);

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first);
        assert_eq!(all[1].id, second);
    }

    #[test]
    fn update_overwrites_editable_fields_only() {
        let store = SqliteTradeStore::new(setup_test_db());
        let id = store.create(&sample_trade()).unwrap();

        let patch = TradePatch {
            date: "2026-08-21".to_string(),
            pair: "GBPUSD".to_string(),
            direction: Direction::Sell,
            quantity: 0.5,
            strategy: "Breakout".to_string(),
            profit_percent: -1.0,
            notes: "revised".to_string(),
        };
        assert!(store.update(id, &patch).unwrap());

        let loaded = store.get(id).unwrap().unwrap();
        assert_eq!(loaded.id, id);
        assert_eq!(loaded.pair, "GBPUSD");
        assert_eq!(loaded.direction, Direction::Sell);
        assert_eq!(loaded.notes, "revised");
        // Checklist and screenshots survive the edit untouched
        assert!(loaded.checklist.waited_4h);
        assert!(loaded.checklist.rr_ok);
        assert_eq!(loaded.pre_image_path.as_deref(), Some("images/pre.png"));
    }

    #[test]
    fn delete_removes_record() {
        let store = SqliteTradeStore::new(setup_test_db());
        let id = store.create(&sample_trade()).unwrap();

        assert!(store.delete(id).unwrap());
        assert!(store.get(id).unwrap().is_none());
        assert!(store.list_all().unwrap().is_empty());
        assert!(!store.delete(id).unwrap()); // Already deleted
    }

    #[test]
    fn missing_id_is_a_noop() {
        let store = SqliteTradeStore::new(setup_test_db());
        let patch = TradePatch {
            date: String::new(),
            pair: String::new(),
            direction: Direction::Buy,
            quantity: 0.0,
            strategy: String::new(),
            profit_percent: 0.0,
            notes: String::new(),
        };

        assert!(store.get(42).unwrap().is_none());
        assert!(!store.update(42, &patch).unwrap());
        assert!(!store.delete(42).unwrap());
    }
}
