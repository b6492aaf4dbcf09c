//! Database model types for Diesel ORM.
//!
//! Checklist flags are stored as integers, matching the table schema.

use diesel::prelude::*;

use super::schema::trades;

/// Database row for a trade (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeRow {
    pub id: Option<i32>,
    pub date: String,
    pub pair: String,
    pub direction: String,
    pub quantity: f64,
    pub strategy: String,
    pub waited_4h: i32,
    pub trend_followed: i32,
    pub rr_ok: i32,
    pub emotional: i32,
    pub followed_plan: i32,
    pub profit_percent: f64,
    pub notes: String,
    pub pre_image_path: Option<String>,
    pub post_image_path: Option<String>,
}

/// Database row for a trade (insertable; SQLite assigns the id).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = trades)]
pub struct NewTradeRow {
    pub date: String,
    pub pair: String,
    pub direction: String,
    pub quantity: f64,
    pub strategy: String,
    pub waited_4h: i32,
    pub trend_followed: i32,
    pub rr_ok: i32,
    pub emotional: i32,
    pub followed_plan: i32,
    pub profit_percent: f64,
    pub notes: String,
    pub pre_image_path: Option<String>,
    pub post_image_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trade_row_is_insertable() {
        // Type check - if this compiles, the Insertable derive works
        let _row = NewTradeRow {
            date: "2026-08-20".to_string(),
            pair: "EURUSD".to_string(),
            direction: "Buy".to_string(),
            quantity: 1.5,
            strategy: "EMA Cross".to_string(),
            waited_4h: 1,
            trend_followed: 0,
            rr_ok: 1,
            emotional: 0,
            followed_plan: 1,
            profit_percent: 2.0,
            notes: String::new(),
            pre_image_path: None,
            post_image_path: None,
        };
    }
}
