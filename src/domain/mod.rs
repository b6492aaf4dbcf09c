//! Core journal types: trade records, the fixed rule checklist, and input
//! coercion shared by the entry forms.

use serde::Serialize;

use crate::error::Error;

/// Ordered `(column key, display label)` pairs for the five discipline rules.
///
/// Declared once and consumed by the add form, the detail view, and the
/// aggregator so that rule order and wording never drift apart.
pub const RULES: [(&str, &str); 5] = [
    ("waited_4h", "Waited for 4H candle close"),
    ("trend_followed", "Followed trend"),
    ("rr_ok", "Proper risk-reward"),
    ("emotional", "No emotional entry"),
    ("followed_plan", "Entry matched plan"),
];

/// Trade direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum Direction {
    #[default]
    Buy,
    Sell,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Buy => "Buy",
            Direction::Sell => "Sell",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" | "buy" => Ok(Direction::Buy),
            "Sell" | "sell" => Ok(Direction::Sell),
            other => Err(Error::Parse(format!("unknown direction '{other}'"))),
        }
    }
}

/// The five fixed discipline flags evaluated per trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Checklist {
    pub waited_4h: bool,
    pub trend_followed: bool,
    pub rr_ok: bool,
    pub emotional: bool,
    pub followed_plan: bool,
}

impl Checklist {
    /// Flag values in declared rule order, matching [`RULES`].
    #[must_use]
    pub fn flags(&self) -> [bool; 5] {
        [
            self.waited_4h,
            self.trend_followed,
            self.rr_ok,
            self.emotional,
            self.followed_plan,
        ]
    }
}

/// Win/loss classification by the sign of `profit_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
    Breakeven,
}

impl Outcome {
    #[must_use]
    pub fn of(profit_percent: f64) -> Self {
        if profit_percent > 0.0 {
            Outcome::Win
        } else if profit_percent < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Breakeven
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Breakeven => "Breakeven",
        }
    }
}

/// A persisted journal entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRecord {
    pub id: i32,
    /// User-entered ISO-ish date string; the format is not validated.
    pub date: String,
    pub pair: String,
    pub direction: Direction,
    pub quantity: f64,
    pub strategy: String,
    pub checklist: Checklist,
    pub profit_percent: f64,
    pub notes: String,
    pub pre_image_path: Option<String>,
    pub post_image_path: Option<String>,
}

impl TradeRecord {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.profit_percent)
    }
}

/// Input for creating a trade; the store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct NewTrade {
    pub date: String,
    pub pair: String,
    pub direction: Direction,
    pub quantity: f64,
    pub strategy: String,
    pub checklist: Checklist,
    pub profit_percent: f64,
    pub notes: String,
    pub pre_image_path: Option<String>,
    pub post_image_path: Option<String>,
}

/// The fields the edit path may overwrite.
///
/// Checklist flags and screenshot paths are deliberately absent: the edit
/// form has never written them back, and that behavior is kept rather than
/// silently changed.
#[derive(Debug, Clone)]
pub struct TradePatch {
    pub date: String,
    pub pair: String,
    pub direction: Direction,
    pub quantity: f64,
    pub strategy: String,
    pub profit_percent: f64,
    pub notes: String,
}

/// Coerce free-form numeric input the way the journal always has: anything
/// that fails to parse counts as zero instead of rejecting the entry.
#[must_use]
pub fn parse_or_zero(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}
