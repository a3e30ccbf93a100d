//! Monitored token attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A token attribute a Compare leaf can test.
///
/// Which operators, value kinds and timeframes each field admits is the
/// business of [`crate::compat`]; nothing here encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    /// Last trade price, in a quote denomination.
    Price,
    /// Market capitalization.
    MarketCap,
    /// Windowed trade-count movement (delta operators only).
    Trades,
    /// Buy-side transaction count in a lookback window.
    TradesBuy,
    /// Sell-side transaction count in a lookback window.
    TradesSell,
    /// Combined transaction count in a lookback window.
    TradesTotal,
    /// Bonding-curve progress, percent of the curve filled.
    CurveProgress,
    /// Time since the bonding curve was created.
    CurveProgressAge,
    /// Trading venue identifier.
    Venue,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Price => "PRICE",
            Field::MarketCap => "MARKET_CAP",
            Field::Trades => "TRADES",
            Field::TradesBuy => "TRADES_BUY",
            Field::TradesSell => "TRADES_SELL",
            Field::TradesTotal => "TRADES_TOTAL",
            Field::CurveProgress => "CURVE_PROGRESS",
            Field::CurveProgressAge => "CURVE_PROGRESS_AGE",
            Field::Venue => "VENUE",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
