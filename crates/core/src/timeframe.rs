//! Fixed lookback windows for windowed comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// Lookback windows, totally ordered by duration (M1 < M5 < ... < D1).
///
/// The derived `Ord` follows declaration order, which matches duration
/// order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Timeframe {
    M1,
    M5,
    M15,
    H1,
    H6,
    D1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 6] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::H1,
        Timeframe::H6,
        Timeframe::D1,
    ];

    pub fn seconds(self) -> i64 {
        match self {
            Timeframe::M1 => 60,
            Timeframe::M5 => 300,
            Timeframe::M15 => 900,
            Timeframe::H1 => 3600,
            Timeframe::H6 => 21600,
            Timeframe::D1 => 86400,
        }
    }

    /// Display phrase pinned by the rule editor.
    pub fn phrase(self) -> &'static str {
        match self {
            Timeframe::M1 => "1 minute",
            Timeframe::M5 => "5 minutes",
            Timeframe::M15 => "15 minutes",
            Timeframe::H1 => "1 hour",
            Timeframe::H6 => "6 hours",
            Timeframe::D1 => "24 hours",
        }
    }

    /// Wire literal, also used in error text.
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::M1 => "M1",
            Timeframe::M5 => "M5",
            Timeframe::M15 => "M15",
            Timeframe::H1 => "H1",
            Timeframe::H6 => "H6",
            Timeframe::D1 => "D1",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, RenderError> {
        match s {
            "M1" => Ok(Timeframe::M1),
            "M5" => Ok(Timeframe::M5),
            "M15" => Ok(Timeframe::M15),
            "H1" => Ok(Timeframe::H1),
            "H6" => Ok(Timeframe::H6),
            "D1" => Ok(Timeframe::D1),
            other => Err(RenderError::UnknownTimeframe {
                literal: other.to_string(),
            }),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
