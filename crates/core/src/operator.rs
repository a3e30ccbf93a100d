//! Comparison operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a Compare leaf relates its field to its value.
///
/// Delta operators read a change over a lookback window; threshold
/// operators read the instantaneous (or windowed-count) level. Not every
/// operator applies to every field -- see [`crate::compat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Equal,
    NotEqual,
    IncreasedByMoreThan,
    IncreasedByMoreThanEqual,
    DecreasedByMoreThan,
    DecreasedByMoreThanEqual,
    MoreThan,
    MoreThanEqual,
    LessThan,
    LessThanEqual,
}

impl Operator {
    /// True for the INCREASED/DECREASED_BY family.
    pub fn is_delta(self) -> bool {
        matches!(
            self,
            Operator::IncreasedByMoreThan
                | Operator::IncreasedByMoreThanEqual
                | Operator::DecreasedByMoreThan
                | Operator::DecreasedByMoreThanEqual
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "EQUAL",
            Operator::NotEqual => "NOT_EQUAL",
            Operator::IncreasedByMoreThan => "INCREASED_BY_MORE_THAN",
            Operator::IncreasedByMoreThanEqual => "INCREASED_BY_MORE_THAN_EQUAL",
            Operator::DecreasedByMoreThan => "DECREASED_BY_MORE_THAN",
            Operator::DecreasedByMoreThanEqual => "DECREASED_BY_MORE_THAN_EQUAL",
            Operator::MoreThan => "MORE_THAN",
            Operator::MoreThanEqual => "MORE_THAN_EQUAL",
            Operator::LessThan => "LESS_THAN",
            Operator::LessThanEqual => "LESS_THAN_EQUAL",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
