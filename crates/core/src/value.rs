//! Typed scalar values carried by rule comparisons.
//!
//! Every value is tagged with its kind; the tag decides which payload is
//! present and which comparisons are defined. All user-entered amounts
//! use `rust_decimal::Decimal` -- no `f64` in any comparison path.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{RenderError, ValueError};

// ── Time units ──────────────────────────────────────────────────────

/// Duration units with fixed second factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// Seconds per unit: SECOND=1, MINUTE=60, HOUR=3600, DAY=86400.
    pub fn seconds(self) -> i64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 3600,
            TimeUnit::Day => 86400,
        }
    }

    /// Wire literal, also used in error text.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Second => "SECOND",
            TimeUnit::Minute => "MINUTE",
            TimeUnit::Hour => "HOUR",
            TimeUnit::Day => "DAY",
        }
    }

    /// Singular unit word for display; callers pluralize.
    pub fn word(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, RenderError> {
        match s {
            "SECOND" => Ok(TimeUnit::Second),
            "MINUTE" => Ok(TimeUnit::Minute),
            "HOUR" => Ok(TimeUnit::Hour),
            "DAY" => Ok(TimeUnit::Day),
            other => Err(RenderError::UnknownTimeUnit {
                literal: other.to_string(),
            }),
        }
    }
}

// ── Durations ───────────────────────────────────────────────────────

/// A duration magnitude with its unit.
///
/// Structural equality is field-wise: `(300, SECOND)` and `(5, MINUTE)`
/// are distinct values that compare equal through [`compare_durations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub value: i64,
    pub unit: TimeUnit,
}

impl Duration {
    pub fn new(value: i64, unit: TimeUnit) -> Duration {
        Duration { value, unit }
    }

    pub fn as_seconds(self) -> i64 {
        self.value * self.unit.seconds()
    }
}

/// Signed seconds difference between two durations.
///
/// Both operands are normalized to seconds, so heterogeneous units order
/// correctly: `(1, HOUR)` equals `(60, MINUTE)`, and zero of any unit
/// equals zero of any other. Zero means equal; the sign gives the
/// ordering. No error path -- every `Duration` is well-formed.
pub fn compare_durations(a: Duration, b: Duration) -> i64 {
    a.as_seconds() - b.as_seconds()
}

// ── Values ──────────────────────────────────────────────────────────

/// The kind tag of a [`Value`], used for table lookups and error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Count,
    Percent,
    Duration,
    Sol,
    Usd,
    Quote,
    String,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Boolean => "BOOLEAN",
            ValueKind::Count => "COUNT",
            ValueKind::Percent => "PERCENT",
            ValueKind::Duration => "DURATION",
            ValueKind::Sol => "SOL",
            ValueKind::Usd => "USD",
            ValueKind::Quote => "QUOTE",
            ValueKind::String => "STRING",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed scalar value.
///
/// The wire shape is internally tagged: `{ "type": "PERCENT", "value": 42 }`,
/// with DURATION carrying its `unit` alongside. SOL, USD and QUOTE amounts
/// are denomination-tagged and never compare across denominations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Value {
    Boolean { value: bool },
    Count { value: i64 },
    Percent { value: Decimal },
    Duration(Duration),
    Sol { value: Decimal },
    Usd { value: Decimal },
    Quote { value: Decimal },
    String { value: String },
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean { .. } => ValueKind::Boolean,
            Value::Count { .. } => ValueKind::Count,
            Value::Percent { .. } => ValueKind::Percent,
            Value::Duration(_) => ValueKind::Duration,
            Value::Sol { .. } => ValueKind::Sol,
            Value::Usd { .. } => ValueKind::Usd,
            Value::Quote { .. } => ValueKind::Quote,
            Value::String { .. } => ValueKind::String,
        }
    }

    /// Type-directed ordering between two bound values.
    ///
    /// Defined when both operands are durations (normalized to seconds)
    /// or share the same numeric kind tag. Mismatched tags fail with
    /// [`ValueError::KindMismatch`] rather than comparing raw numbers;
    /// BOOLEAN and STRING have no ordering at all.
    pub fn compare(&self, other: &Value) -> Result<Ordering, ValueError> {
        match (self, other) {
            (Value::Count { value: l }, Value::Count { value: r }) => Ok(l.cmp(r)),
            (Value::Percent { value: l }, Value::Percent { value: r }) => Ok(l.cmp(r)),
            (Value::Sol { value: l }, Value::Sol { value: r }) => Ok(l.cmp(r)),
            (Value::Usd { value: l }, Value::Usd { value: r }) => Ok(l.cmp(r)),
            (Value::Quote { value: l }, Value::Quote { value: r }) => Ok(l.cmp(r)),
            (Value::Duration(l), Value::Duration(r)) => Ok(compare_durations(*l, *r).cmp(&0)),
            (Value::Boolean { .. }, Value::Boolean { .. }) => Err(ValueError::Unordered {
                kind: ValueKind::Boolean,
            }),
            (Value::String { .. }, Value::String { .. }) => Err(ValueError::Unordered {
                kind: ValueKind::String,
            }),
            (l, r) => Err(ValueError::KindMismatch {
                left: l.kind(),
                right: r.kind(),
            }),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
