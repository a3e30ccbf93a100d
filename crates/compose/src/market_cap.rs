//! Market-cap range preset.
//!
//! Bounds are denomination-tagged amounts (SOL, USD or the pool quote).
//! Mixed denominations never compare: classification surfaces
//! [`tripwire_core::ValueError::KindMismatch`] instead of silently
//! ordering raw numbers. Unlike the age preset, equal bounds are a
//! valid tight range and carry no warning.

use std::cmp::Ordering;

use tripwire_core::{Composition, Condition, ConditionError, Field, Operator, Value, ValueError};

use crate::range::{BoundsError, Likelihood, RangeClass, RangeMessage};
use crate::render::format_amount;

/// Min/max market cap, edited as a unit by the market-cap widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketCapRange {
    pub min: Option<Value>,
    pub max: Option<Value>,
}

impl MarketCapRange {
    pub fn new(min: Option<Value>, max: Option<Value>) -> MarketCapRange {
        MarketCapRange { min, max }
    }

    pub fn class(&self) -> Result<RangeClass, ValueError> {
        match (&self.min, &self.max) {
            (None, None) => Ok(RangeClass::Empty),
            (Some(_), None) => Ok(RangeClass::MinOnly),
            (None, Some(_)) => Ok(RangeClass::MaxOnly),
            (Some(min), Some(max)) => Ok(match min.compare(max)? {
                Ordering::Greater => RangeClass::Inverted,
                Ordering::Equal => RangeClass::Exact,
                Ordering::Less => RangeClass::Bounded,
            }),
        }
    }

    /// Editor message for the current bounds; `None` when neither bound
    /// is set. Equal bounds render as a normal range.
    pub fn message(&self) -> Result<Option<RangeMessage>, BoundsError> {
        match (&self.min, &self.max) {
            (None, None) => Ok(None),
            (Some(min), None) => Ok(Some(RangeMessage {
                class: RangeClass::MinOnly,
                verdict: None,
                text: format!(
                    "The token must have a market cap of at least {}",
                    format_amount(min)?
                ),
            })),
            (None, Some(max)) => Ok(Some(RangeMessage {
                class: RangeClass::MaxOnly,
                verdict: None,
                text: format!(
                    "The token must have a market cap no higher than {}",
                    format_amount(max)?
                ),
            })),
            (Some(min), Some(max)) => {
                let class = self.class()?;
                if class == RangeClass::Inverted {
                    return Ok(Some(RangeMessage {
                        class,
                        verdict: Some(Likelihood::Never),
                        text: "Minimum market cap is greater than the maximum market cap"
                            .to_string(),
                    }));
                }
                Ok(Some(RangeMessage {
                    class,
                    verdict: None,
                    text: format!(
                        "The token must have a market cap of at least {}, but no higher than {}",
                        format_amount(min)?,
                        format_amount(max)?
                    ),
                }))
            }
        }
    }

    /// Canonical expansion: a MARKET_CAP compare per present bound,
    /// wrapped in a MARKET_CAP_RANGE composition. Non-currency bounds
    /// are rejected by the compatibility table here.
    pub fn expand(&self) -> Result<Condition, ConditionError> {
        let mut leaves = Vec::new();
        if let Some(min) = &self.min {
            leaves.push(Condition::compare(
                Field::MarketCap,
                Operator::MoreThanEqual,
                min.clone(),
                None,
            )?);
        }
        if let Some(max) = &self.max {
            leaves.push(Condition::compare(
                Field::MarketCap,
                Operator::LessThanEqual,
                max.clone(),
                None,
            )?);
        }
        Condition::compose(Composition::MarketCapRange, Condition::and(leaves))
    }

    /// Read the bounds back from an expansion. `None` when the node is
    /// not a market-cap composition in canonical shape.
    pub fn from_condition(condition: &Condition) -> Option<MarketCapRange> {
        let body = match condition {
            Condition::Compose {
                composition: Composition::MarketCapRange,
                condition,
                ..
            } => condition,
            _ => return None,
        };
        let leaves = match body.as_ref() {
            Condition::And { conditions, .. } => conditions,
            _ => return None,
        };
        let mut range = MarketCapRange::default();
        for leaf in leaves {
            match leaf {
                Condition::Compare {
                    field: Field::MarketCap,
                    operator: Operator::MoreThanEqual,
                    value,
                    ..
                } => range.min = Some(value.clone()),
                Condition::Compare {
                    field: Field::MarketCap,
                    operator: Operator::LessThanEqual,
                    value,
                    ..
                } => range.max = Some(value.clone()),
                _ => return None,
            }
        }
        Some(range)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
