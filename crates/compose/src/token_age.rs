//! Token-age range preset.
//!
//! Bounds the time since the bonding curve was created. Both bounds are
//! durations in whatever unit the widget produced; classification
//! normalizes to seconds, so a 600-second minimum against a 5-minute
//! maximum is correctly a contradiction.

use tripwire_core::{
    compare_durations, Composition, Condition, ConditionError, Duration, Field, Operator, Value,
};

use crate::range::{classify_bounds, Likelihood, RangeClass, RangeMessage};
use crate::render::format_duration;

/// Min/max token age, edited as a unit by the age widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenAgeRange {
    pub min: Option<Duration>,
    pub max: Option<Duration>,
}

impl TokenAgeRange {
    pub fn new(min: Option<Duration>, max: Option<Duration>) -> TokenAgeRange {
        TokenAgeRange { min, max }
    }

    pub fn class(&self) -> RangeClass {
        classify_bounds(self.min.as_ref(), self.max.as_ref(), |a, b| {
            compare_durations(*a, *b).cmp(&0)
        })
    }

    /// Editor message for the current bounds; `None` when neither bound
    /// is set. Degenerate equal bounds render in the max bound's unit.
    pub fn message(&self) -> Option<RangeMessage> {
        match (self.min, self.max) {
            (None, None) => None,
            (Some(min), None) => Some(RangeMessage {
                class: RangeClass::MinOnly,
                verdict: None,
                text: format!("The token must be at least {} old", format_duration(min)),
            }),
            (None, Some(max)) => Some(RangeMessage {
                class: RangeClass::MaxOnly,
                verdict: None,
                text: format!("The token must be no more than {} old", format_duration(max)),
            }),
            (Some(min), Some(max)) => {
                let diff = compare_durations(min, max);
                if diff > 0 {
                    Some(RangeMessage {
                        class: RangeClass::Inverted,
                        verdict: Some(Likelihood::Never),
                        text: "Minimum age is greater than the maximum age".to_string(),
                    })
                } else if diff == 0 {
                    Some(RangeMessage {
                        class: RangeClass::Exact,
                        verdict: Some(Likelihood::Unlikely),
                        text: format!("The token is exactly {} old", format_duration(max)),
                    })
                } else {
                    Some(RangeMessage {
                        class: RangeClass::Bounded,
                        verdict: None,
                        text: format!(
                            "The token must be between {} and {} old",
                            format_duration(min),
                            format_duration(max)
                        ),
                    })
                }
            }
        }
    }

    /// Canonical expansion: an age compare per present bound, wrapped in
    /// a TOKEN_AGE_RANGE composition.
    pub fn expand(&self) -> Result<Condition, ConditionError> {
        let mut leaves = Vec::new();
        if let Some(min) = self.min {
            leaves.push(Condition::compare(
                Field::CurveProgressAge,
                Operator::MoreThanEqual,
                Value::Duration(min),
                None,
            )?);
        }
        if let Some(max) = self.max {
            leaves.push(Condition::compare(
                Field::CurveProgressAge,
                Operator::LessThanEqual,
                Value::Duration(max),
                None,
            )?);
        }
        Condition::compose(Composition::TokenAgeRange, Condition::and(leaves))
    }

    /// Read the bounds back from an expansion. `None` when the node is
    /// not a token-age composition in canonical shape.
    pub fn from_condition(condition: &Condition) -> Option<TokenAgeRange> {
        let body = match condition {
            Condition::Compose {
                composition: Composition::TokenAgeRange,
                condition,
                ..
            } => condition,
            _ => return None,
        };
        let leaves = match body.as_ref() {
            Condition::And { conditions, .. } => conditions,
            _ => return None,
        };
        let mut range = TokenAgeRange::default();
        for leaf in leaves {
            match leaf {
                Condition::Compare {
                    field: Field::CurveProgressAge,
                    operator: Operator::MoreThanEqual,
                    value: Value::Duration(d),
                    ..
                } => range.min = Some(*d),
                Condition::Compare {
                    field: Field::CurveProgressAge,
                    operator: Operator::LessThanEqual,
                    value: Value::Duration(d),
                    ..
                } => range.max = Some(*d),
                _ => return None,
            }
        }
        Some(range)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
