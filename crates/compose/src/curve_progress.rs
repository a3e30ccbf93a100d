//! Bonding-curve progress preset.
//!
//! Targets tokens whose bonding curve sits between two percentages. The
//! expansion always carries a fixed staleness guard on the curve
//! reading; the guard is not user-editable and does not survive into the
//! widget's bounds on read-back.

use rust_decimal::Decimal;

use tripwire_core::{
    Composition, Condition, ConditionError, Duration, Field, Operator, TimeUnit, Value,
};

/// The curve reading must be at most this old for the rule to fire.
const MAX_READING_AGE: Duration = Duration {
    value: 1,
    unit: TimeUnit::Minute,
};

/// Min/max curve progress in whole percent, 0-99 by the input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveProgressRange {
    pub min: u8,
    pub max: u8,
}

impl Default for CurveProgressRange {
    /// Placeholder bounds for a freshly created rule.
    fn default() -> CurveProgressRange {
        CurveProgressRange { min: 5, max: 95 }
    }
}

impl CurveProgressRange {
    pub fn new(min: u8, max: u8) -> CurveProgressRange {
        CurveProgressRange { min, max }
    }

    /// Canonical expansion: lower bound, upper bound, staleness guard.
    pub fn expand(&self) -> Result<Condition, ConditionError> {
        // TODO: confirm with product whether the upper bound should
        // really switch operator when the lower bound is 0.
        let upper_op = if self.min == 0 {
            Operator::MoreThanEqual
        } else {
            Operator::LessThanEqual
        };
        let leaves = vec![
            Condition::compare(
                Field::CurveProgress,
                Operator::MoreThanEqual,
                percent(self.min),
                None,
            )?,
            Condition::compare(Field::CurveProgress, upper_op, percent(self.max), None)?,
            Condition::compare(
                Field::CurveProgressAge,
                Operator::LessThanEqual,
                Value::Duration(MAX_READING_AGE),
                None,
            )?,
        ];
        Condition::compose(Composition::CurveProgressRange, Condition::and(leaves))
    }

    /// Read the bounds back from an expansion.
    ///
    /// Recovery is positional -- first CURVE_PROGRESS leaf is the lower
    /// bound, second the upper -- because the min == 0 expansion gives
    /// both leaves the same operator.
    pub fn from_condition(condition: &Condition) -> Option<CurveProgressRange> {
        let body = match condition {
            Condition::Compose {
                composition: Composition::CurveProgressRange,
                condition,
                ..
            } => condition,
            _ => return None,
        };
        let leaves = match body.as_ref() {
            Condition::And { conditions, .. } => conditions,
            _ => return None,
        };

        let mut bounds = Vec::new();
        for leaf in leaves {
            match leaf {
                Condition::Compare {
                    field: Field::CurveProgress,
                    value: Value::Percent { value },
                    ..
                } => bounds.push(as_widget_percent(*value)?),
                Condition::Compare {
                    field: Field::CurveProgressAge,
                    ..
                } => {}
                _ => return None,
            }
        }
        match bounds.as_slice() {
            [min, max] => Some(CurveProgressRange::new(*min, *max)),
            _ => None,
        }
    }
}

fn percent(n: u8) -> Value {
    Value::Percent {
        value: Decimal::from(n),
    }
}

/// Back-convert a percent amount to the widget's whole-percent scale.
fn as_widget_percent(value: Decimal) -> Option<u8> {
    use rust_decimal::prelude::ToPrimitive;
    if value.fract() != Decimal::ZERO {
        return None;
    }
    value.to_u8()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_leaves(tree: &Condition) -> Vec<(Operator, Decimal)> {
        let body = match tree {
            Condition::Compose { condition, .. } => condition,
            other => panic!("expected Compose, got {:?}", other),
        };
        let leaves = match body.as_ref() {
            Condition::And { conditions, .. } => conditions,
            other => panic!("expected And body, got {:?}", other),
        };
        leaves
            .iter()
            .filter_map(|leaf| match leaf {
                Condition::Compare {
                    field: Field::CurveProgress,
                    operator,
                    value: Value::Percent { value },
                    ..
                } => Some((*operator, *value)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn expansion_bounds_and_guards_the_reading_age() {
        let tree = CurveProgressRange::new(10, 60).expand().unwrap();
        assert!(tree.validate().is_ok());

        let bounds = progress_leaves(&tree);
        assert_eq!(
            bounds,
            vec![
                (Operator::MoreThanEqual, Decimal::from(10)),
                (Operator::LessThanEqual, Decimal::from(60)),
            ]
        );

        let body = match &tree {
            Condition::Compose { condition, .. } => condition,
            _ => unreachable!(),
        };
        let has_age_guard = match body.as_ref() {
            Condition::And { conditions, .. } => conditions.iter().any(|leaf| {
                matches!(
                    leaf,
                    Condition::Compare {
                        field: Field::CurveProgressAge,
                        operator: Operator::LessThanEqual,
                        value: Value::Duration(Duration {
                            value: 1,
                            unit: TimeUnit::Minute,
                        }),
                        ..
                    }
                )
            }),
            _ => false,
        };
        assert!(has_age_guard);
    }

    #[test]
    fn zero_minimum_switches_the_upper_bound_operator() {
        let tree = CurveProgressRange::new(0, 40).expand().unwrap();
        let bounds = progress_leaves(&tree);
        assert_eq!(
            bounds,
            vec![
                (Operator::MoreThanEqual, Decimal::from(0)),
                (Operator::MoreThanEqual, Decimal::from(40)),
            ]
        );
    }

    #[test]
    fn expansion_reads_back_losslessly() {
        for range in [
            CurveProgressRange::new(10, 60),
            CurveProgressRange::new(0, 40),
            CurveProgressRange::default(),
        ] {
            let tree = range.expand().unwrap();
            assert_eq!(CurveProgressRange::from_condition(&tree).unwrap(), range);
        }
    }

    #[test]
    fn default_bounds_are_placeholders() {
        let range = CurveProgressRange::default();
        assert_eq!((range.min, range.max), (5, 95));
    }

    #[test]
    fn read_back_rejects_foreign_nodes() {
        let unrelated = Condition::and(vec![]);
        assert_eq!(CurveProgressRange::from_condition(&unrelated), None);
    }
}
