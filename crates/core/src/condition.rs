//! The condition tree a rule editor builds and submits.
//!
//! A tree is immutable once constructed; every edit produces a fresh
//! tree via [`Condition::replace`] or [`Condition::recompose`]. Nodes
//! are addressed by their string id, unique within a tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::compat;
use crate::error::ConditionError;
use crate::field::Field;
use crate::operator::Operator;
use crate::timeframe::Timeframe;
use crate::value::Value;

/// Named higher-level condition templates that preset widgets edit as a
/// unit (min/max bounds) rather than as raw leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Composition {
    CurveProgressRange,
    TokenAgeRange,
    MarketCapRange,
    SwapCountRange,
}

/// A rule's trigger logic.
///
/// The wire shape is internally tagged with the literals `"AND"`,
/// `"COMPARE"` and `"COMPOSE"`; the rules endpoint depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// All children must hold. An empty group is vacuously true.
    And { id: String, conditions: Vec<Condition> },

    /// One predicate over one monitored field. `timeframe` is present
    /// exactly when the compatibility entry lists lookback windows.
    Compare {
        id: String,
        field: Field,
        operator: Operator,
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeframe: Option<Timeframe>,
    },

    /// A named macro whose body is the canonical expansion of a preset.
    /// The `composition` tag and id are fixed once created; edits only
    /// ever rewrite the embedded condition.
    Compose {
        id: String,
        composition: Composition,
        condition: Box<Condition>,
    },
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

impl Condition {
    /// Group conditions under a conjunction.
    pub fn and(conditions: Vec<Condition>) -> Condition {
        Condition::And {
            id: fresh_id(),
            conditions,
        }
    }

    /// Build a Compare leaf, rejecting tuples the compatibility table
    /// does not license. Rejection happens here, at edit time, never at
    /// submission.
    pub fn compare(
        field: Field,
        operator: Operator,
        value: Value,
        timeframe: Option<Timeframe>,
    ) -> Result<Condition, ConditionError> {
        compat::check_compare(field, operator, value.kind(), timeframe)?;
        Ok(Condition::Compare {
            id: fresh_id(),
            field,
            operator,
            value,
            timeframe,
        })
    }

    /// Wrap an already-valid body in a Compose node.
    pub fn compose(
        composition: Composition,
        condition: Condition,
    ) -> Result<Condition, ConditionError> {
        condition.validate()?;
        Ok(Condition::Compose {
            id: fresh_id(),
            composition,
            condition: Box::new(condition),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Condition::And { id, .. } => id,
            Condition::Compare { id, .. } => id,
            Condition::Compose { id, .. } => id,
        }
    }

    /// Full-tree structural check: every Compare licensed by the
    /// compatibility table, every id unique within the tree.
    pub fn validate(&self) -> Result<(), ConditionError> {
        let mut seen = BTreeSet::new();
        self.validate_node(&mut seen)
    }

    fn validate_node(&self, seen: &mut BTreeSet<String>) -> Result<(), ConditionError> {
        if !seen.insert(self.id().to_string()) {
            return Err(ConditionError::DuplicateId {
                id: self.id().to_string(),
            });
        }
        match self {
            Condition::And { conditions, .. } => {
                for child in conditions {
                    child.validate_node(seen)?;
                }
                Ok(())
            }
            Condition::Compare {
                field,
                operator,
                value,
                timeframe,
                ..
            } => compat::check_compare(*field, *operator, value.kind(), *timeframe),
            Condition::Compose { condition, .. } => condition.validate_node(seen),
        }
    }

    /// Look up a node by id.
    pub fn find(&self, target: &str) -> Option<&Condition> {
        if self.id() == target {
            return Some(self);
        }
        match self {
            Condition::And { conditions, .. } => {
                conditions.iter().find_map(|child| child.find(target))
            }
            Condition::Compare { .. } => None,
            Condition::Compose { condition, .. } => condition.find(target),
        }
    }

    /// Produce a new tree with the addressed node swapped for
    /// `replacement`. A tree without the id comes back unchanged.
    pub fn replace(&self, target: &str, replacement: Condition) -> Condition {
        if self.id() == target {
            return replacement;
        }
        match self {
            Condition::And { id, conditions } => Condition::And {
                id: id.clone(),
                conditions: conditions
                    .iter()
                    .map(|child| child.replace(target, replacement.clone()))
                    .collect(),
            },
            Condition::Compare { .. } => self.clone(),
            Condition::Compose {
                id,
                composition,
                condition,
            } => Condition::Compose {
                id: id.clone(),
                composition: *composition,
                condition: Box::new(condition.replace(target, replacement)),
            },
        }
    }

    /// Rewrite the body of the addressed Compose node, keeping its id
    /// and composition tag. This is the only edit a preset widget
    /// performs.
    pub fn recompose(&self, target: &str, body: Condition) -> Condition {
        match self {
            Condition::Compose {
                id,
                composition,
                condition,
            } => {
                let new_body = if id == target {
                    body
                } else {
                    condition.recompose(target, body)
                };
                Condition::Compose {
                    id: id.clone(),
                    composition: *composition,
                    condition: Box::new(new_body),
                }
            }
            Condition::And { id, conditions } => Condition::And {
                id: id.clone(),
                conditions: conditions
                    .iter()
                    .map(|child| child.recompose(target, body.clone()))
                    .collect(),
            },
            Condition::Compare { .. } => self.clone(),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
