//! Swap-count range preset.
//!
//! Bounds a transaction count inside a lookback window, for total, buy
//! or sell traffic. Each bound carries its own timeframe, and the
//! classification is timeframe-aware: bounds over different windows are
//! not commensurable, so they never contradict -- they render as two
//! independent statements instead.

use tripwire_core::{Composition, Condition, ConditionError, Field, Operator, Timeframe, Value};

use crate::range::{Likelihood, RangeClass, RangeMessage};

/// Which traffic the preset counts; also selects the display noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapKind {
    Total,
    Buy,
    Sell,
}

impl SwapKind {
    /// The monitored field this kind targets.
    pub fn field(self) -> Field {
        match self {
            SwapKind::Total => Field::TradesTotal,
            SwapKind::Buy => Field::TradesBuy,
            SwapKind::Sell => Field::TradesSell,
        }
    }

    /// Transaction noun; the same form serves singular and plural.
    pub fn noun(self) -> &'static str {
        match self {
            SwapKind::Total => "txn",
            SwapKind::Buy => "buy txn",
            SwapKind::Sell => "sell txn",
        }
    }
}

/// One bound: a count inside its own lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCountBound {
    pub count: i64,
    pub timeframe: Timeframe,
}

impl SwapCountBound {
    pub fn new(count: i64, timeframe: Timeframe) -> SwapCountBound {
        SwapCountBound { count, timeframe }
    }
}

/// Min/max windowed transaction counts, edited as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCountRange {
    pub kind: SwapKind,
    pub min: Option<SwapCountBound>,
    pub max: Option<SwapCountBound>,
}

impl SwapCountRange {
    pub fn new(
        kind: SwapKind,
        min: Option<SwapCountBound>,
        max: Option<SwapCountBound>,
    ) -> SwapCountRange {
        SwapCountRange { kind, min, max }
    }

    /// Timeframe-aware classification. Counts compare only when both
    /// bounds share a window; bounds over different windows always
    /// classify as Bounded.
    pub fn class(&self) -> RangeClass {
        match (self.min, self.max) {
            (None, None) => RangeClass::Empty,
            (Some(_), None) => RangeClass::MinOnly,
            (None, Some(_)) => RangeClass::MaxOnly,
            (Some(min), Some(max)) => {
                if min.timeframe != max.timeframe {
                    RangeClass::Bounded
                } else if min.count > max.count {
                    RangeClass::Inverted
                } else if min.count == max.count {
                    RangeClass::Exact
                } else {
                    RangeClass::Bounded
                }
            }
        }
    }

    /// Editor message for the current bounds; `None` when neither bound
    /// is set.
    pub fn message(&self) -> Option<RangeMessage> {
        let noun = self.kind.noun();
        match (self.min, self.max) {
            (None, None) => None,
            (Some(min), None) => Some(RangeMessage {
                class: RangeClass::MinOnly,
                verdict: None,
                text: format!(
                    "At least {} {} should occur in the last {}.",
                    min.count,
                    noun,
                    min.timeframe.phrase()
                ),
            }),
            (None, Some(max)) => Some(RangeMessage {
                class: RangeClass::MaxOnly,
                verdict: None,
                text: format!(
                    "No more than {} {} should occur in the last {}.",
                    max.count,
                    noun,
                    max.timeframe.phrase()
                ),
            }),
            (Some(min), Some(max)) if min.timeframe == max.timeframe => {
                if min.count > max.count {
                    Some(RangeMessage {
                        class: RangeClass::Inverted,
                        verdict: Some(Likelihood::Never),
                        text: format!(
                            "Minimum {} count is greater than the maximum {} count for the same timeframe",
                            noun, noun
                        ),
                    })
                } else if min.count == max.count {
                    Some(RangeMessage {
                        class: RangeClass::Exact,
                        verdict: Some(Likelihood::Unlikely),
                        text: format!(
                            "Exactly {} {} occurred in the last {}.",
                            min.count,
                            noun,
                            min.timeframe.phrase()
                        ),
                    })
                } else {
                    Some(RangeMessage {
                        class: RangeClass::Bounded,
                        verdict: None,
                        text: format!(
                            "At least {} {} should occur in the last {}.\nHowever, the count should not exceed {} in the same timeframe.",
                            min.count,
                            noun,
                            min.timeframe.phrase(),
                            max.count
                        ),
                    })
                }
            }
            (Some(min), Some(max)) => Some(RangeMessage {
                class: RangeClass::Bounded,
                verdict: None,
                text: format!(
                    "At least {} {} should occur in the last {}.\nHowever, no more than {} {} should occur in the last {}.",
                    min.count,
                    noun,
                    min.timeframe.phrase(),
                    max.count,
                    noun,
                    max.timeframe.phrase()
                ),
            }),
        }
    }

    /// Canonical expansion: a windowed count compare per present bound,
    /// wrapped in a SWAP_COUNT_RANGE composition.
    pub fn expand(&self) -> Result<Condition, ConditionError> {
        let field = self.kind.field();
        let mut leaves = Vec::new();
        if let Some(min) = self.min {
            leaves.push(Condition::compare(
                field,
                Operator::MoreThanEqual,
                Value::Count { value: min.count },
                Some(min.timeframe),
            )?);
        }
        if let Some(max) = self.max {
            leaves.push(Condition::compare(
                field,
                Operator::LessThanEqual,
                Value::Count { value: max.count },
                Some(max.timeframe),
            )?);
        }
        Condition::compose(Composition::SwapCountRange, Condition::and(leaves))
    }

    /// Read the bounds back from an expansion. `None` when the node is
    /// not a swap-count composition in canonical shape (an expansion
    /// with no leaves cannot name its kind and also reads back `None`).
    pub fn from_condition(condition: &Condition) -> Option<SwapCountRange> {
        let body = match condition {
            Condition::Compose {
                composition: Composition::SwapCountRange,
                condition,
                ..
            } => condition,
            _ => return None,
        };
        let leaves = match body.as_ref() {
            Condition::And { conditions, .. } => conditions,
            _ => return None,
        };

        let mut kind = None;
        let mut min = None;
        let mut max = None;
        for leaf in leaves {
            let (field, operator, count, timeframe) = match leaf {
                Condition::Compare {
                    field,
                    operator,
                    value: Value::Count { value },
                    timeframe: Some(tf),
                    ..
                } => (*field, *operator, *value, *tf),
                _ => return None,
            };
            let leaf_kind = match field {
                Field::TradesTotal => SwapKind::Total,
                Field::TradesBuy => SwapKind::Buy,
                Field::TradesSell => SwapKind::Sell,
                _ => return None,
            };
            if *kind.get_or_insert(leaf_kind) != leaf_kind {
                return None;
            }
            match operator {
                Operator::MoreThanEqual => min = Some(SwapCountBound::new(count, timeframe)),
                Operator::LessThanEqual => max = Some(SwapCountBound::new(count, timeframe)),
                _ => return None,
            }
        }
        kind.map(|kind| SwapCountRange::new(kind, min, max))
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
