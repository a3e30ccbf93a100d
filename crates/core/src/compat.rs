//! Field/operator compatibility table.
//!
//! The single source of truth for which operators a field supports,
//! which value kinds each (field, operator) pair accepts, and which
//! lookback timeframes apply (an empty set means the entry is
//! instantaneous). The editor widgets and [`crate::Condition::validate`]
//! consult the same entries; any Compare tuple outside them is invalid.
//!
//! The table is pure static data with process lifetime. Lookups never
//! allocate.

use crate::error::ConditionError;
use crate::field::Field;
use crate::operator::Operator;
use crate::timeframe::Timeframe;
use crate::value::ValueKind;

const EQUALITY_OPS: &[Operator] = &[Operator::Equal, Operator::NotEqual];

const DELTA_OPS: &[Operator] = &[
    Operator::IncreasedByMoreThan,
    Operator::IncreasedByMoreThanEqual,
    Operator::DecreasedByMoreThan,
    Operator::DecreasedByMoreThanEqual,
];

const THRESHOLD_OPS: &[Operator] = &[
    Operator::MoreThan,
    Operator::MoreThanEqual,
    Operator::LessThan,
    Operator::LessThanEqual,
];

/// PRICE takes windowed deltas and instantaneous thresholds.
const PRICE_OPS: &[Operator] = &[
    Operator::IncreasedByMoreThan,
    Operator::IncreasedByMoreThanEqual,
    Operator::DecreasedByMoreThan,
    Operator::DecreasedByMoreThanEqual,
    Operator::MoreThan,
    Operator::MoreThanEqual,
    Operator::LessThan,
    Operator::LessThanEqual,
];

const COUNT_OR_PERCENT: &[ValueKind] = &[ValueKind::Count, ValueKind::Percent];
const PERCENT_ONLY: &[ValueKind] = &[ValueKind::Percent];
const DURATION_ONLY: &[ValueKind] = &[ValueKind::Duration];
const CURRENCY_KINDS: &[ValueKind] = &[ValueKind::Sol, ValueKind::Usd, ValueKind::Quote];
const STRING_ONLY: &[ValueKind] = &[ValueKind::String];

const NO_KINDS: &[ValueKind] = &[];
const NO_TIMEFRAMES: &[Timeframe] = &[];

/// Operators the field supports.
pub fn operators(field: Field) -> &'static [Operator] {
    match field {
        Field::Price => PRICE_OPS,
        Field::MarketCap => THRESHOLD_OPS,
        Field::Trades => DELTA_OPS,
        Field::TradesBuy | Field::TradesSell | Field::TradesTotal => THRESHOLD_OPS,
        Field::CurveProgress | Field::CurveProgressAge => THRESHOLD_OPS,
        Field::Venue => EQUALITY_OPS,
    }
}

/// Value kinds the (field, operator) entry accepts. Empty when the
/// operator is not supported for the field at all.
pub fn value_kinds(field: Field, operator: Operator) -> &'static [ValueKind] {
    if !operators(field).contains(&operator) {
        return NO_KINDS;
    }
    match field {
        Field::Price => {
            if operator.is_delta() {
                PERCENT_ONLY
            } else {
                CURRENCY_KINDS
            }
        }
        Field::MarketCap => CURRENCY_KINDS,
        Field::Trades | Field::TradesBuy | Field::TradesSell | Field::TradesTotal => {
            COUNT_OR_PERCENT
        }
        Field::CurveProgress => PERCENT_ONLY,
        Field::CurveProgressAge => DURATION_ONLY,
        Field::Venue => STRING_ONLY,
    }
}

/// Lookback windows the (field, operator) entry applies over. Empty
/// means the comparison is instantaneous and takes no timeframe.
pub fn timeframes(field: Field, operator: Operator) -> &'static [Timeframe] {
    if !operators(field).contains(&operator) {
        return NO_TIMEFRAMES;
    }
    match field {
        Field::Price => {
            if operator.is_delta() {
                &Timeframe::ALL
            } else {
                NO_TIMEFRAMES
            }
        }
        Field::Trades | Field::TradesBuy | Field::TradesSell | Field::TradesTotal => {
            &Timeframe::ALL
        }
        Field::MarketCap | Field::CurveProgress | Field::CurveProgressAge | Field::Venue => {
            NO_TIMEFRAMES
        }
    }
}

/// Reject any (field, operator, value kind, timeframe) tuple the table
/// does not license. A timeframe is required exactly when the entry
/// lists applicable windows.
pub fn check_compare(
    field: Field,
    operator: Operator,
    kind: ValueKind,
    timeframe: Option<Timeframe>,
) -> Result<(), ConditionError> {
    if !operators(field).contains(&operator) {
        return Err(ConditionError::OperatorNotSupported { field, operator });
    }
    if !value_kinds(field, operator).contains(&kind) {
        return Err(ConditionError::ValueKindNotSupported {
            field,
            operator,
            kind,
        });
    }
    let windows = timeframes(field, operator);
    match timeframe {
        Some(_) if windows.is_empty() => {
            Err(ConditionError::TimeframeNotApplicable { field, operator })
        }
        None if !windows.is_empty() => Err(ConditionError::TimeframeRequired { field, operator }),
        _ => Ok(()),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trades_supports_exactly_the_delta_operators() {
        assert_eq!(operators(Field::Trades), DELTA_OPS);
        assert_eq!(
            value_kinds(Field::Trades, Operator::IncreasedByMoreThan),
            COUNT_OR_PERCENT
        );
        assert_eq!(
            timeframes(Field::Trades, Operator::DecreasedByMoreThanEqual),
            &Timeframe::ALL
        );
    }

    #[test]
    fn trades_rejects_absolute_thresholds() {
        assert!(value_kinds(Field::Trades, Operator::MoreThan).is_empty());
        assert_eq!(
            check_compare(
                Field::Trades,
                Operator::MoreThan,
                ValueKind::Count,
                Some(Timeframe::H1),
            ),
            Err(ConditionError::OperatorNotSupported {
                field: Field::Trades,
                operator: Operator::MoreThan,
            })
        );
    }

    #[test]
    fn buy_and_sell_counts_are_windowed_thresholds() {
        for field in [Field::TradesBuy, Field::TradesSell, Field::TradesTotal] {
            assert_eq!(operators(field), THRESHOLD_OPS);
            assert_eq!(value_kinds(field, Operator::LessThan), COUNT_OR_PERCENT);
            assert_eq!(timeframes(field, Operator::MoreThanEqual), &Timeframe::ALL);
        }
    }

    #[test]
    fn curve_progress_is_instantaneous_percent() {
        assert_eq!(operators(Field::CurveProgress), THRESHOLD_OPS);
        assert_eq!(
            value_kinds(Field::CurveProgress, Operator::MoreThan),
            PERCENT_ONLY
        );
        assert!(timeframes(Field::CurveProgress, Operator::MoreThan).is_empty());
    }

    #[test]
    fn curve_age_is_instantaneous_duration() {
        assert_eq!(
            value_kinds(Field::CurveProgressAge, Operator::LessThanEqual),
            DURATION_ONLY
        );
        assert!(timeframes(Field::CurveProgressAge, Operator::LessThan).is_empty());
    }

    #[test]
    fn timeframe_required_when_entry_is_windowed() {
        assert_eq!(
            check_compare(
                Field::TradesBuy,
                Operator::MoreThan,
                ValueKind::Count,
                None,
            ),
            Err(ConditionError::TimeframeRequired {
                field: Field::TradesBuy,
                operator: Operator::MoreThan,
            })
        );
    }

    #[test]
    fn timeframe_rejected_on_instantaneous_entry() {
        assert_eq!(
            check_compare(
                Field::CurveProgress,
                Operator::MoreThan,
                ValueKind::Percent,
                Some(Timeframe::M5),
            ),
            Err(ConditionError::TimeframeNotApplicable {
                field: Field::CurveProgress,
                operator: Operator::MoreThan,
            })
        );
    }

    #[test]
    fn value_kind_outside_entry_is_rejected() {
        assert_eq!(
            check_compare(
                Field::CurveProgress,
                Operator::MoreThan,
                ValueKind::Duration,
                None,
            ),
            Err(ConditionError::ValueKindNotSupported {
                field: Field::CurveProgress,
                operator: Operator::MoreThan,
                kind: ValueKind::Duration,
            })
        );
    }

    #[test]
    fn market_cap_accepts_every_denomination() {
        assert_eq!(
            value_kinds(Field::MarketCap, Operator::MoreThanEqual),
            CURRENCY_KINDS
        );
        assert!(check_compare(
            Field::MarketCap,
            Operator::LessThanEqual,
            ValueKind::Usd,
            None,
        )
        .is_ok());
    }

    #[test]
    fn venue_is_equality_over_strings() {
        assert_eq!(operators(Field::Venue), EQUALITY_OPS);
        assert!(check_compare(Field::Venue, Operator::Equal, ValueKind::String, None).is_ok());
        assert_eq!(
            check_compare(Field::Venue, Operator::MoreThan, ValueKind::String, None),
            Err(ConditionError::OperatorNotSupported {
                field: Field::Venue,
                operator: Operator::MoreThan,
            })
        );
    }

    #[test]
    fn price_splits_kinds_by_operator_family() {
        assert_eq!(
            value_kinds(Field::Price, Operator::IncreasedByMoreThan),
            PERCENT_ONLY
        );
        assert_eq!(value_kinds(Field::Price, Operator::MoreThan), CURRENCY_KINDS);
        assert_eq!(
            timeframes(Field::Price, Operator::IncreasedByMoreThan),
            &Timeframe::ALL
        );
        assert!(timeframes(Field::Price, Operator::MoreThan).is_empty());
    }
}
