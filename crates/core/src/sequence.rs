//! Rule submission body: a condition tree plus the action it fires.
//!
//! The editor serializes a `Sequence` as JSON for `POST /v1/rules` (and
//! `PATCH` on edit); the shape here is that wire contract.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::error::ConditionError;
use crate::value::{Value, ValueKind};

/// What pressing a notification button does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonAction {
    /// Quick-buy with a preset denominated amount.
    Buy { amount: Value },
    /// Drop the notification without trading.
    Dismiss,
}

/// One button on the Telegram notification card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelegramButton {
    pub label: String,
    pub action: ButtonAction,
}

/// What a fired rule does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    NotifyTelegram { buttons: Vec<TelegramButton> },
}

/// Top-level rule body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub condition: Condition,
    pub action: Action,
}

impl Sequence {
    /// Structural check of the whole rule before submission: the
    /// condition tree validates and every quick-buy amount is
    /// currency-denominated.
    pub fn validate(&self) -> Result<(), ConditionError> {
        self.condition.validate()?;
        let Action::NotifyTelegram { buttons } = &self.action;
        for button in buttons {
            if let ButtonAction::Buy { amount } = &button.action {
                match amount.kind() {
                    ValueKind::Sol | ValueKind::Usd | ValueKind::Quote => {}
                    kind => return Err(ConditionError::ButtonAmountNotCurrency { kind }),
                }
            }
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::operator::Operator;
    use rust_decimal::Decimal;

    fn sample_condition() -> Condition {
        Condition::compare(
            Field::CurveProgress,
            Operator::MoreThanEqual,
            Value::Percent {
                value: Decimal::from(10),
            },
            None,
        )
        .unwrap()
    }

    #[test]
    fn validates_buy_amount_denomination() {
        let sequence = Sequence {
            condition: sample_condition(),
            action: Action::NotifyTelegram {
                buttons: vec![TelegramButton {
                    label: "Buy 0.5 SOL".to_string(),
                    action: ButtonAction::Buy {
                        amount: Value::Sol {
                            value: Decimal::new(5, 1),
                        },
                    },
                }],
            },
        };
        assert!(sequence.validate().is_ok());
    }

    #[test]
    fn rejects_non_currency_buy_amount() {
        let sequence = Sequence {
            condition: sample_condition(),
            action: Action::NotifyTelegram {
                buttons: vec![TelegramButton {
                    label: "Buy".to_string(),
                    action: ButtonAction::Buy {
                        amount: Value::Count { value: 1 },
                    },
                }],
            },
        };
        assert_eq!(
            sequence.validate(),
            Err(ConditionError::ButtonAmountNotCurrency {
                kind: ValueKind::Count,
            })
        );
    }

    #[test]
    fn dismiss_buttons_need_no_amount() {
        let sequence = Sequence {
            condition: Condition::and(vec![]),
            action: Action::NotifyTelegram {
                buttons: vec![TelegramButton {
                    label: "Ignore".to_string(),
                    action: ButtonAction::Dismiss,
                }],
            },
        };
        assert!(sequence.validate().is_ok());
    }
}
