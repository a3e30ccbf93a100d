//! Display formatting for bound values.
//!
//! Exact output is load-bearing: the editor pins these strings in its
//! snapshots and the validation messages embed them verbatim.

use tripwire_core::{Duration, RenderError, Value};

/// Format a denominated or dimensionless amount.
///
/// SOL suffixes the denomination ("23 SOL"), USD prefixes "$" ("$23"),
/// PERCENT suffixes "%", COUNT and QUOTE are plain numbers. Any other
/// kind is not an amount and fails naming the kind, so schema drift
/// surfaces instead of rendering garbage.
pub fn format_amount(value: &Value) -> Result<String, RenderError> {
    match value {
        Value::Count { value } => Ok(value.to_string()),
        Value::Percent { value } => Ok(format!("{}%", value)),
        Value::Sol { value } => Ok(format!("{} SOL", value)),
        Value::Usd { value } => Ok(format!("${}", value)),
        Value::Quote { value } => Ok(value.to_string()),
        other => Err(RenderError::UnsupportedKind { kind: other.kind() }),
    }
}

/// Format a duration in its own unit, pluralizing the unit word.
pub fn format_duration(duration: Duration) -> String {
    if duration.value == 1 {
        format!("1 {}", duration.unit.word())
    } else {
        format!("{} {}s", duration.value, duration.unit.word())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tripwire_core::{TimeUnit, ValueKind};

    #[test]
    fn sol_amounts_suffix_the_denomination() {
        let v = Value::Sol {
            value: Decimal::from(23),
        };
        assert_eq!(format_amount(&v).unwrap(), "23 SOL");
    }

    #[test]
    fn usd_amounts_prefix_a_dollar_sign() {
        let v = Value::Usd {
            value: Decimal::from(23),
        };
        assert_eq!(format_amount(&v).unwrap(), "$23");
    }

    #[test]
    fn percent_amounts_suffix_a_percent_sign() {
        let v = Value::Percent {
            value: Decimal::from(42),
        };
        assert_eq!(format_amount(&v).unwrap(), "42%");
    }

    #[test]
    fn counts_and_quote_amounts_are_plain() {
        assert_eq!(format_amount(&Value::Count { value: 7 }).unwrap(), "7");
        let quote = Value::Quote {
            value: Decimal::from(1000),
        };
        assert_eq!(format_amount(&quote).unwrap(), "1000");
    }

    #[test]
    fn non_amount_kind_fails_naming_the_kind() {
        let v = Value::String {
            value: "pump".to_string(),
        };
        let err = format_amount(&v).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnsupportedKind {
                kind: ValueKind::String,
            }
        );
        assert_eq!(
            err.to_string(),
            "unsupported value kind for amount formatting: STRING"
        );
    }

    #[test]
    fn durations_pluralize_their_unit_word() {
        assert_eq!(
            format_duration(Duration::new(1, TimeUnit::Minute)),
            "1 minute"
        );
        assert_eq!(
            format_duration(Duration::new(5, TimeUnit::Minute)),
            "5 minutes"
        );
        assert_eq!(
            format_duration(Duration::new(600, TimeUnit::Second)),
            "600 seconds"
        );
        assert_eq!(format_duration(Duration::new(2, TimeUnit::Hour)), "2 hours");
    }
}
