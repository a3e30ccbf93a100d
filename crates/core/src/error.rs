use crate::field::Field;
use crate::operator::Operator;
use crate::value::ValueKind;

/// Structural invalidity: a tuple the compatibility table does not
/// license, or a malformed tree. Raised at construction/edit time, not
/// deferred to submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// The field does not support this operator at all.
    #[error("operator {operator} is not supported for field {field}")]
    OperatorNotSupported { field: Field, operator: Operator },

    /// The (field, operator) entry does not accept this value kind.
    #[error("value kind {kind} is not accepted by {field} {operator}")]
    ValueKindNotSupported {
        field: Field,
        operator: Operator,
        kind: ValueKind,
    },

    /// The entry lists lookback windows, so a timeframe must be given.
    #[error("{field} {operator} requires a timeframe")]
    TimeframeRequired { field: Field, operator: Operator },

    /// The entry is instantaneous; a timeframe makes no sense here.
    #[error("{field} {operator} does not take a timeframe")]
    TimeframeNotApplicable { field: Field, operator: Operator },

    /// Node ids address edits; two nodes sharing one breaks the contract.
    #[error("duplicate node id {id} in condition tree")]
    DuplicateId { id: String },

    /// Quick-buy buttons carry a denominated amount, nothing else.
    #[error("buy button amount must be currency-denominated, got {kind}")]
    ButtonAmountNotCurrency { kind: ValueKind },
}

/// Comparison failures between two bound values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The operands carry different kind tags (e.g. a SOL minimum against
    /// a USD maximum). There is no exchange-rate conversion anywhere in
    /// this crate; callers must keep both bounds in one denomination.
    #[error("cannot compare {left} with {right}")]
    KindMismatch { left: ValueKind, right: ValueKind },

    /// The kind has no ordering (BOOLEAN, STRING).
    #[error("{kind} values have no ordering")]
    Unordered { kind: ValueKind },
}

/// Display-layer failures. Formatters fail loudly on values they do not
/// know how to render so schema drift surfaces immediately.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unsupported value kind for amount formatting: {kind}")]
    UnsupportedKind { kind: ValueKind },

    #[error("unrecognized timeframe: {literal}")]
    UnknownTimeframe { literal: String },

    #[error("unrecognized time unit: {literal}")]
    UnknownTimeUnit { literal: String },
}
