//! Bound-pair classification shared by the validating presets.
//!
//! Contradictory bounds are never an error: they classify into a message
//! state the editor renders next to the widget.

use std::cmp::Ordering;
use std::fmt;

use tripwire_core::{RenderError, ValueError};

/// How a (min, max) bound pair relates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeClass {
    /// Neither bound present; nothing to render.
    Empty,
    /// Only the lower bound present.
    MinOnly,
    /// Only the upper bound present.
    MaxOnly,
    /// Both present, min < max.
    Bounded,
    /// Both present and equal after normalization.
    Exact,
    /// Both present, min > max: the pair can never hold.
    Inverted,
}

/// Execution-likelihood verdict attached to a classified pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Likelihood {
    /// The bounds contradict each other.
    Never,
    /// The bounds only admit a single instant or value.
    Unlikely,
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Likelihood::Never => f.write_str("will never execute"),
            Likelihood::Unlikely => f.write_str("will most likely not execute"),
        }
    }
}

/// A classified bound pair rendered for the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMessage {
    pub class: RangeClass,
    /// Present for Inverted, and for Exact where the preset warns.
    pub verdict: Option<Likelihood>,
    pub text: String,
}

/// Failures while classifying or rendering a bound pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Classify a pair of optional bounds, given their ordering when both
/// are present.
pub fn classify_bounds<T>(
    min: Option<&T>,
    max: Option<&T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> RangeClass {
    match (min, max) {
        (None, None) => RangeClass::Empty,
        (Some(_), None) => RangeClass::MinOnly,
        (None, Some(_)) => RangeClass::MaxOnly,
        (Some(a), Some(b)) => match cmp(a, b) {
            Ordering::Greater => RangeClass::Inverted,
            Ordering::Equal => RangeClass::Exact,
            Ordering::Less => RangeClass::Bounded,
        },
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_presence_and_ordering() {
        let cmp = |a: &i64, b: &i64| a.cmp(b);
        assert_eq!(classify_bounds::<i64>(None, None, cmp), RangeClass::Empty);
        assert_eq!(classify_bounds(Some(&1), None, cmp), RangeClass::MinOnly);
        assert_eq!(classify_bounds(None, Some(&1), cmp), RangeClass::MaxOnly);
        assert_eq!(
            classify_bounds(Some(&1), Some(&2), cmp),
            RangeClass::Bounded
        );
        assert_eq!(classify_bounds(Some(&2), Some(&2), cmp), RangeClass::Exact);
        assert_eq!(
            classify_bounds(Some(&3), Some(&2), cmp),
            RangeClass::Inverted
        );
    }

    #[test]
    fn verdict_phrases_are_pinned() {
        assert_eq!(Likelihood::Never.to_string(), "will never execute");
        assert_eq!(
            Likelihood::Unlikely.to_string(),
            "will most likely not execute"
        );
    }
}
