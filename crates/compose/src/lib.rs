//! tripwire-compose: composition presets and bound validation.
//!
//! Preset widgets edit a (min, max) bound pair as a unit; this crate
//! expands those pairs into canonical condition trees, reads the bounds
//! back losslessly, and classifies each pair into the editor's message
//! states (contradiction, degenerate, single-bound, empty). Display
//! strings are pinned -- the editor shows them verbatim.
//!
//! # Public API
//!
//! - [`CurveProgressRange`], [`TokenAgeRange`], [`MarketCapRange`],
//!   [`SwapCountRange`] -- the presets
//! - [`RangeClass`], [`Likelihood`], [`RangeMessage`] -- classification
//! - [`format_amount`], [`format_duration`] -- pinned display helpers
//! - [`default_rule_condition`] -- the tree a new rule starts from

pub mod curve_progress;
pub mod market_cap;
pub mod range;
pub mod render;
pub mod swap_count;
pub mod token_age;

pub use curve_progress::CurveProgressRange;
pub use market_cap::MarketCapRange;
pub use range::{BoundsError, Likelihood, RangeClass, RangeMessage};
pub use render::{format_amount, format_duration};
pub use swap_count::{SwapCountBound, SwapCountRange, SwapKind};
pub use token_age::TokenAgeRange;

use tripwire_core::{Condition, ConditionError};

/// The condition tree a freshly created rule starts from: the
/// curve-progress preset with placeholder bounds.
pub fn default_rule_condition() -> Result<Condition, ConditionError> {
    CurveProgressRange::default().expand()
}
