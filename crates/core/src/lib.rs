//! tripwire-core: the condition data model for tripwire trigger rules.
//!
//! A rule's trigger logic is a recursive [`Condition`] tree (AND groups,
//! COMPARE leaves, COMPOSE macros) over typed [`Value`]s. This crate
//! owns the tree, the value model, the field/operator compatibility
//! table that licenses every leaf, and the JSON wire shape the rules
//! endpoint consumes. Everything is pure data and deterministic
//! functions: no I/O, no clock, no shared state.
//!
//! # Public API
//!
//! - [`Condition`] -- the tree; constructors validate against the table
//! - [`Value`], [`Duration`], [`compare_durations`] -- typed scalars
//! - [`compat`] -- operator / value-kind / timeframe lookups
//! - [`Sequence`], [`Action`] -- the submission body
//! - [`ConditionError`], [`ValueError`], [`RenderError`] -- failure modes

pub mod compat;
pub mod condition;
pub mod error;
pub mod field;
pub mod operator;
pub mod sequence;
pub mod timeframe;
pub mod value;

pub use condition::{Composition, Condition};
pub use error::{ConditionError, RenderError, ValueError};
pub use field::Field;
pub use operator::Operator;
pub use sequence::{Action, ButtonAction, Sequence, TelegramButton};
pub use timeframe::Timeframe;
pub use value::{compare_durations, Duration, TimeUnit, Value, ValueKind};
