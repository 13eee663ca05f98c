//! # keycalc-core
//!
//! Input/evaluation engine of a four-function calculator. Digit and operator
//! presses drive a phase state machine; the display value is projected from
//! the resulting state.

pub mod accumulator;
pub mod constants;
pub mod display;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod keys;
pub mod observer;
pub mod observers;
pub mod phase;
pub mod registry;
pub mod state;

// Re-exports
pub use constants::{exit_codes, ERROR_TEXT};
pub use display::DisplayValue;
pub use engine::{CalculatorEngine, StateSnapshot};
pub use error::KeyError;
pub use keys::{parse_keys, Digit, Key};
pub use observer::{Transition, TransitionObserver};
pub use phase::Event;
pub use registry::{OperatorEntry, OperatorRegistry, Resolution, SpecialAction};
pub use state::{CalculatorState, Number, OperatorKind, Outcome, Phase};

/// Replay a key script on a fresh session and return what the display shows.
///
/// This is a convenience function for one-shot use. Long-lived sessions
/// should hold a [`CalculatorEngine`].
///
/// # Example
/// ```
/// assert_eq!(keycalc_core::calculate("12+30=").to_string(), "42");
/// assert_eq!(keycalc_core::calculate("7/0=").to_string(), "Error");
/// ```
#[must_use]
pub fn calculate(script: &str) -> DisplayValue {
    CalculatorEngine::new().run(script)
}
