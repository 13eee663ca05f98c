//! Phase controller: the single transition table of the engine.
//!
//! Every mutation of [`CalculatorState`] goes through [`advance`]. Public
//! engine operations only translate their input into an [`Event`] and hand
//! it here.

use std::fmt;

use crate::accumulator::append_digit;
use crate::evaluator::evaluate;
use crate::keys::Digit;
use crate::registry::{Resolution, SpecialAction};
use crate::state::{CalculatorState, OperatorKind, Outcome, Phase};

/// A resolved user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Digit(Digit),
    /// An arithmetic operator together with the glyph to echo.
    Operator { kind: OperatorKind, glyph: String },
    Evaluate,
    Clear,
}

impl Event {
    /// Turn a registry lookup into an event. Unrecognized symbols have none.
    #[must_use]
    pub fn from_resolution(resolution: Resolution) -> Option<Self> {
        match resolution {
            Resolution::Arithmetic { kind, glyph } => Some(Self::Operator { kind, glyph }),
            Resolution::Special(SpecialAction::Evaluate) => Some(Self::Evaluate),
            Resolution::Special(SpecialAction::Clear) => Some(Self::Clear),
            Resolution::Unrecognized => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Operator { glyph, .. } => f.write_str(glyph),
            Self::Evaluate => f.write_str("="),
            Self::Clear => f.write_str("C"),
        }
    }
}

/// Compute the state that follows `state` on `event`.
#[must_use]
pub fn advance(state: CalculatorState, event: &Event) -> CalculatorState {
    match event {
        Event::Clear => CalculatorState::default(),
        Event::Digit(digit) => on_digit(state, *digit),
        Event::Operator { kind, glyph } => on_operator(state, *kind, glyph),
        Event::Evaluate => on_evaluate(state),
    }
}

fn on_digit(mut state: CalculatorState, digit: Digit) -> CalculatorState {
    match state.phase {
        Phase::EnteringFirst => {
            state.first_operand = Some(append_digit(state.first_operand, digit));
        }
        Phase::EnteringOperator | Phase::EnteringSecond => {
            state.second_operand = Some(append_digit(state.second_operand, digit));
            state.phase = Phase::EnteringSecond;
        }
        // A new digit discards the previous result, error included.
        Phase::ShowingResult => {
            state = CalculatorState {
                first_operand: Some(append_digit(None, digit)),
                ..CalculatorState::default()
            };
        }
    }
    state
}

fn on_operator(mut state: CalculatorState, kind: OperatorKind, glyph: &str) -> CalculatorState {
    match state.phase {
        Phase::EnteringFirst => {
            if state.first_operand.is_none() {
                return state;
            }
            install_operator(&mut state, kind, glyph);
        }
        Phase::EnteringOperator => install_operator(&mut state, kind, glyph),
        Phase::EnteringSecond => {
            let (Some(a), Some(b)) = (state.first_operand, state.second_operand) else {
                return state;
            };
            match evaluate(a, b, state.pending_operator) {
                Outcome::Value(v) => promote(&mut state, v, kind, glyph),
                Outcome::Error => {
                    state.result = Some(Outcome::Error);
                    state.phase = Phase::ShowingResult;
                }
            }
        }
        Phase::ShowingResult => {
            // The error marker is never used as an operand.
            if let Some(Outcome::Value(v)) = state.result {
                promote(&mut state, v, kind, glyph);
            }
        }
    }
    state
}

fn on_evaluate(mut state: CalculatorState) -> CalculatorState {
    match state.phase {
        Phase::EnteringFirst => {
            let a = state.first_operand.unwrap_or_default();
            state.result = Some(evaluate(a, 0.0, state.pending_operator));
            state.phase = Phase::ShowingResult;
        }
        Phase::EnteringSecond => {
            if let (Some(a), Some(b)) = (state.first_operand, state.second_operand) {
                state.result = Some(evaluate(a, b, state.pending_operator));
                state.phase = Phase::ShowingResult;
            }
        }
        Phase::EnteringOperator | Phase::ShowingResult => {}
    }
    state
}

fn install_operator(state: &mut CalculatorState, kind: OperatorKind, glyph: &str) {
    state.pending_operator = Some(kind);
    state.display_symbol = Some(glyph.to_string());
    state.phase = Phase::EnteringOperator;
}

/// Carry `value` into the first operand and start a new operation.
fn promote(state: &mut CalculatorState, value: f64, kind: OperatorKind, glyph: &str) {
    state.first_operand = Some(value);
    state.second_operand = None;
    state.result = None;
    install_operator(state, kind, glyph);
}
