//! Projection of the session state onto the single display value.

use std::fmt;

use serde::Serialize;

use crate::constants::ERROR_TEXT;
use crate::state::{CalculatorState, Number, Outcome, Phase};

/// What the calculator display shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DisplayValue {
    /// Nothing typed yet.
    Blank,
    Number(Number),
    /// The glyph of the pending operator.
    Symbol(String),
    /// Division by zero.
    Error,
}

impl DisplayValue {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl From<Outcome> for DisplayValue {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Value(v) => Self::Number(v),
            Outcome::Error => Self::Error,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            // Adding +0.0 turns -0.0 into 0.0 and leaves every other value alone
            Self::Number(n) => write!(f, "{}", n + 0.0),
            Self::Symbol(s) => f.write_str(s),
            Self::Error => f.write_str(ERROR_TEXT),
        }
    }
}

/// Derive the display value from `state`. Pure.
#[must_use]
pub fn project(state: &CalculatorState) -> DisplayValue {
    let number_or_blank =
        |slot: Option<Number>| slot.map_or(DisplayValue::Blank, DisplayValue::Number);
    match state.phase {
        Phase::EnteringFirst => number_or_blank(state.first_operand),
        Phase::EnteringOperator => state
            .display_symbol
            .clone()
            .map_or(DisplayValue::Blank, DisplayValue::Symbol),
        Phase::EnteringSecond => number_or_blank(state.second_operand),
        Phase::ShowingResult => state.result.map_or(DisplayValue::Blank, DisplayValue::from),
    }
}
