//! The per-session state record and the types it is built from.

use std::fmt;

use serde::Serialize;

use crate::constants::ERROR_TEXT;

/// Numeric type of operands and results.
pub type Number = f64;

/// The four mutually exclusive input modes of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Typing the left-hand operand. Initial phase.
    #[default]
    EnteringFirst,
    /// An operator was chosen; waiting for the right-hand operand.
    EnteringOperator,
    /// Typing the right-hand operand.
    EnteringSecond,
    /// An evaluation happened and its outcome is on display.
    ShowingResult,
}

impl Phase {
    /// Short name used in logs and the TUI header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EnteringFirst => "first",
            Self::EnteringOperator => "operator",
            Self::EnteringSecond => "second",
            Self::ShowingResult => "result",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Binary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A finite or infinite numeric result.
    Value(Number),
    /// Division by zero.
    Error,
}

impl Outcome {
    /// The numeric value, if this is not the error marker.
    #[must_use]
    pub fn value(self) -> Option<Number> {
        match self {
            Self::Value(v) => Some(v),
            Self::Error => None,
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v + 0.0),
            Self::Error => f.write_str(ERROR_TEXT),
        }
    }
}

/// The single mutable record of a calculator session.
///
/// Fields are only written by [`crate::phase::advance`]; everything outside
/// the crate reads them through the accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorState {
    pub(crate) first_operand: Option<Number>,
    pub(crate) second_operand: Option<Number>,
    pub(crate) pending_operator: Option<OperatorKind>,
    pub(crate) display_symbol: Option<String>,
    pub(crate) result: Option<Outcome>,
    pub(crate) phase: Phase,
}

impl CalculatorState {
    /// Fresh state: every field unset, phase `EnteringFirst`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn first_operand(&self) -> Option<Number> {
        self.first_operand
    }

    #[must_use]
    pub fn second_operand(&self) -> Option<Number> {
        self.second_operand
    }

    #[must_use]
    pub fn pending_operator(&self) -> Option<OperatorKind> {
        self.pending_operator
    }

    #[must_use]
    pub fn display_symbol(&self) -> Option<&str> {
        self.display_symbol.as_deref()
    }

    #[must_use]
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check the structural invariants that must hold between operations.
    ///
    /// Returns a description of the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), String> {
        let showing = self.phase == Phase::ShowingResult;
        if self.result.is_some() != showing {
            return Err(format!(
                "result is {} in phase {}",
                if self.result.is_some() { "set" } else { "unset" },
                self.phase
            ));
        }
        if self.second_operand.is_some()
            && !matches!(self.phase, Phase::EnteringSecond | Phase::ShowingResult)
        {
            return Err(format!("second operand set in phase {}", self.phase));
        }
        if self.pending_operator.is_none()
            && matches!(self.phase, Phase::EnteringOperator | Phase::EnteringSecond)
        {
            return Err(format!("no pending operator in phase {}", self.phase));
        }
        if self.pending_operator.is_some() != self.display_symbol.is_some() {
            return Err("pending operator and display symbol disagree".to_string());
        }
        Ok(())
    }
}
