//! The four binary operations and the division-by-zero marker.

use crate::constants::NO_OPERATOR_RESULT;
use crate::state::{Number, OperatorKind, Outcome};

/// Apply `kind` to `a` and `b`.
///
/// Division by zero yields [`Outcome::Error`] rather than a failure.
#[must_use]
pub fn apply(a: Number, b: Number, kind: OperatorKind) -> Outcome {
    match kind {
        OperatorKind::Add => Outcome::Value(a + b),
        OperatorKind::Subtract => Outcome::Value(a - b),
        OperatorKind::Multiply => Outcome::Value(a * b),
        OperatorKind::Divide if b == 0.0 => Outcome::Error,
        OperatorKind::Divide => Outcome::Value(a / b),
    }
}

/// Evaluate with a possibly missing operator.
///
/// Without a pending operator the result is `0`, whatever the operands.
#[must_use]
pub fn evaluate(a: Number, b: Number, kind: Option<OperatorKind>) -> Outcome {
    match kind {
        Some(kind) => apply(a, b, kind),
        None => Outcome::Value(NO_OPERATOR_RESULT),
    }
}
