//! Digit-by-digit operand accumulation.

use crate::constants::RADIX;
use crate::keys::Digit;
use crate::state::Number;

/// Append `digit` to the operand held in `slot`.
///
/// An unset slot starts at the digit itself; otherwise the existing value is
/// shifted one decimal place left. Magnitude is not bounded here.
#[must_use]
pub fn append_digit(slot: Option<Number>, digit: Digit) -> Number {
    let d = Number::from(digit);
    match slot {
        None => d,
        Some(value) => value * RADIX + d,
    }
}
