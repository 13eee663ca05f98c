//! Error type for malformed key input.

/// Error raised when raw input cannot be turned into a key.
///
/// Arithmetic never produces this type: division by zero is a
/// representable [`Outcome`](crate::state::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// A numeric value outside `0..=9`.
    #[error("invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// A character that is not an ASCII decimal digit.
    #[error("invalid digit character: {0:?}")]
    InvalidDigitChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_error_display() {
        let err = KeyError::InvalidDigit(12);
        assert_eq!(err.to_string(), "invalid digit: 12 (expected 0-9)");

        let err = KeyError::InvalidDigitChar('a');
        assert_eq!(err.to_string(), "invalid digit character: 'a'");
    }
}
