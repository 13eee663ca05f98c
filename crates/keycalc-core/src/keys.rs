//! Abstract key input: validated digits and operator symbols.

use std::fmt;

use crate::error::KeyError;

/// A single base-10 digit (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// The digit as a small integer.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = KeyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(KeyError::InvalidDigit(value))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(KeyError::InvalidDigitChar(c))
    }
}

impl From<Digit> for f64 {
    fn from(d: Digit) -> Self {
        f64::from(d.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user action as delivered by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Digit(Digit),
    /// Any operator button, resolved later by the registry.
    Symbol(String),
}

impl Key {
    /// Convenience constructor for symbol keys.
    #[must_use]
    pub fn symbol(s: impl Into<String>) -> Self {
        Self::Symbol(s.into())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Symbol(s) => f.write_str(s),
        }
    }
}

/// Split a key script such as `"12 + 3 ="` into keys.
///
/// ASCII digits become digit keys, whitespace separates nothing and is
/// dropped, `AC` is a single token, and every other character is a
/// one-character symbol.
#[must_use]
pub fn parse_keys(script: &str) -> Vec<Key> {
    let mut keys = Vec::with_capacity(script.len());
    let mut chars = script.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == 'A' && chars.peek() == Some(&'C') {
            chars.next();
            keys.push(Key::symbol("AC"));
            continue;
        }
        match Digit::try_from(c) {
            Ok(d) if c.is_ascii_digit() => keys.push(Key::Digit(d)),
            _ => keys.push(Key::Symbol(c.to_string())),
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: u8) -> Key {
        Key::Digit(Digit::try_from(n).unwrap())
    }

    #[test]
    fn digit_bounds() {
        assert!(Digit::try_from(0u8).is_ok());
        assert!(Digit::try_from(9u8).is_ok());
        assert_eq!(Digit::try_from(10u8), Err(KeyError::InvalidDigit(10)));
    }

    #[test]
    fn digit_from_char() {
        assert_eq!(Digit::try_from('7').unwrap().get(), 7);
        assert_eq!(Digit::try_from('x'), Err(KeyError::InvalidDigitChar('x')));
    }

    #[test]
    fn parse_simple_script() {
        let keys = parse_keys("12+3=");
        assert_eq!(
            keys,
            vec![d(1), d(2), Key::symbol("+"), d(3), Key::symbol("=")]
        );
    }

    #[test]
    fn parse_skips_whitespace() {
        assert_eq!(parse_keys(" 7 /  0 = "), parse_keys("7/0="));
    }

    #[test]
    fn parse_clear_tokens() {
        assert_eq!(parse_keys("AC"), vec![Key::symbol("AC")]);
        assert_eq!(parse_keys("C"), vec![Key::symbol("C")]);
        assert_eq!(parse_keys("A"), vec![Key::symbol("A")]);
    }

    #[test]
    fn parse_non_ascii_digits_are_symbols() {
        // Arabic-Indic digit three.
        assert_eq!(parse_keys("\u{663}"), vec![Key::symbol("\u{663}")]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_keys("").is_empty());
    }
}
