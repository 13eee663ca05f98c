//! Operator registry: maps user-facing symbols to operations.

use std::collections::HashMap;

use crate::state::OperatorKind;

/// Zero-argument actions reachable from the operator keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialAction {
    /// Reset the session.
    Clear,
    /// Evaluate the pending operation now.
    Evaluate,
}

/// A registered operator key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorEntry {
    /// A binary operator and the glyph echoed while it is pending.
    Arithmetic { kind: OperatorKind, glyph: String },
    Special(SpecialAction),
}

impl OperatorEntry {
    #[must_use]
    pub fn arithmetic(kind: OperatorKind, glyph: &str) -> Self {
        Self::Arithmetic {
            kind,
            glyph: glyph.to_string(),
        }
    }
}

/// Result of looking up a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Arithmetic { kind: OperatorKind, glyph: String },
    Special(SpecialAction),
    /// The symbol is not registered; the engine ignores it.
    Unrecognized,
}

/// Symbol table consulted once per operator key press.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    entries: HashMap<String, OperatorEntry>,
}

impl OperatorRegistry {
    /// Create a registry with no symbols.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create the standard four-function keypad registry.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("+", OperatorEntry::arithmetic(OperatorKind::Add, "+"));
        for minus in ["-", "\u{2212}"] {
            registry.register(minus, OperatorEntry::arithmetic(OperatorKind::Subtract, "-"));
        }
        for times in ["*", "x", "\u{d7}"] {
            registry.register(times, OperatorEntry::arithmetic(OperatorKind::Multiply, "\u{d7}"));
        }
        for divide in ["/", "\u{f7}"] {
            registry.register(divide, OperatorEntry::arithmetic(OperatorKind::Divide, "\u{f7}"));
        }
        registry.register("=", OperatorEntry::Special(SpecialAction::Evaluate));
        for clear in ["C", "c", "AC"] {
            registry.register(clear, OperatorEntry::Special(SpecialAction::Clear));
        }
        registry
    }

    /// Register (or replace) a symbol.
    pub fn register(&mut self, symbol: &str, entry: OperatorEntry) {
        self.entries.insert(symbol.to_string(), entry);
    }

    /// Look up a symbol.
    #[must_use]
    pub fn resolve(&self, symbol: &str) -> Resolution {
        match self.entries.get(symbol) {
            Some(OperatorEntry::Arithmetic { kind, glyph }) => Resolution::Arithmetic {
                kind: *kind,
                glyph: glyph.clone(),
            },
            Some(OperatorEntry::Special(action)) => Resolution::Special(*action),
            None => Resolution::Unrecognized,
        }
    }

    /// All registered symbols, sorted.
    #[must_use]
    pub fn available(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_arithmetic_symbols() {
        let registry = OperatorRegistry::new();
        assert_eq!(
            registry.resolve("+"),
            Resolution::Arithmetic {
                kind: OperatorKind::Add,
                glyph: "+".to_string()
            }
        );
        assert_eq!(
            registry.resolve("*"),
            Resolution::Arithmetic {
                kind: OperatorKind::Multiply,
                glyph: "\u{d7}".to_string()
            }
        );
    }

    #[test]
    fn typographic_minus_echoes_dash() {
        let registry = OperatorRegistry::new();
        assert_eq!(
            registry.resolve("\u{2212}"),
            Resolution::Arithmetic {
                kind: OperatorKind::Subtract,
                glyph: "-".to_string()
            }
        );
    }

    #[test]
    fn resolves_special_actions() {
        let registry = OperatorRegistry::new();
        assert_eq!(
            registry.resolve("="),
            Resolution::Special(SpecialAction::Evaluate)
        );
        assert_eq!(registry.resolve("C"), Resolution::Special(SpecialAction::Clear));
        assert_eq!(registry.resolve("AC"), Resolution::Special(SpecialAction::Clear));
    }

    #[test]
    fn unknown_symbol_is_unrecognized() {
        let registry = OperatorRegistry::new();
        assert_eq!(registry.resolve("%"), Resolution::Unrecognized);
        assert_eq!(registry.resolve(""), Resolution::Unrecognized);
    }

    #[test]
    fn register_custom_symbol() {
        let mut registry = OperatorRegistry::new();
        registry.register(
            "plus",
            OperatorEntry::arithmetic(OperatorKind::Add, "+"),
        );
        assert!(matches!(
            registry.resolve("plus"),
            Resolution::Arithmetic {
                kind: OperatorKind::Add,
                ..
            }
        ));
    }

    #[test]
    fn available_is_sorted() {
        let registry = OperatorRegistry::new();
        let available = registry.available();
        assert!(available.contains(&"+"));
        assert!(available.contains(&"="));
        assert!(available.windows(2).all(|w| w[0] <= w[1]));
    }
}
