//! The calculator engine: one session, one state record.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::display::{project, DisplayValue};
use crate::keys::{parse_keys, Digit, Key};
use crate::observer::{Transition, TransitionObserver, TransitionSubject};
use crate::phase::{advance, Event};
use crate::registry::OperatorRegistry;
use crate::state::{CalculatorState, Number, OperatorKind, Outcome, Phase};

/// Serializable copy of a session's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSnapshot {
    pub phase: Phase,
    pub first_operand: Option<Number>,
    pub second_operand: Option<Number>,
    pub pending_operator: Option<OperatorKind>,
    pub display_symbol: Option<String>,
    pub result: Option<Outcome>,
    /// The display value rendered as text.
    pub display: String,
}

impl StateSnapshot {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A calculator session.
///
/// Owns its [`CalculatorState`] exclusively; callers drive it through
/// [`submit_digit`](Self::submit_digit), [`submit_operator`](Self::submit_operator)
/// and [`reset`](Self::reset), and read it back with
/// [`display_value`](Self::display_value).
pub struct CalculatorEngine {
    state: CalculatorState,
    registry: OperatorRegistry,
    subject: TransitionSubject,
}

impl CalculatorEngine {
    /// Create a session with the standard operator registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(OperatorRegistry::new())
    }

    /// Create a session resolving operators through `registry`.
    #[must_use]
    pub fn with_registry(registry: OperatorRegistry) -> Self {
        Self {
            state: CalculatorState::new(),
            registry,
            subject: TransitionSubject::new(),
        }
    }

    /// Register an observer notified after every applied event.
    pub fn subscribe(&mut self, observer: Arc<dyn TransitionObserver>) {
        self.subject.register(observer);
    }

    /// Append a digit to the active operand.
    pub fn submit_digit(&mut self, digit: Digit) {
        self.apply(Event::Digit(digit));
    }

    /// Resolve `symbol` and apply it. Unregistered symbols are ignored.
    pub fn submit_operator(&mut self, symbol: &str) {
        match Event::from_resolution(self.registry.resolve(symbol)) {
            Some(event) => self.apply(event),
            None => trace!(symbol, "Ignoring unrecognized operator"),
        }
    }

    /// Return every field to unset and the phase to `EnteringFirst`.
    pub fn reset(&mut self) {
        self.apply(Event::Clear);
    }

    /// The value to show on the display.
    #[must_use]
    pub fn display_value(&self) -> DisplayValue {
        project(&self.state)
    }

    /// Dispatch a front-end key.
    pub fn press(&mut self, key: &Key) {
        match key {
            Key::Digit(d) => self.submit_digit(*d),
            Key::Symbol(s) => self.submit_operator(s),
        }
    }

    /// Replay a key script and return the final display value.
    pub fn run(&mut self, script: &str) -> DisplayValue {
        for key in parse_keys(script) {
            self.press(&key);
        }
        self.display_value()
    }

    /// Read-only view of the session state.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Copy the state into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            phase: self.state.phase,
            first_operand: self.state.first_operand,
            second_operand: self.state.second_operand,
            pending_operator: self.state.pending_operator,
            display_symbol: self.state.display_symbol.clone(),
            result: self.state.result,
            display: self.display_value().to_string(),
        }
    }

    fn apply(&mut self, event: Event) {
        let from = self.state.phase;
        let next = advance(self.state.clone(), &event);
        let noop = next == self.state;
        self.state = next;

        let to = self.state.phase;
        if noop {
            trace!(phase = %from, event = %event, "No-op event");
        } else {
            debug!(from = %from, to = %to, event = %event, "Phase transition");
        }

        if !self.subject.is_empty() {
            self.subject.notify(&Transition {
                from,
                to,
                event,
                display: self.display_value(),
                noop,
            });
        }
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::observers::TapeObserver;

    fn digit(n: u8) -> Digit {
        Digit::try_from(n).unwrap()
    }

    #[test]
    fn fresh_engine_is_blank() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.display_value(), DisplayValue::Blank);
        assert_eq!(engine.phase(), Phase::EnteringFirst);
    }

    #[test]
    fn submit_digits_and_operators() {
        let mut engine = CalculatorEngine::new();
        engine.submit_digit(digit(1));
        engine.submit_digit(digit(2));
        assert_eq!(engine.display_value(), DisplayValue::Number(12.0));

        engine.submit_operator("*");
        assert_eq!(engine.display_value(), DisplayValue::Symbol("\u{d7}".into()));

        engine.submit_digit(digit(3));
        assert_eq!(engine.display_value(), DisplayValue::Number(3.0));

        engine.submit_operator("=");
        assert_eq!(engine.display_value(), DisplayValue::Number(36.0));
    }

    #[test]
    fn unrecognized_symbol_changes_nothing() {
        let mut engine = CalculatorEngine::new();
        engine.run("4+2");
        let before = engine.state().clone();
        engine.submit_operator("%");
        engine.submit_operator("sqrt");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut engine = CalculatorEngine::new();
        engine.run("12+3=");
        engine.reset();
        assert_eq!(engine.state(), &CalculatorState::new());
        engine.reset();
        assert_eq!(engine.state(), &CalculatorState::new());
    }

    #[test]
    fn run_script() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.run("2 + 3 + 4 ="), DisplayValue::Number(9.0));
    }

    #[test]
    fn divide_by_zero_then_digit() {
        let mut engine = CalculatorEngine::new();
        assert!(engine.run("7/0=").is_error());
        engine.submit_digit(digit(5));
        assert_eq!(engine.state().first_operand(), Some(5.0));
        assert_eq!(engine.phase(), Phase::EnteringFirst);
    }

    #[test]
    fn observers_see_transitions() {
        let tape = Arc::new(TapeObserver::new());
        let mut engine = CalculatorEngine::new();
        engine.subscribe(tape.clone());
        engine.run("1+=");

        // "=" with no second operand is a no-op and is not recorded.
        let entries = tape.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].to, Phase::EnteringFirst);
        assert_eq!(entries[1].to, Phase::EnteringOperator);
        assert_eq!(entries[1].display, DisplayValue::Symbol("+".into()));
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut engine = CalculatorEngine::new();
        engine.run("8-10=");
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.phase, Phase::ShowingResult);
        assert_eq!(snapshot.result, Some(Outcome::Value(-2.0)));
        assert_eq!(snapshot.display, "-2");

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"phase\": \"showing_result\""));
        assert!(json.contains("\"pending_operator\": \"subtract\""));
    }

    #[test]
    fn custom_registry() {
        let mut registry = OperatorRegistry::empty();
        registry.register(
            "plus",
            crate::registry::OperatorEntry::arithmetic(OperatorKind::Add, "+"),
        );
        let mut engine = CalculatorEngine::with_registry(registry);
        engine.submit_digit(digit(1));
        engine.submit_operator("+");
        assert_eq!(engine.phase(), Phase::EnteringFirst);
        engine.submit_operator("plus");
        assert_eq!(engine.phase(), Phase::EnteringOperator);
    }
}
