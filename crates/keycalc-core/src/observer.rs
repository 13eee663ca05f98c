//! Observer pattern for engine transitions.

use std::sync::Arc;

use crate::display::DisplayValue;
use crate::phase::Event;
use crate::state::Phase;

/// One applied event, as seen from outside the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub event: Event,
    /// Display value after the event.
    pub display: DisplayValue,
    /// Whether the event left the state untouched.
    pub noop: bool,
}

impl Transition {
    /// Whether this transition produced a result.
    #[must_use]
    pub fn is_evaluation(&self) -> bool {
        self.to == Phase::ShowingResult && self.from != Phase::ShowingResult
    }
}

/// Observer trait for receiving engine transitions.
pub trait TransitionObserver: Send + Sync {
    /// Receive a transition after the state has been updated.
    fn on_transition(&self, transition: &Transition);
}

/// Fan-out of observers owned by one engine.
#[derive(Default)]
pub struct TransitionSubject {
    observers: Vec<Arc<dyn TransitionObserver>>,
}

impl TransitionSubject {
    /// Create a subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&mut self, observer: Arc<dyn TransitionObserver>) {
        self.observers.push(observer);
    }

    /// Remove all observers.
    pub fn clear(&mut self) {
        self.observers.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Notify every observer in registration order.
    pub fn notify(&self, transition: &Transition) {
        for observer in &self.observers {
            observer.on_transition(transition);
        }
    }
}
