//! Concrete observer implementations.

use std::collections::VecDeque;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::constants::TAPE_CAPACITY;
use crate::observer::{Transition, TransitionObserver};

/// Observer that sends transitions through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<Transition>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<Transition>) -> Self {
        Self { sender }
    }
}

impl TransitionObserver for ChannelObserver {
    fn on_transition(&self, transition: &Transition) {
        // A full or disconnected channel drops the update.
        let _ = self.sender.try_send(transition.clone());
    }
}

/// Observer that logs evaluations at `info` and other changes at `debug`.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionObserver for LoggingObserver {
    fn on_transition(&self, transition: &Transition) {
        if transition.noop {
            return;
        }
        if transition.is_evaluation() {
            info!(display = %transition.display, "Evaluated");
        } else {
            debug!(
                from = %transition.from,
                to = %transition.to,
                event = %transition.event,
                "Transition"
            );
        }
    }
}

/// In-session history of applied events, bounded to the most recent entries.
pub struct TapeObserver {
    entries: Mutex<VecDeque<Transition>>,
    capacity: usize,
}

impl TapeObserver {
    /// Create a tape with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(TAPE_CAPACITY)
    }

    /// Create a tape keeping at most `capacity` transitions.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(TAPE_CAPACITY))),
            capacity,
        }
    }

    /// Copy out the recorded transitions, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<Transition> {
        self.entries.lock().iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop every recorded transition.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for TapeObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionObserver for TapeObserver {
    fn on_transition(&self, transition: &Transition) {
        if transition.noop || self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(transition.clone());
    }
}

/// Null object pattern — ignores every transition.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionObserver for NoOpObserver {
    fn on_transition(&self, _transition: &Transition) {}
}
