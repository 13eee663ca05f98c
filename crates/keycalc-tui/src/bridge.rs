//! Bridge between engine transitions and TUI messages.

use crossbeam_channel::Sender;

use keycalc_core::{Transition, TransitionObserver};

use crate::messages::TuiMessage;

/// Engine observer that forwards transitions to the TUI channel.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl TransitionObserver for TuiBridgeObserver {
    fn on_transition(&self, transition: &Transition) {
        if transition.noop {
            return;
        }
        let _ = self.tx.try_send(TuiMessage::Transition(transition.clone()));
    }
}
