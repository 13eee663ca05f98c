//! TUI message types (Elm Messages).

use keycalc_core::Transition;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// The engine applied an event.
    Transition(Transition),
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
}
