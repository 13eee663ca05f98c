//! Keyboard handling: terminal key events to keypad actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use keycalc_core::Digit;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Digit(Digit),
    /// An operator key, passed to the engine as this symbol.
    Operator(&'static str),
    Clear,
    Quit,
    ToggleTape,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Digit::try_from(c).map_or(KeyAction::None, KeyAction::Digit)
        }
        KeyCode::Char('+') => KeyAction::Operator("+"),
        KeyCode::Char('-') => KeyAction::Operator("-"),
        KeyCode::Char('*' | 'x') => KeyAction::Operator("*"),
        KeyCode::Char('/') => KeyAction::Operator("/"),
        KeyCode::Char('=') | KeyCode::Enter => KeyAction::Operator("="),
        KeyCode::Char('c' | 'C') | KeyCode::Delete | KeyCode::Backspace => KeyAction::Clear,
        KeyCode::Char('t') => KeyAction::ToggleTape,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}
