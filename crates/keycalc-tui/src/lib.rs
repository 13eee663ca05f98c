//! # keycalc-tui
//!
//! Interactive calculator keypad using ratatui with Elm architecture.

pub mod bridge;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod keypad;
pub mod lcd;
pub mod messages;
pub mod model;
pub mod styles;
pub mod tape;

pub use bridge::TuiBridgeObserver;
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use tape::TapeScrollState;
