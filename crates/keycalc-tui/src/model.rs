//! TUI application model (Elm architecture).

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use keycalc_core::constants::TAPE_CAPACITY;
use keycalc_core::{CalculatorEngine, DisplayValue, Phase};

use crate::bridge::TuiBridgeObserver;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::keypad::{label_for, render_keypad};
use crate::lcd::render_lcd;
use crate::messages::TuiMessage;
use crate::tape::{format_entry, render_tape, TapeScrollState};

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// The calculator session driven by this UI.
    engine: CalculatorEngine,
    /// Message receiver (engine transitions arrive here).
    rx: Receiver<TuiMessage>,
    /// Tape lines, oldest first.
    pub tape: Vec<String>,
    /// Tape scroll position.
    pub tape_scroll: TapeScrollState,
    /// Show tape toggle.
    pub show_tape: bool,
    /// Keypad label of the last key pressed.
    pub last_pressed: Option<&'static str>,
}

impl TuiApp {
    /// Create a new TUI app with a fresh calculator session.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(CalculatorEngine::new())
    }

    /// Create a TUI app around an existing session.
    #[must_use]
    pub fn with_engine(mut engine: CalculatorEngine) -> Self {
        let (tx, rx) = unbounded();
        engine.subscribe(Arc::new(TuiBridgeObserver::new(tx)));
        Self {
            should_quit: false,
            engine,
            rx,
            tape: Vec::new(),
            tape_scroll: TapeScrollState::new(),
            show_tape: true,
            last_pressed: None,
        }
    }

    /// The calculator session.
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// What the display currently shows.
    #[must_use]
    pub fn display_value(&self) -> DisplayValue {
        self.engine.display_value()
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Transition(transition) => self.push_tape(format_entry(&transition)),
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Digit(d) => {
                self.engine.submit_digit(d);
                self.last_pressed = label_for(&d.to_string());
            }
            KeyAction::Operator(symbol) => {
                self.engine.submit_operator(symbol);
                self.last_pressed = label_for(symbol);
            }
            KeyAction::Clear => {
                self.engine.reset();
                self.last_pressed = label_for("C");
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::ToggleTape => {
                self.show_tape = !self.show_tape;
            }
            KeyAction::ScrollUp => self.tape_scroll.scroll_up(),
            KeyAction::ScrollDown => self.tape_scroll.scroll_down(self.tape.len()),
            KeyAction::PageUp => self.tape_scroll.page_up(10),
            KeyAction::PageDown => self.tape_scroll.page_down(10, self.tape.len()),
            KeyAction::Home => self.tape_scroll.home(),
            KeyAction::End => self.tape_scroll.end(self.tape.len()),
            KeyAction::None => {}
        }
    }

    fn push_tape(&mut self, line: String) {
        self.tape.push(line);
        if self.tape.len() > TAPE_CAPACITY {
            self.tape.remove(0);
            self.tape_scroll.on_entry_dropped();
        }
        self.tape_scroll.on_new_entry(self.tape.len());
    }

    /// Compute the main layout.
    ///
    /// Returns (header, lcd, body, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // display
                Constraint::Min(8),    // keypad + tape
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Split the body into keypad (left) and tape (right).
    #[must_use]
    pub fn compute_body_layout(body: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(body);

        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, lcd_area, body_area, footer_area) = Self::compute_layout(frame.area());
        let state = self.engine.state();

        let pending = match state.phase() {
            Phase::EnteringFirst => None,
            _ => state.display_symbol(),
        };
        render_header(frame, header_area, state.phase(), pending);
        render_lcd(frame, lcd_area, &self.display_value());

        if self.show_tape {
            let (keypad_area, tape_area) = Self::compute_body_layout(body_area);
            render_keypad(frame, keypad_area, self.last_pressed);
            render_tape(frame, tape_area, &self.tape, self.tape_scroll.offset);
        } else {
            render_keypad(frame, body_area, self.last_pressed);
        }

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            // Resize needs no handling: the next draw uses the new size
            if event::poll(tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press {
                        self.handle_message(TuiMessage::KeyPress(map_key(key_event)));
                    }
                }
            }

            // Drain engine transitions into the tape
            self.update();
        }
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
