//! Scrollable history tape.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use keycalc_core::{Event, Transition};

/// Scroll state for the tape panel.
#[derive(Debug, Clone)]
pub struct TapeScrollState {
    /// Current scroll offset (first visible line index).
    pub offset: usize,
    /// Whether the view follows new entries.
    pub follow: bool,
}

impl TapeScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    /// Handle a new entry (jump to the bottom when following).
    pub fn on_new_entry(&mut self, total: usize) {
        if self.follow {
            self.offset = total.saturating_sub(1);
        }
    }

    /// Adjust after the oldest entry was dropped.
    pub fn on_entry_dropped(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_up(&mut self) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total: usize) {
        self.page_down(1, total);
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total: usize) {
        let last = total.saturating_sub(1);
        self.offset = (self.offset + page_size).min(last);
        if self.offset >= last {
            self.follow = true;
        }
    }

    /// Jump to the oldest entry.
    pub fn home(&mut self) {
        self.follow = false;
        self.offset = 0;
    }

    /// Jump to the newest entry and follow again.
    pub fn end(&mut self, total: usize) {
        self.follow = true;
        self.offset = total.saturating_sub(1);
    }
}

impl Default for TapeScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// One tape line for a transition.
#[must_use]
pub fn format_entry(transition: &Transition) -> String {
    match &transition.event {
        Event::Clear => "   C".to_string(),
        Event::Evaluate => format!("   = {}", transition.display),
        event => {
            let label = event.to_string();
            let sep = if transition.is_evaluation() { "=" } else { " " };
            format!("{label:>4} {sep} {}", transition.display)
        }
    }
}

/// Render the tape panel so that the entry at `offset` is the last visible one.
pub fn render_tape(frame: &mut Frame, area: Rect, entries: &[String], offset: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let end = (offset + 1).min(entries.len());
    let start = end.saturating_sub(visible_height);

    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| {
            let style = if entry.ends_with("Error") {
                Style::default().fg(Color::Red)
            } else if entry.contains(" = ") {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(entry.as_str())).style(style)
        })
        .collect();

    let title = if entries.len() > visible_height {
        format!(" Tape ({}/{}) ", end, entries.len())
    } else {
        " Tape ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycalc_core::{Digit, DisplayValue, OperatorKind, Phase};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn transition(from: Phase, to: Phase, event: Event, display: DisplayValue) -> Transition {
        Transition {
            from,
            to,
            event,
            display,
            noop: false,
        }
    }

    #[test]
    fn scroll_state_initial() {
        let state = TapeScrollState::new();
        assert_eq!(state.offset, 0);
        assert!(state.follow);
    }

    #[test]
    fn scroll_state_follows_new_entries() {
        let mut state = TapeScrollState::new();
        state.on_new_entry(10);
        assert_eq!(state.offset, 9);

        state.scroll_up();
        state.on_new_entry(11);
        assert_eq!(state.offset, 8);
    }

    #[test]
    fn scroll_down_to_bottom_follows() {
        let mut state = TapeScrollState::new();
        state.follow = false;
        state.offset = 8;
        state.scroll_down(10);
        assert_eq!(state.offset, 9);
        assert!(state.follow);
    }

    #[test]
    fn page_up_clamps_to_zero() {
        let mut state = TapeScrollState::new();
        state.offset = 3;
        state.page_up(10);
        assert_eq!(state.offset, 0);
        assert!(!state.follow);
    }

    #[test]
    fn home_and_end() {
        let mut state = TapeScrollState::new();
        state.offset = 50;
        state.home();
        assert_eq!(state.offset, 0);
        assert!(!state.follow);

        state.end(30);
        assert_eq!(state.offset, 29);
        assert!(state.follow);
    }

    #[test]
    fn entry_formats() {
        let digit = Event::Digit(Digit::try_from(7u8).unwrap());
        let t = transition(
            Phase::EnteringFirst,
            Phase::EnteringFirst,
            digit,
            DisplayValue::Number(7.0),
        );
        assert_eq!(format_entry(&t), "   7   7");

        let t = transition(
            Phase::EnteringSecond,
            Phase::ShowingResult,
            Event::Evaluate,
            DisplayValue::Number(9.0),
        );
        assert_eq!(format_entry(&t), "   = 9");

        let t = transition(
            Phase::EnteringSecond,
            Phase::EnteringOperator,
            Event::Operator {
                kind: OperatorKind::Add,
                glyph: "+".into(),
            },
            DisplayValue::Symbol("+".into()),
        );
        assert_eq!(format_entry(&t), "   +   +");

        let t = transition(
            Phase::EnteringSecond,
            Phase::ShowingResult,
            Event::Operator {
                kind: OperatorKind::Add,
                glyph: "+".into(),
            },
            DisplayValue::Error,
        );
        assert_eq!(format_entry(&t), "   + = Error");
    }

    #[test]
    fn render_tape_shows_latest_entries() {
        let entries: Vec<String> = (0..20).map(|i| format!("entry {i}")).collect();
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_tape(frame, area, &entries, 19);
            })
            .unwrap();
        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect();
        assert!(content.contains("entry 19"));
        assert!(!content.contains("entry 10"));
        assert!(content.contains("20/20"));
    }

    #[test]
    fn render_tape_empty() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_tape(frame, area, &[], 0);
            })
            .unwrap();
    }
}
