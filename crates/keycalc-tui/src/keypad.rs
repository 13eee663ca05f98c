//! Keypad grid widget.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Button labels, top row first.
pub const KEYPAD_ROWS: [[&str; 4]; 4] = [
    ["7", "8", "9", "\u{f7}"],
    ["4", "5", "6", "\u{d7}"],
    ["1", "2", "3", "-"],
    ["C", "0", "=", "+"],
];

/// The keypad label lit up by a key press, if any.
#[must_use]
pub fn label_for(key: &str) -> Option<&'static str> {
    let label = match key {
        "*" | "x" => "\u{d7}",
        "/" => "\u{f7}",
        "AC" | "c" => "C",
        other => other,
    };
    KEYPAD_ROWS
        .iter()
        .flatten()
        .copied()
        .find(|candidate| *candidate == label)
}

fn is_operator(label: &str) -> bool {
    !label.chars().all(|c| c.is_ascii_digit())
}

/// Render the 4x4 keypad, highlighting `pressed`.
pub fn render_keypad(frame: &mut Frame, area: Rect, pressed: Option<&str>) {
    let theme = ColorTheme::default();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (row_area, labels) in rows.iter().zip(KEYPAD_ROWS.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row_area);

        for (cell, label) in cells.iter().zip(labels.iter()) {
            let style = if pressed == Some(*label) {
                theme.pressed_style()
            } else if is_operator(label) {
                theme.operator_style()
            } else {
                theme.button_style()
            };
            let button = Paragraph::new(*label)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.muted_style()),
                );
            frame.render_widget(button, *cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn keypad_has_all_digits_once() {
        for d in 0..=9 {
            let label = d.to_string();
            let count = KEYPAD_ROWS
                .iter()
                .flatten()
                .filter(|l| **l == label)
                .count();
            assert_eq!(count, 1, "digit {d}");
        }
    }

    #[test]
    fn label_lookup() {
        assert_eq!(label_for("7"), Some("7"));
        assert_eq!(label_for("*"), Some("\u{d7}"));
        assert_eq!(label_for("/"), Some("\u{f7}"));
        assert_eq!(label_for("c"), Some("C"));
        assert_eq!(label_for("%"), None);
    }

    #[test]
    fn render_keypad_shows_labels() {
        let backend = TestBackend::new(40, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_keypad(frame, area, Some("5"));
            })
            .unwrap();

        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect();
        for label in ["7", "0", "=", "+", "C"] {
            assert!(content.contains(label), "missing {label}");
        }
    }

    #[test]
    fn render_keypad_tiny_area() {
        let backend = TestBackend::new(4, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_keypad(frame, area, None);
            })
            .unwrap();
    }
}
