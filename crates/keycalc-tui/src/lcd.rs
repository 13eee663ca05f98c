//! Calculator display panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use keycalc_core::DisplayValue;

use crate::styles::ColorTheme;

/// Render the display value right-aligned, in red for the error indicator.
pub fn render_lcd(frame: &mut Frame, area: Rect, value: &DisplayValue) {
    let theme = ColorTheme::default();
    let style = if value.is_error() {
        theme.error_style()
    } else {
        theme.lcd_style()
    };

    let text = value.to_string();
    // Keep the least significant digits when the number is wider than the panel.
    let inner_width = area.width.saturating_sub(4) as usize;
    let shown = match text.char_indices().rev().nth(inner_width.saturating_sub(1)) {
        Some((idx, _)) if text.chars().count() > inner_width && inner_width > 0 => &text[idx..],
        _ => text.as_str(),
    };

    let paragraph = Paragraph::new(Line::styled(format!("{shown} "), style))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_row(width: u16, value: &DisplayValue) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_lcd(frame, area, value);
            })
            .unwrap();
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn number_is_right_aligned() {
        let row = render_row(20, &DisplayValue::Number(42.0));
        assert!(row.trim_end_matches('│').trim_end().ends_with("42"));
    }

    #[test]
    fn error_is_shown() {
        let row = render_row(20, &DisplayValue::Error);
        assert!(row.contains("Error"));
    }

    #[test]
    fn long_number_keeps_trailing_digits() {
        let row = render_row(10, &DisplayValue::Number(123_456_789_012.0));
        assert!(row.contains("9012"));
        assert!(!row.contains("1234"));
    }

    #[test]
    fn blank_does_not_panic() {
        let _ = render_row(5, &DisplayValue::Blank);
        let _ = render_row(2, &DisplayValue::Number(1.0));
    }
}
