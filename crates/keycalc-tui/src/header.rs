//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use keycalc_core::Phase;

use crate::styles::ColorTheme;

/// Render the header panel: current phase and pending operator.
pub fn render_header(frame: &mut Frame, area: Rect, phase: Phase, pending: Option<&str>) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("keycalc", theme.header_style()),
        Span::raw(format!(
            " | Phase: {phase} | Pending: {}",
            pending.unwrap_or("-")
        )),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" keycalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_header_shows_phase_and_operator() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, Phase::EnteringOperator, Some("+"));
            })
            .unwrap();

        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect();
        assert!(content.contains("Phase: operator"));
        assert!(content.contains("Pending: +"));
    }

    #[test]
    fn title_uses_header_style() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, Phase::EnteringFirst, None);
            })
            .unwrap();

        let header = ColorTheme::default().header_style();
        let styled = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .any(|pos| {
                let cell = &buf.buffer[pos];
                cell.symbol() == "k" && cell.fg == header.fg.unwrap_or_default()
            });
        assert!(styled);
    }
}
