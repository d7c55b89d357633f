//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const HINTS: [(&str, &str); 4] = [
    ("Tab", "next field"),
    ("Enter", "calculate"),
    ("Esc", "close dialog / quit"),
    ("Ctrl+C", "quit"),
];

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let mut spans = Vec::with_capacity(HINTS.len() * 2);
    for (i, (key, action)) in HINTS.iter().enumerate() {
        let sep = if i + 1 < HINTS.len() { " | " } else { "" };
        spans.push(Span::styled(*key, theme.key_style()));
        spans.push(Span::raw(format!(": {action}{sep}")));
    }
    let text = vec![Line::from(spans)];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_footer_contains_all_shortcuts() {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();

        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(content.contains("next field"));
        assert!(content.contains("calculate"));
        assert!(content.contains("quit"));
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();
    }
}
