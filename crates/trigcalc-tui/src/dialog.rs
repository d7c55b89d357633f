//! Modal warning dialog.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use trigcalc_orchestration::interfaces::Warning;

use crate::styles::ColorTheme;

/// Centered rectangle of at most `width` x `height` inside `area`.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Render `warning` on top of whatever is already drawn.
pub fn render_dialog(frame: &mut Frame, area: Rect, warning: &Warning) {
    let theme = ColorTheme::default();
    let popup = centered(area, 60, 7);
    let text = vec![
        Line::from(warning.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("Press Enter or Esc to close", theme.muted_style())),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.warning_style())
        .title(format!(" {} ", warning.title))
        .title_style(theme.warning_style());

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 60, 7);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, 10);
        assert!(rect.y > 0);
    }

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = centered(area, 60, 7);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
    }

    #[test]
    fn dialog_shows_title_and_message() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let warning = Warning::new("Invalid Input", "Please enter a valid angle");
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_dialog(frame, area, &warning);
            })
            .unwrap();
        let screen: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(screen.contains("Invalid Input"));
        assert!(screen.contains("Please enter a valid angle"));
    }
}
