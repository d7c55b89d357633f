//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use trigcalc_orchestration::loader::LoaderState;

use crate::styles::ColorTheme;

/// Render the header panel with the module name and its state.
pub fn render_header(frame: &mut Frame, area: Rect, module: &str, state: LoaderState) {
    let theme = ColorTheme::default();
    let (status, badge) = theme.state_badge(state);
    let text = vec![Line::from(vec![
        Span::styled("TrigCalc-rs", theme.header_style()),
        Span::raw(format!(" | Module: {module} ")),
        Span::styled(format!("[{status}]"), badge),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Trigonometry ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn first_row(module: &str, state: LoaderState) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, module, state);
            })
            .unwrap();
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_loaded_module() {
        let row = first_row("trigonometry", LoaderState::Loaded);
        assert!(row.contains("trigonometry"));
        assert!(row.contains("[loaded]"));
    }

    #[test]
    fn shows_failed_module() {
        let row = first_row("missing", LoaderState::Failed);
        assert!(row.contains("[unavailable]"));
    }
}
