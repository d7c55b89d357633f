//! The titled results panel: six read-only fields.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use trigcalc_orchestration::display::ResultDisplay;

use crate::styles::ColorTheme;

/// Render the results panel. Fields are blank until the first activation.
pub fn render_results(frame: &mut Frame, area: Rect, display: Option<&ResultDisplay>, title: &str) {
    let theme = ColorTheme::default();
    let rows: Vec<Row> = match display {
        Some(d) => d
            .fields()
            .into_iter()
            .map(|(label, value)| {
                Row::new(vec![
                    Cell::from(label).style(theme.muted_style()),
                    Cell::from(value.to_string()).style(theme.text_style()),
                ])
            })
            .collect(),
        None => ResultDisplay::LABELS
            .iter()
            .map(|label| Row::new(vec![Cell::from(*label).style(theme.muted_style()), Cell::from("")]))
            .collect(),
    };

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .title_style(theme.header_style()),
    );
    frame.render_widget(table, area);
}
