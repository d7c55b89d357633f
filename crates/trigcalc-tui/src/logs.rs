//! Activity log panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Maximum number of log entries kept.
pub const MAX_LOG_ENTRIES: usize = 200;

/// Render the most recent log entries that fit in `area`.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String]) {
    let theme = ColorTheme::default();
    let visible = usize::from(area.height.saturating_sub(2));
    let start = logs.len().saturating_sub(visible);
    let items: Vec<ListItem> = logs[start..]
        .iter()
        .map(|msg| {
            let style = if msg.starts_with("[WARN]") {
                theme.warning_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::styled(msg.as_str(), style))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));
    frame.render_widget(list, area);
}
