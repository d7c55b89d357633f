//! The input form: angle field, terms field and the Calculate button.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use trigcalc_core::constants::DEFAULT_TERMS;

use crate::styles::ColorTheme;

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Angle,
    Terms,
    Calculate,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Angle => Self::Terms,
            Self::Terms => Self::Calculate,
            Self::Calculate => Self::Angle,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Angle => Self::Calculate,
            Self::Terms => Self::Angle,
            Self::Calculate => Self::Terms,
        }
    }
}

/// Form state.
#[derive(Debug, Clone)]
pub struct Form {
    pub angle: String,
    pub terms: String,
    pub focus: Focus,
}

impl Form {
    /// Empty angle, terms pre-filled with the default count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            angle: String::new(),
            terms: DEFAULT_TERMS.to_string(),
            focus: Focus::Angle,
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Angle => Some(&mut self.angle),
            Focus::Terms => Some(&mut self.terms),
            Focus::Calculate => None,
        }
    }

    /// Type a character into the focused field.
    pub fn input(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

fn field_block<'a>(title: &'a str, focused: bool, theme: &ColorTheme) -> Block<'a> {
    let style = if focused {
        theme.focus_style()
    } else {
        theme.border_style()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

/// Render the form.
pub fn render_form(frame: &mut Frame, area: Rect, form: &Form) {
    let theme = ColorTheme::default();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // angle
            Constraint::Percentage(30), // terms
            Constraint::Percentage(30), // button
        ])
        .split(area);

    let angle = Paragraph::new(form.angle.as_str()).block(field_block(
        " Angle (degrees) ",
        form.focus == Focus::Angle,
        &theme,
    ));
    frame.render_widget(angle, chunks[0]);

    let terms = Paragraph::new(form.terms.as_str()).block(field_block(
        " Taylor terms ",
        form.focus == Focus::Terms,
        &theme,
    ));
    frame.render_widget(terms, chunks[1]);

    let button_style = if form.focus == Focus::Calculate {
        theme.focus_style()
    } else {
        theme.text_style()
    };
    let button = Paragraph::new(Line::from(Span::styled("[ Calculate ]", button_style)))
        .centered()
        .block(field_block("", form.focus == Focus::Calculate, &theme));
    frame.render_widget(button, chunks[2]);
}
