//! Colour theme shared by every panel.

use ratatui::style::{Color, Modifier, Style};

use trigcalc_orchestration::loader::LoaderState;

/// Colour theme for the TUI.
pub struct ColorTheme {
    pub title: Color,
    pub focus: Color,
    pub key_hint: Color,
    pub warning: Color,
    pub error: Color,
    pub ok: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            title: Color::Cyan,
            focus: Color::Yellow,
            key_hint: Color::Yellow,
            warning: Color::Yellow,
            error: Color::Red,
            ok: Color::Green,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Panel titles.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Labels and hints.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border of an unfocused widget.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border and text of the focused widget.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    /// Keys named in the footer.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.key_hint)
    }

    /// Warning dialog frame and title; warning log lines.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning).add_modifier(Modifier::BOLD)
    }

    /// Label and style of the module state badge.
    #[must_use]
    pub fn state_badge(&self, state: LoaderState) -> (&'static str, Style) {
        match state {
            LoaderState::Loaded => ("loaded", Style::default().fg(self.ok)),
            LoaderState::Unloaded => ("unloaded", self.muted_style()),
            LoaderState::Failed => ("unavailable", Style::default().fg(self.error)),
        }
    }
}
