//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use trigcalc_orchestration::display::ResultDisplay;
use trigcalc_orchestration::interfaces::Warning;
use trigcalc_orchestration::loader::LoaderState;
use trigcalc_orchestration::session::Session;

use crate::dialog::render_dialog;
use crate::footer::render_footer;
use crate::form::{render_form, Form};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, MAX_LOG_ENTRIES};
use crate::messages::TuiMessage;
use crate::results::render_results;

/// Side effect requested by the model, executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one activation with the raw field contents.
    Calculate { angle: String, terms: String },
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Input form.
    pub form: Form,
    /// Displayed results, replaced on every successful activation.
    pub results: Option<ResultDisplay>,
    /// Angle and terms the displayed results were computed for.
    pub computed_for: Option<(f64, u32)>,
    /// Open warning dialog.
    pub dialog: Option<Warning>,
    /// Log messages.
    pub logs: Vec<String>,
    /// Backend module name shown in the header.
    pub module: String,
    /// Loader state shown in the header.
    pub state: LoaderState,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>, module: impl Into<String>, state: LoaderState) -> Self {
        Self {
            should_quit: false,
            form: Form::new(),
            results: None,
            computed_for: None,
            dialog: None,
            logs: Vec::new(),
            module: module.into(),
            state,
            rx,
        }
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Results {
                display,
                angle,
                terms,
            } => {
                self.results = Some(display);
                self.computed_for = Some((angle, terms));
            }
            TuiMessage::Warning(warning) => {
                self.dialog = Some(warning);
            }
            TuiMessage::Log(msg) => self.push_log(msg),
        }
    }

    fn push_log(&mut self, msg: String) {
        self.logs.push(msg);
        if self.logs.len() > MAX_LOG_ENTRIES {
            self.logs.remove(0);
        }
    }

    /// Handle a keyboard action.
    ///
    /// While the dialog is open only closing it (or quitting) is accepted.
    pub fn handle_key_action(&mut self, action: KeyAction) -> Option<Command> {
        if self.dialog.is_some() {
            match action {
                KeyAction::Quit => self.should_quit = true,
                KeyAction::Cancel | KeyAction::Submit => self.dialog = None,
                _ => {}
            }
            return None;
        }

        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::Input(c) => self.form.input(c),
            KeyAction::Submit => {
                return Some(Command::Calculate {
                    angle: self.form.angle.clone(),
                    terms: self.form.terms.clone(),
                });
            }
            KeyAction::None => {}
        }
        None
    }

    /// Title of the results panel.
    #[must_use]
    pub fn results_title(&self) -> String {
        match self.computed_for {
            Some((angle, terms)) => format!(" Results ({angle}°, {terms} terms) "),
            None => " Results ".to_string(),
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, form, results, logs, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // form
                Constraint::Length(8), // results
                Constraint::Min(3),    // logs
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3], outer[4])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let (header_area, form_area, results_area, logs_area, footer_area) =
            Self::compute_layout(area);

        render_header(frame, header_area, &self.module, self.state);
        render_form(frame, form_area, &self.form);
        render_results(
            frame,
            results_area,
            self.results.as_ref(),
            &self.results_title(),
        );
        render_logs(frame, logs_area, &self.logs);
        render_footer(frame, footer_area);

        if let Some(warning) = &self.dialog {
            render_dialog(frame, area, warning);
        }
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Execute a command against the session.
    ///
    /// Results and warnings come back through the session's presenter and
    /// notifier, so the outcome is picked up by the next `update`.
    pub fn execute(&mut self, session: &Session<'_>, cmd: Command) {
        match cmd {
            Command::Calculate { angle, terms } => {
                if let Err(err) = session.activate(&angle, &terms) {
                    debug!(%err, "activation rejected");
                }
                self.state = session.state();
            }
        }
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit, also when the loop fails.
    pub fn run(&mut self, session: &Session<'_>) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal, session);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        session: &Session<'_>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        // Warnings raised while loading are already queued.
        self.update();

        loop {
            // Resizes need no handling: `draw` autoresizes the viewport.
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        if let Some(cmd) = self.handle_key_action(map_key(key_event)) {
                            self.execute(session, cmd);
                        }
                    }
                    _ => {}
                }
            }

            self.update();
        }
    }
}
