//! Ratatui-based terminal UI.
//!
//! Left column: the specialist list and the treatment primer. Right column:
//! the selected specialist, the measurement prompt, and the result. All
//! screen state comes from `Session`; `App` only adds list cursor and input
//! focus.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::config::AppConfig;
use crate::domain::{CalculationOutcome, Specialist};
use crate::error::AppError;
use crate::registry;
use crate::report::{GUIDE_INTRO, GUIDE_TITLE, TREATMENT_STAGES, outcome_heading};
use crate::session::{Session, SessionState};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Start the TUI.
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::io(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::io(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::io(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    session: Session,
    /// Highlighted row in the specialist list.
    cursor: Specialist,
    /// Keys go to the measurement field.
    editing: bool,
    status: String,
}

impl App {
    fn new(config: &AppConfig) -> Self {
        Self {
            session: Session::new(config.notice_ttl),
            cursor: Specialist::Squirtle,
            editing: false,
            status: "Pick a specialist with ↑/↓ and Enter.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::io(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(POLL_INTERVAL)
                .map_err(|e| AppError::io(format!("Event poll error: {e}")))?
            {
                needs_redraw = self.session.tick(Instant::now());
                continue;
            }

            match event::read().map_err(|e| AppError::io(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        break;
                    }
                    if self.handle_key(key.code, Instant::now()) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        if self.editing {
            self.handle_input_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.cursor = self.cursor.prev(),
            KeyCode::Down => self.cursor = self.cursor.next(),
            KeyCode::Enter => {
                self.session.select(self.cursor);
                self.status = format!("Selected {}.", self.cursor.descriptor().display_name);
            }
            KeyCode::Char('c') => self.calculate(now),
            KeyCode::Char('e') => {
                if self.session.input().is_some() {
                    self.editing = true;
                    self.status = input_hint();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.status = "Press e to edit the value, c to calculate.".to_string();
            }
            KeyCode::Enter => {
                if let Some(outcome) = self.session.submit() {
                    self.status = match outcome {
                        CalculationOutcome::Success { .. } => "Calculated.".to_string(),
                        CalculationOutcome::Error { .. } => "Check the value and try again.".to_string(),
                    };
                }
            }
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Char(c) => {
                if is_measurement_char(c) {
                    self.session.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn calculate(&mut self, now: Instant) {
        if self.session.request_calculation(now) {
            self.status = "Select a specialist first.".to_string();
            return;
        }
        if self.session.input().is_some() {
            self.editing = true;
            self.status = input_hint();
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if let Some(notice) = self.session.notice() {
            draw_notice(frame, size, notice.message());
        }
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Wastewater Treatment Game",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Learn with treatment specialists",
                Style::default().fg(Color::Gray),
            )),
        ];
        let p = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[0]);
        self.draw_specialists(frame, left[0]);
        draw_guide(frame, left[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(4), Constraint::Min(0)])
            .split(columns[1]);
        self.draw_details(frame, right[0]);
        self.draw_input(frame, right[1]);
        self.draw_result(frame, right[2]);
    }

    fn draw_specialists(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chosen = self.session.specialist();
        let items: Vec<ListItem> = registry::all()
            .iter()
            .map(|d| {
                let marker = if chosen == Some(d.specialist) { "● " } else { "  " };
                ListItem::new(format!("{marker}{} - {}", d.display_name, d.treatment_label))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Specialists").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.cursor.index()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_details(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Specialist").borders(Borders::ALL);
        let text = match self.session.specialist() {
            Some(s) => {
                let d = s.descriptor();
                Text::from(vec![
                    Line::from(Span::styled(
                        d.display_name,
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(d.treatment_label),
                    Line::from(Span::styled(
                        format!("image: {}", d.image_ref),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            }
            None => Text::from(Span::styled(
                "Choose a specialist",
                Style::default().fg(Color::Yellow),
            )),
        };
        let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(p, area);
    }

    fn draw_input(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let border = if self.editing { Color::Yellow } else { Color::White };
        let block = Block::default()
            .title("Measurement")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let (Some(s), Some(input)) = (self.session.specialist(), self.session.input()) else {
            let hint = Paragraph::new("Press c to calculate.")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            frame.render_widget(hint, area);
            return;
        };

        let cursor = if self.editing { "_" } else { "" };
        let value = if input.is_empty() && !self.editing {
            Span::styled("Enter value", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(format!("{input}{cursor}"))
        };
        let text = Text::from(vec![
            Line::from(Span::styled(
                s.descriptor().input_label,
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![Span::raw("> "), value]),
        ]);
        frame.render_widget(Paragraph::new(text).block(block), area);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(outcome) = self.session.outcome() else {
            let block = Block::default().title("Treatment Results").borders(Borders::ALL);
            frame.render_widget(block, area);
            return;
        };

        let color = if outcome.is_error() { Color::Red } else { Color::Green };
        let block = Block::default()
            .title(outcome_heading(outcome).trim_end_matches(':'))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let lines: Vec<Line> = outcome.message().lines().map(Line::from).collect();
        let p = Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let keys = if self.editing {
            "Enter submit | Esc stop editing"
        } else {
            "↑/↓ move | Enter select | c calculate | e edit | q quit"
        };
        let state = self.session.state();
        let line = Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(state_label(state), Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::raw(self.status.as_str()),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_guide(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(GUIDE_INTRO, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    for stage in &TREATMENT_STAGES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", stage.name),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(stage.description, Style::default().fg(Color::Gray)),
        ]));
    }
    let p = Paragraph::new(Text::from(lines))
        .block(Block::default().title(GUIDE_TITLE).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(p, area);
}

fn draw_notice(frame: &mut ratatui::Frame<'_>, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, rect);
    let p = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(p, rect);
}

fn state_label(state: &SessionState) -> String {
    match state {
        SessionState::Idle { .. } => "idle".to_string(),
        SessionState::Selected { specialist } => format!("selected: {specialist}"),
        SessionState::AwaitingInput { specialist, .. } => format!("input: {specialist}"),
        SessionState::Result { specialist, .. } => format!("result: {specialist}"),
    }
}

fn input_hint() -> String {
    "Type a number, Enter to submit, Esc to stop editing.".to_string()
}

/// Characters that can appear in a decimal number, including exponent form.
fn is_measurement_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn type_str(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), now);
        }
    }

    #[test]
    fn calculate_without_selection_shows_notice() {
        let mut app = app();
        let now = Instant::now();
        assert!(!app.handle_key(KeyCode::Char('c'), now));
        assert!(app.session.notice().is_some());
        assert!(!app.editing);
        assert!(screen_text(&app).contains("Please select a specialist first!"));
    }

    #[test]
    fn select_calculate_type_submit() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Down, now);
        app.handle_key(KeyCode::Enter, now);
        assert_eq!(app.session.specialist(), Some(Specialist::Bulbasaur));

        app.handle_key(KeyCode::Char('c'), now);
        assert!(app.editing);

        type_str(&mut app, "5x", now);
        assert_eq!(app.session.input(), Some("5"));

        app.handle_key(KeyCode::Enter, now);
        let outcome = app.session.outcome().unwrap();
        assert!(outcome.message().contains("0.08 g/L of sodium hydroxide"));

        let screen = screen_text(&app);
        assert!(screen.contains("Treatment Results"));
        assert!(screen.contains("Enter current pH level (0-14):"));
    }

    #[test]
    fn q_types_into_field_while_editing_then_quits_after_escape() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Enter, now);
        app.handle_key(KeyCode::Char('c'), now);
        assert!(!app.handle_key(KeyCode::Char('q'), now));
        assert_eq!(app.session.input(), Some(""));

        app.handle_key(KeyCode::Esc, now);
        assert!(!app.editing);
        assert!(app.handle_key(KeyCode::Char('q'), now));
    }

    #[test]
    fn reselecting_hides_previous_result() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Enter, now);
        app.handle_key(KeyCode::Char('c'), now);
        type_str(&mut app, "10", now);
        app.handle_key(KeyCode::Enter, now);
        app.handle_key(KeyCode::Esc, now);
        assert!(app.session.outcome().is_some());

        app.handle_key(KeyCode::Down, now);
        app.handle_key(KeyCode::Enter, now);
        assert!(app.session.outcome().is_none());
        assert!(!screen_text(&app).contains("sulfuric acid"));
    }

    #[test]
    fn measurement_chars() {
        for c in ['0', '9', '.', '-', '+', 'e', 'E'] {
            assert!(is_measurement_char(c));
        }
        for c in ['a', ' ', ',', 'q'] {
            assert!(!is_measurement_char(c));
        }
    }

    #[test]
    fn renders_on_tiny_terminal() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), Instant::now());
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
    }
}
