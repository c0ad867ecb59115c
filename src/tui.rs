//! Playable terminal interface for PracticeWordle, built on Ratatui.
//!
//! The board mirrors the classic layout: six guess rows of five tiles,
//! an on-screen keyboard colored by the best feedback seen per letter,
//! and a message line standing in for the browser game's toasts.
//!
//! State machine: `Playing` until the puzzle reaches a terminal status,
//! then `GameOver` until the player starts the next word or quits.

use crate::cli::win_message;
use crate::debug_log;
use crate::evaluation::{Mark, WORD_LENGTH};
use crate::keyboard::KeyFeedback;
use crate::puzzle::{MAX_GUESSES, PuzzleState, Status, SubmitError};
use crate::session::Session;
use crate::storage::Storage;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, Debug, PartialEq)]
enum TuiState {
    Playing,
    GameOver,
}

enum Step {
    Continue,
    Exit,
}

/// Tile background/foreground for a revealed mark, a pending letter, or an
/// empty cell.
fn tile_colors(mark: Option<Mark>, pending: bool) -> (Color, Color) {
    match mark {
        Some(Mark::Correct) => (Color::Green, Color::Black),
        Some(Mark::Present) => (Color::Yellow, Color::Black),
        Some(Mark::Absent) => (Color::Gray, Color::White),
        None if pending => (Color::DarkGray, Color::White),
        None => (Color::Black, Color::DarkGray),
    }
}

/// Context for rendering the UI - groups related parameters to avoid too
/// many function arguments.
struct RenderContext<'a> {
    puzzle: &'a PuzzleState,
    keys: &'a KeyFeedback,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI component: terminal handling, rendering and input dispatch.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: TuiState::Playing,
            message: String::new(),
            error_message: String::new(),
            status: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Adopt the session's current state, including a resumed finished game.
    fn sync_with<S: Storage>(&mut self, session: &Session<S>) {
        let puzzle = session.puzzle();
        match puzzle.status() {
            Status::InProgress => {
                self.state = TuiState::Playing;
                self.status = Self::turn_status(puzzle);
            }
            Status::Won => {
                self.state = TuiState::GameOver;
                self.message = format!(
                    "{} The word was {}.",
                    win_message(puzzle.turn_index()),
                    puzzle.answer().to_uppercase()
                );
                self.status = "Game over".to_string();
            }
            Status::Lost => {
                self.state = TuiState::GameOver;
                self.message = format!(
                    "Better luck next time! The word was {}.",
                    puzzle.answer().to_uppercase()
                );
                self.status = "Game over".to_string();
            }
        }
    }

    fn turn_status(puzzle: &PuzzleState) -> String {
        format!("Turn {}/{}", puzzle.turn_index() + 1, MAX_GUESSES)
    }

    fn draw<S: Storage>(&mut self, session: &Session<S>) -> Result<(), io::Error> {
        let keys = session.keyboard();
        let ctx = RenderContext {
            puzzle: session.puzzle(),
            keys: &keys,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Board
                Constraint::Length(5),  // Keyboard
                Constraint::Min(3),     // Messages
                Constraint::Length(3),  // Status
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.puzzle);
        Self::render_keyboard(f, chunks[2], ctx.keys);
        Self::render_messages(f, chunks[3], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("PRACTICE WORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, puzzle: &PuzzleState) {
        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let turn = puzzle.turn_index();
        for row in 0..MAX_GUESSES {
            let spans = if row < turn {
                Self::revealed_row_spans(&puzzle.guesses()[row], &puzzle.evaluations()[row])
            } else if row == turn && !puzzle.is_over() {
                Self::entry_row_spans(puzzle.current_entry())
            } else {
                Self::empty_row_spans()
            };
            Self::render_row(f, inner, row, spans);
        }
    }

    fn revealed_row_spans(guess: &str, evaluation: &[Mark]) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw("  ")];
        for (letter, &mark) in guess.chars().zip(evaluation) {
            let (bg, fg) = tile_colors(Some(mark), false);
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default().fg(fg).bg(bg),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn entry_row_spans(entry: &str) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let letter = entry
                .chars()
                .nth(i)
                .map_or(' ', |c| c.to_ascii_uppercase());
            let (bg, fg) = tile_colors(None, true);
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg).bg(bg),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn empty_row_spans() -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw("  ")];
        for _ in 0..WORD_LENGTH {
            let (bg, fg) = tile_colors(None, false);
            spans.push(Span::styled("   ", Style::default().fg(fg).bg(bg)));
            spans.push(Span::raw(" "));
        }
        spans
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_row(f: &mut Frame, area: Rect, row: usize, spans: Vec<Span>) {
        let y = area.y + (row as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }
        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_keyboard(f: &mut Frame, area: Rect, keys: &KeyFeedback) {
        let block = Block::default().title("Keyboard").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = Vec::new();
        for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
            let mut spans = vec![Span::raw(" ".repeat(i + 1))];
            for letter in row.chars() {
                let (bg, fg) = tile_colors(keys.best(letter), keys.best(letter).is_none());
                spans.push(Span::styled(
                    format!("{} ", letter.to_ascii_uppercase()),
                    Style::default().fg(fg).bg(bg),
                ));
            }
            lines.push(Line::from(spans));
        }

        let paragraph = Paragraph::new(lines);
        f.render_widget(paragraph, inner);
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Playing => {
                "Type your guess | ENTER: Submit | BACKSPACE: Delete | CTRL+N: New word | ESC: Quit"
            }
            TuiState::GameOver => "N: Next word | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input<S: Storage>(&mut self, session: &mut Session<S>) -> Result<Step, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(Step::Continue);
        }

        let event = event::read()?;
        let Event::Key(key) = event else {
            debug_log!("handle_input() - ignoring non-key event: {:?}", event);
            return Ok(Step::Continue);
        };

        // Only process Press events, ignore Release and Repeat to avoid
        // double input.
        if key.kind != event::KeyEventKind::Press {
            return Ok(Step::Continue);
        }

        // Terminal focus changes (alt-tab) can leak replacement or control
        // characters from escape sequences; drop them.
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < 32)
        {
            debug_log!("handle_input() - dropping escape-sequence character: {:?}", c);
            return Ok(Step::Continue);
        }

        match self.state {
            TuiState::Playing => Ok(self.handle_playing_key(session, key)),
            TuiState::GameOver => Ok(self.handle_game_over_key(session, key)),
        }
    }

    fn handle_playing_key<S: Storage>(
        &mut self,
        session: &mut Session<S>,
        key: KeyEvent,
    ) -> Step {
        self.error_message.clear();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => return Step::Exit,
            KeyCode::Char('n' | 'N') if ctrl => self.start_new_word(session),
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl && !alt => {
                session.append_letter(c);
            }
            KeyCode::Backspace => session.delete_letter(),
            KeyCode::Enter => self.submit(session),
            _ => {
                debug_log!("handle_playing_key() - ignoring key: {:?}", key.code);
            }
        }
        Step::Continue
    }

    fn handle_game_over_key<S: Storage>(
        &mut self,
        session: &mut Session<S>,
        key: KeyEvent,
    ) -> Step {
        match key.code {
            KeyCode::Esc => Step::Exit,
            KeyCode::Char('n' | 'N') => {
                self.start_new_word(session);
                Step::Continue
            }
            _ => Step::Continue,
        }
    }

    fn start_new_word<S: Storage>(&mut self, session: &mut Session<S>) {
        session.new_game();
        self.state = TuiState::Playing;
        self.message = "New word!".to_string();
        self.error_message.clear();
        self.status = Self::turn_status(session.puzzle());
    }

    fn submit<S: Storage>(&mut self, session: &mut Session<S>) {
        match session.submit() {
            Ok(Some(_)) => self.sync_with(session),
            Ok(None) => {}
            Err(SubmitError::IncompleteGuess) => {
                self.error_message = "Not enough letters".to_string();
            }
            Err(SubmitError::UnknownWord) => {
                self.error_message = "Not in word list".to_string();
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Run a session in the TUI until the player quits.
pub fn run<S: Storage>(session: &mut Session<S>) -> Result<(), io::Error> {
    let mut tui = TuiInterface::new()?;
    tui.sync_with(session);

    loop {
        tui.draw(session)?;
        match tui.handle_input(session)? {
            Step::Exit => break,
            Step::Continue => {}
        }
    }
    tui.cleanup()
}
