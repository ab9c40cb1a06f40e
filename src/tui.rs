//! TUI (Terminal User Interface) module for Wordle without Z
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiInterface`: renders the board, the on-screen keyboard and messages.
//! - `InputState`: the typed row, notices and help toggle; turns key presses
//!   into game actions through [`crate::input::dispatch`].
//!
//! Letters are typed into the current row; ENTER submits the row to the
//! session. Rejected rows stay on screen so they can be corrected. Once the
//! game is over the board stays up, with the share summary, until ESC.

use crate::error::GameError;
use crate::evaluator::{Feedback, FeedbackRow};
use crate::game_state::{GameInterface, GameOutcome, GameStatus, UserAction};
use crate::input::{Action, GuessBuffer, Key, dispatch};
use crate::word::{WORD_LENGTH, Word, is_playable_letter};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
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
use std::collections::BTreeMap;
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

const HELP_TEXT: [&str; 5] = [
    "Guess the hidden five-letter word in six tries.",
    "Green: right letter, right spot.",
    "Yellow: in the word, another spot.",
    "Gray: no more of this letter in the word.",
    "No word uses the letter Z, so its key is struck out.",
];

#[derive(Clone, Copy, PartialEq, Debug)]
enum LetterState {
    Empty,
    Entered,
    Scored(Feedback),
    Banned,
}

impl LetterState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Banned => (Color::Black, Color::DarkGray),
            Self::Scored(Feedback::Match) => (Color::Green, Color::Black),
            Self::Scored(Feedback::WrongPosition) => (Color::Yellow, Color::Black),
            Self::Scored(Feedback::Incorrect) => (Color::Gray, Color::White),
        }
    }
}

#[derive(Debug)]
struct GuessRow {
    letters: [char; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

impl GuessRow {
    fn new() -> Self {
        Self {
            letters: [' '; WORD_LENGTH],
            states: [LetterState::Empty; WORD_LENGTH],
        }
    }

    fn from_input(input: &str) -> Self {
        let mut row = Self::new();
        for (i, ch) in input.chars().enumerate().take(WORD_LENGTH) {
            row.letters[i] = ch;
            row.states[i] = LetterState::Entered;
        }
        row
    }

    fn scored(guess: &Word, feedback: &FeedbackRow) -> Self {
        let mut row = Self::new();
        for (i, (ch, label)) in guess.letters().zip(feedback.iter()).enumerate() {
            row.letters[i] = ch;
            row.states[i] = LetterState::Scored(label);
        }
        row
    }
}

/// State of one on-screen keyboard key: the banned letter is always struck
/// out, other keys take the best feedback seen for them so far.
fn keyboard_key_state(key: char, hints: &BTreeMap<char, Feedback>) -> LetterState {
    if !is_playable_letter(key) {
        return LetterState::Banned;
    }
    hints
        .get(&key)
        .map_or(LetterState::Entered, |label| LetterState::Scored(*label))
}

fn keyboard_key_style(state: LetterState) -> Style {
    let (bg_color, fg_color) = state.colors();
    let style = Style::default().fg(fg_color).bg(bg_color);
    if state == LetterState::Banned {
        style.add_modifier(Modifier::CROSSED_OUT)
    } else {
        style
    }
}

/// Translate a terminal key event into a game key. Events with Alt or
/// Control held, and stray characters from terminal escape sequences, are
/// reported as `Key::Other`.
fn to_key(key: &KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL) {
        return Key::Other;
    }
    match key.code {
        KeyCode::Char(c) if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD => {
            Key::Other
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    }
}

/// The part of the screen that reacts to key presses: the row being typed,
/// the last rejection notice and the help toggle.
#[derive(Debug, Default)]
struct InputState {
    buffer: GuessBuffer,
    error_message: String,
    show_help: bool,
    game_over: bool,
}

impl InputState {
    fn handle_key(&mut self, key: Key) -> Option<UserAction> {
        self.apply_action(dispatch(key, self.game_over))
    }

    /// Apply one action to the typed row. Returns a user action when the
    /// key ends the read. Submitting leaves the row typed until the session
    /// accepts or rejects it.
    fn apply_action(&mut self, action: Action) -> Option<UserAction> {
        match action {
            Action::PushLetter(c) => {
                self.error_message.clear();
                if !self.buffer.push(c) {
                    debug_log!("apply_action() - Row full, ignoring '{}'", c);
                }
            }
            Action::DeleteLetter => {
                self.error_message.clear();
                self.buffer.pop();
            }
            Action::Submit => {
                info_log!("apply_action() - Submitting '{}'", self.buffer.as_str());
                return Some(UserAction::Guess(self.buffer.as_str().to_string()));
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => return Some(UserAction::Exit),
            Action::Ignore => {}
        }
        None
    }

    fn accept_row(&mut self) {
        self.buffer.clear();
        self.error_message.clear();
    }

    fn reject(&mut self, error: &GameError) {
        self.error_message = error.to_string();
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    guesses: &'a [GuessRow],
    current_input: &'a str,
    max_attempts: usize,
    game_over: bool,
    hints: &'a BTreeMap<char, Feedback>,
    message: &'a str,
    error_message: &'a str,
    share_text: &'a str,
    show_help: bool,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    guesses: Vec<GuessRow>,
    input: InputState,
    max_attempts: usize,
    hints: BTreeMap<char, Feedback>,
    message: String,
    share_text: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            guesses: Vec::new(),
            input: InputState::default(),
            max_attempts: crate::game_state::MAX_ATTEMPTS,
            hints: BTreeMap::new(),
            message: String::new(),
            share_text: String::new(),
            status: "Ready to start".to_string(),
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

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            guesses: &self.guesses,
            current_input: self.input.buffer.as_str(),
            max_attempts: self.max_attempts,
            game_over: self.input.game_over,
            hints: &self.hints,
            message: &self.message,
            error_message: &self.input.error_message,
            share_text: &self.share_text,
            show_help: self.input.show_help,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let board_height = ctx.max_attempts as u16 * ROW_SPACING + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(board_height), // Game board
                Constraint::Length(5),            // Keyboard
                Constraint::Min(6),               // Info panel
                Constraint::Length(3),            // Status line
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_keyboard(f, chunks[2], ctx.hints);
        Self::render_info(f, chunks[3], ctx);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.game_over);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE WITHOUT Z")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title("Guesses")
            .borders(Borders::ALL)
            .style(Style::default());

        let inner = block.inner(area);
        f.render_widget(block, area);

        for row_index in 0..ctx.max_attempts {
            let row = match ctx.guesses.get(row_index) {
                Some(row) => Self::row_spans(row),
                None if row_index == ctx.guesses.len() && !ctx.game_over => {
                    Self::row_spans(&GuessRow::from_input(ctx.current_input))
                }
                None => Self::row_spans(&GuessRow::new()),
            };
            Self::render_line(f, inner, row_index, row);
        }
    }

    fn row_spans(row: &GuessRow) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw("  ")];
        for (letter, state) in row.letters.iter().zip(row.states.iter()) {
            let (bg_color, fg_color) = state.colors();
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_line(f: &mut Frame, area: Rect, row_index: usize, spans: Vec<Span>) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
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

    fn render_keyboard(f: &mut Frame, area: Rect, hints: &BTreeMap<char, Feedback>) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|keys| {
                let mut spans = vec![Span::raw("  ")];
                for key in keys.chars() {
                    spans.push(Span::styled(
                        format!(" {key} "),
                        keyboard_key_style(keyboard_key_state(key, hints)),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if ctx.show_help {
            lines.push(Line::from(vec![Span::styled("How to play:", HEADER_STYLE)]));
            for text in HELP_TEXT {
                lines.push(Line::from(format!("  {text}")));
            }
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            let style = if ctx.game_over {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
        }

        if !ctx.share_text.is_empty() {
            lines.push(Line::from(""));
            for share_line in ctx.share_text.lines() {
                lines.push(Line::from(vec![Span::styled(share_line, INFO_STYLE)]));
            }
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, game_over: bool) {
        let text = if game_over {
            "?: Help | ESC: Quit"
        } else {
            "Type your guess | ENTER: Submit | BACKSPACE: Delete | ?: Help | ESC: Quit"
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Wait briefly for a key press. Returns `None` on timeout or for
    /// events that are not key presses.
    fn next_key(&mut self) -> Result<Option<Key>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != KeyEventKind::Press {
                    debug_log!("next_key() - Ignoring non-Press key event: {:?}", key.kind);
                    return Ok(None);
                }
                debug_log!(
                    "next_key() - code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(Some(to_key(&key)))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_puzzle(&mut self, puzzle_number: usize, max_attempts: usize) {
        self.max_attempts = max_attempts;
        self.message = format!("WWZ #{puzzle_number}");
        self.status = format!("Guess the word in {max_attempts} tries");
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.input.handle_key(key) {
                        info_log!("read_action() - Action: {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    debug_log!("read_action() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_row(&mut self, guess: &Word, row: &FeedbackRow, hints: &BTreeMap<char, Feedback>) {
        self.guesses.push(GuessRow::scored(guess, row));
        self.input.accept_row();
        self.hints.clone_from(hints);
        self.status = format!(
            "{} of {} guesses used",
            self.guesses.len(),
            self.max_attempts
        );
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: &GameError) {
        self.input.reject(error);
        self.draw_or_log();
    }

    fn display_outcome(&mut self, outcome: &GameOutcome) {
        self.input.game_over = true;
        self.message = match outcome.status {
            GameStatus::Won => format!("You win! Solved in {}.", outcome.attempts),
            GameStatus::Lost | GameStatus::InProgress => {
                format!("The word was {}", outcome.target)
            }
        };
        self.share_text.clone_from(&outcome.share_text);
        self.status = "Game over".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }

    fn wait_for_exit(&mut self) {
        loop {
            self.draw_or_log();
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(UserAction::Exit) = self.input.handle_key(key) {
                        return;
                    }
                }
                Ok(None) => {}
                Err(_) => return,
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
