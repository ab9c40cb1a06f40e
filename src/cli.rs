use crate::error::GameError;
use crate::evaluator::{Feedback, FeedbackRow};
use crate::game_state::{GameInterface, GameOutcome, GameStatus, UserAction};
use crate::word::Word;
use crate::wordbank::default_epoch;
use chrono::NaiveDate;
use clap::Parser;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::PathBuf;

/// Wordle without Z, one puzzle a day, in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of target words
    #[arg(short = 'w', long = "wordlist")]
    pub wordlist_path: Option<PathBuf>,

    /// Path to a newline-delimited list of accepted guesses
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Play the puzzle of another day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Day of puzzle number zero (YYYY-MM-DD)
    #[arg(long, default_value_t = default_epoch())]
    pub epoch: NaiveDate,

    /// Line-based play instead of the full-screen interface
    #[arg(short = 'p', long)]
    pub plain: bool,

    /// Write logs to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

#[must_use]
pub fn format_row(guess: &Word, row: &FeedbackRow) -> String {
    format!("{guess}  {}", row.to_emoji_string())
}

#[must_use]
pub fn format_hints(hints: &BTreeMap<char, Feedback>) -> String {
    hints
        .iter()
        .map(|(letter, label)| format!("{letter}:{}", label.to_char()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter your guess (5 letters, or 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }
    let input = input.trim().to_uppercase();

    if input == "EXIT" {
        Some(UserAction::Exit)
    } else {
        Some(UserAction::Guess(input))
    }
}

pub fn display_outcome(outcome: &GameOutcome) {
    match outcome.status {
        GameStatus::Won => println!("You win! Solved in {} guesses.", outcome.attempts),
        GameStatus::Lost => println!("Out of guesses. The word was {}.", outcome.target),
        GameStatus::InProgress => {}
    }
    println!("\n{}", outcome.share_text);
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and prints results to stdout
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_puzzle(&mut self, puzzle_number: usize, max_attempts: usize) {
        println!("WWZ #{puzzle_number}: guess the word in {max_attempts} tries.");
    }

    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_row(&mut self, guess: &Word, row: &FeedbackRow, hints: &BTreeMap<char, Feedback>) {
        println!("{}", format_row(guess, row));
        println!("Letters: {}", format_hints(hints));
    }

    fn display_rejection(&mut self, error: &GameError) {
        println!("{error}");
    }

    fn display_outcome(&mut self, outcome: &GameOutcome) {
        display_outcome(outcome);
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
