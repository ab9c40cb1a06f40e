//! Error types for guess evaluation and session play.

use thiserror::Error;

/// Errors reported by the evaluator, the session and the word list loader.
///
/// None of these are fatal: the caller decides how to present them, usually
/// as a short notice before asking for another guess.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess and target have different lengths. Callers are expected to
    /// validate length before evaluating, so this indicates a bug.
    #[error("guess has {guess_len} letters but target has {target_len}")]
    InvalidInput { guess_len: usize, target_len: usize },

    /// The candidate does not have exactly five letters.
    #[error("Not enough letters")]
    TooShort { len: usize },

    /// The candidate contains something other than ASCII letters.
    #[error("Only letters are allowed: {0}")]
    NonAlphabetic(String),

    /// The candidate uses the letter this game leaves out.
    #[error("The letter {0} is not used in this game")]
    BannedLetter(char),

    /// The dictionary does not recognise the candidate.
    #[error("Not in word list: {0}")]
    NotInDictionary(String),

    /// The session already reached a terminal status.
    #[error("The game is already over")]
    GameAlreadyOver,

    /// No target words were available to pick a puzzle from.
    #[error("word list is empty")]
    EmptyWordList,
}

pub type GameResult<T> = Result<T, GameError>;
