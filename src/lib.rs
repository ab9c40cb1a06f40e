// Library interface for daily-wordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod evaluator;
pub mod game_state;
pub mod input;
pub mod logging;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GameError, GameResult};
pub use evaluator::{Feedback, FeedbackRow, evaluate, evaluate_words};
pub use game_state::{GameSession, GameStatus, MAX_ATTEMPTS, Submission, game_loop};
pub use word::{BANNED_LETTER, WORD_LENGTH, Word, is_playable_letter};
pub use wordbank::{
    Dictionary, Puzzle, WordSet, build_dictionary, elapsed_days, load_words_from_file,
    load_words_from_str, select_puzzle,
};
