use crate::error::{GameError, GameResult};
use crate::evaluator::{Feedback, FeedbackRow, evaluate_words};
use crate::wordbank::{Dictionary, Puzzle};
use crate::word::Word;
use crate::{debug_log, info_log};
use std::collections::BTreeMap;

pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: FeedbackRow,
    pub status: GameStatus,
}

/// One accepted guess and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub row: FeedbackRow,
}

/// A single game against a fixed target word.
///
/// The session owns its dictionary and an append-only log of accepted
/// guesses. Once it is won or lost it rejects every further submission.
pub struct GameSession<D: Dictionary> {
    target: Word,
    dictionary: D,
    rows: Vec<GuessRecord>,
    max_attempts: usize,
    status: GameStatus,
}

impl<D: Dictionary> GameSession<D> {
    pub fn new(target: Word, dictionary: D) -> Self {
        Self::with_max_attempts(target, dictionary, MAX_ATTEMPTS)
    }

    /// A session with no attempts at all starts out lost.
    pub fn with_max_attempts(target: Word, dictionary: D, max_attempts: usize) -> Self {
        info_log!("New session with {} attempts", max_attempts);
        let status = if max_attempts == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        Self {
            target,
            dictionary,
            rows: Vec::with_capacity(max_attempts),
            max_attempts,
            status,
        }
    }

    /// Validate and evaluate a candidate word, recording the result.
    pub fn submit(&mut self, candidate: &str) -> GameResult<Submission> {
        if self.status.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        let guess = Word::parse(candidate)?;
        if !self.dictionary.contains(&guess) {
            debug_log!("Rejected '{}': not in dictionary", guess);
            return Err(GameError::NotInDictionary(guess.to_string()));
        }

        let row = evaluate_words(&guess, &self.target);
        self.rows.push(GuessRecord {
            guess,
            row: row.clone(),
        });

        self.status = if row.is_win() {
            GameStatus::Won
        } else if self.rows.len() >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        info_log!(
            "Guess {} of {}: {} -> {} ({:?})",
            self.rows.len(),
            self.max_attempts,
            guess,
            row,
            self.status
        );

        Ok(Submission {
            row,
            status: self.status,
        })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRecord] {
        &self.rows
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.rows.len())
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Best label seen so far for every guessed letter.
    #[must_use]
    pub fn letter_hints(&self) -> BTreeMap<char, Feedback> {
        let mut hints: BTreeMap<char, Feedback> = BTreeMap::new();
        for record in &self.rows {
            for (letter, label) in record.guess.letters().zip(record.row.iter()) {
                hints
                    .entry(letter)
                    .and_modify(|best| {
                        if label.rank() > best.rank() {
                            *best = label;
                        }
                    })
                    .or_insert(label);
            }
        }
        hints
    }

    /// Spoiler-free summary: a score line followed by one emoji line per guess.
    #[must_use]
    pub fn share_text(&self, puzzle_number: usize) -> String {
        let score = match self.status {
            GameStatus::Won => self.rows.len().to_string(),
            GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
        };
        let mut text = format!("WWZ #{puzzle_number} {score}/{}", self.max_attempts);
        for record in &self.rows {
            text.push('\n');
            text.push_str(&record.row.to_emoji_string());
        }
        text
    }
}

// Display sink and driver loop

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
}

/// What the display needs to know once a game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub target: Word,
    pub attempts: usize,
    pub share_text: String,
}

/// Front end of a game: reads the player's actions and shows results.
pub trait GameInterface {
    fn display_puzzle(&mut self, puzzle_number: usize, max_attempts: usize);
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_row(&mut self, guess: &Word, row: &FeedbackRow, hints: &BTreeMap<char, Feedback>);
    fn display_rejection(&mut self, error: &GameError);
    fn display_outcome(&mut self, outcome: &GameOutcome);
    fn display_exit_message(&mut self);
    /// Keep the final board visible until the player leaves.
    fn wait_for_exit(&mut self) {}
}

/// Run a session to completion against `interface`.
///
/// Returns the final status; `InProgress` means the player quit early or
/// the input ran out.
pub fn game_loop<D: Dictionary, I: GameInterface + ?Sized>(
    session: &mut GameSession<D>,
    puzzle: &Puzzle,
    interface: &mut I,
) -> GameStatus {
    interface.display_puzzle(puzzle.number, session.max_attempts());

    while !session.status().is_over() {
        let Some(action) = interface.read_action() else {
            debug_log!("game_loop() - input closed");
            break;
        };
        let candidate = match action {
            UserAction::Exit => {
                interface.display_exit_message();
                return session.status();
            }
            UserAction::Guess(candidate) => candidate,
        };

        match session.submit(&candidate) {
            Ok(submission) => {
                if let Some(record) = session.rows().last() {
                    interface.display_row(&record.guess, &submission.row, &session.letter_hints());
                }
            }
            Err(e) => interface.display_rejection(&e),
        }
    }

    if session.status().is_over() {
        interface.display_outcome(&GameOutcome {
            status: session.status(),
            target: *session.target(),
            attempts: session.attempts_used(),
            share_text: session.share_text(puzzle.number),
        });
        interface.wait_for_exit();
    }
    session.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::WordSet;

    fn dictionary() -> WordSet {
        WordSet::new(
            ["CRANE", "TRACE", "SLATE", "RAISE", "STARE", "SPARE", "ERASE", "SPEED", "HELLO"]
                .iter()
                .map(|w| Word::parse(w).unwrap()),
        )
    }

    fn session(target: &str) -> GameSession<WordSet> {
        GameSession::new(Word::parse(target).unwrap(), dictionary())
    }

    #[derive(Default)]
    struct Recorder {
        actions: Vec<UserAction>,
        rows: Vec<String>,
        rejections: Vec<GameError>,
        outcome: Option<GameOutcome>,
        exited: bool,
    }

    impl GameInterface for Recorder {
        fn display_puzzle(&mut self, _puzzle_number: usize, _max_attempts: usize) {}

        fn read_action(&mut self) -> Option<UserAction> {
            if self.actions.is_empty() {
                None
            } else {
                Some(self.actions.remove(0))
            }
        }

        fn display_row(&mut self, guess: &Word, row: &FeedbackRow, _hints: &BTreeMap<char, Feedback>) {
            self.rows.push(format!("{guess}:{row}"));
        }

        fn display_rejection(&mut self, error: &GameError) {
            self.rejections.push(error.clone());
        }

        fn display_outcome(&mut self, outcome: &GameOutcome) {
            self.outcome = Some(outcome.clone());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn guesses(words: &[&str]) -> Vec<UserAction> {
        words.iter().map(|w| UserAction::Guess((*w).to_string())).collect()
    }

    #[test]
    fn test_win_on_all_match() {
        let mut game = session("CRANE");
        let result = game.submit("crane").unwrap();
        assert!(result.row.is_win());
        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.remaining_attempts(), 5);
    }

    #[test]
    fn test_non_winning_guess_stays_in_progress() {
        let mut game = session("CRANE");
        let result = game.submit("TRACE").unwrap();
        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(result.row.to_string(), "XGGYG");
        assert_eq!(game.rows().len(), 1);
        assert_eq!(game.rows()[0].guess.as_str(), "TRACE");
    }

    #[test]
    fn test_lost_after_max_attempts() {
        let mut game = session("CRANE");
        for i in 0..MAX_ATTEMPTS {
            let result = game.submit("SLATE").unwrap();
            if i + 1 < MAX_ATTEMPTS {
                assert_eq!(result.status, GameStatus::InProgress);
            } else {
                assert_eq!(result.status, GameStatus::Lost);
            }
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
    }

    #[test]
    fn test_win_on_last_attempt() {
        let mut game = session("CRANE");
        for _ in 0..MAX_ATTEMPTS - 1 {
            game.submit("SLATE").unwrap();
        }
        assert_eq!(game.submit("CRANE").unwrap().status, GameStatus::Won);
    }

    #[test]
    fn test_terminal_session_rejects_submissions() {
        let mut game = session("CRANE");
        game.submit("CRANE").unwrap();
        assert_eq!(game.submit("SLATE"), Err(GameError::GameAlreadyOver));
        // Even malformed input reports the game as over
        assert_eq!(game.submit("AB"), Err(GameError::GameAlreadyOver));
        assert_eq!(game.attempts_used(), 1);

        let mut lost = GameSession::with_max_attempts(Word::parse("CRANE").unwrap(), dictionary(), 1);
        lost.submit("SLATE").unwrap();
        assert_eq!(lost.status(), GameStatus::Lost);
        assert_eq!(lost.submit("CRANE"), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_rejections_do_not_use_attempts() {
        let mut game = session("CRANE");
        assert_eq!(game.submit("CRAN"), Err(GameError::TooShort { len: 4 }));
        assert_eq!(game.submit("CRANES"), Err(GameError::TooShort { len: 6 }));
        assert!(matches!(game.submit("CR4NE"), Err(GameError::NonAlphabetic(_))));
        assert_eq!(
            game.submit("QQQQQ"),
            Err(GameError::NotInDictionary("QQQQQ".to_string()))
        );
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_banned_letter_rejected_before_dictionary() {
        let mut game = session("CRANE");
        assert_eq!(game.submit("crazy"), Err(GameError::BannedLetter('Z')));
        assert_eq!(game.submit("ZZZZZ"), Err(GameError::BannedLetter('Z')));
        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_zero_attempts_starts_lost() {
        let mut game = GameSession::with_max_attempts(Word::parse("CRANE").unwrap(), dictionary(), 0);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
        assert_eq!(game.submit("CRANE"), Err(GameError::GameAlreadyOver));
        assert!(game.rows().is_empty());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = session("CRANE");
        let mut second = session("SLATE");
        first.submit("CRANE").unwrap();
        assert_eq!(first.status(), GameStatus::Won);
        assert_eq!(second.status(), GameStatus::InProgress);
        assert_eq!(second.submit("CRANE").unwrap().status, GameStatus::InProgress);
    }

    #[test]
    fn test_letter_hints_keep_best_label() {
        let mut game = session("CRANE");
        game.submit("TRACE").unwrap();
        game.submit("SPARE").unwrap();
        let hints = game.letter_hints();
        assert_eq!(hints[&'T'], Feedback::Incorrect);
        assert_eq!(hints[&'C'], Feedback::WrongPosition);
        assert_eq!(hints[&'R'], Feedback::Match);
        assert_eq!(hints[&'E'], Feedback::Match);
        assert_eq!(hints[&'S'], Feedback::Incorrect);
        assert!(!hints.contains_key(&'N'));
    }

    #[test]
    fn test_share_text() {
        let mut game = session("CRANE");
        game.submit("TRACE").unwrap();
        game.submit("CRANE").unwrap();
        assert_eq!(game.share_text(12), "WWZ #12 2/6\n⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");

        let mut lost = GameSession::with_max_attempts(Word::parse("CRANE").unwrap(), dictionary(), 1);
        lost.submit("HELLO").unwrap();
        assert!(lost.share_text(3).starts_with("WWZ #3 X/1\n"));
    }

    #[test]
    fn test_game_loop_win() {
        let mut game = session("CRANE");
        let puzzle = Puzzle {
            number: 7,
            target: *game.target(),
        };
        let mut ui = Recorder {
            actions: guesses(&["SLATE", "nope", "CRANE"]),
            ..Recorder::default()
        };
        let status = game_loop(&mut game, &puzzle, &mut ui);
        assert_eq!(status, GameStatus::Won);
        assert_eq!(ui.rows, vec!["SLATE:XXGXG", "CRANE:GGGGG"]);
        assert_eq!(ui.rejections, vec![GameError::TooShort { len: 4 }]);
        let outcome = ui.outcome.unwrap();
        assert_eq!(outcome.attempts, 2);
        assert!(outcome.share_text.starts_with("WWZ #7 2/6"));
    }

    #[test]
    fn test_game_loop_exit_early() {
        let mut game = session("CRANE");
        let puzzle = Puzzle {
            number: 0,
            target: *game.target(),
        };
        let mut actions = guesses(&["SLATE"]);
        actions.push(UserAction::Exit);
        actions.extend(guesses(&["CRANE"]));
        let mut ui = Recorder {
            actions,
            ..Recorder::default()
        };
        assert_eq!(game_loop(&mut game, &puzzle, &mut ui), GameStatus::InProgress);
        assert!(ui.exited);
        assert!(ui.outcome.is_none());
        assert_eq!(game.attempts_used(), 1);
    }

    #[test]
    fn test_game_loop_loss_reveals_target() {
        let mut game = GameSession::with_max_attempts(Word::parse("CRANE").unwrap(), dictionary(), 2);
        let puzzle = Puzzle {
            number: 1,
            target: *game.target(),
        };
        let mut ui = Recorder {
            actions: guesses(&["SLATE", "HELLO", "CRANE"]),
            ..Recorder::default()
        };
        assert_eq!(game_loop(&mut game, &puzzle, &mut ui), GameStatus::Lost);
        let outcome = ui.outcome.unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(outcome.target.as_str(), "CRANE");
        // The loop stops reading once the game is over
        assert_eq!(ui.actions, guesses(&["CRANE"]));
    }
}
