//! Per-letter feedback for a guess against the target word.
//!
//! Feedback is computed in two passes so that repeated letters are handled
//! correctly: exact matches claim their letter first, and only the copies
//! of a letter that remain afterwards can be reported as present in the
//! wrong position, granted left to right.

use crate::error::{GameError, GameResult};
use crate::word::Word;
use std::collections::HashMap;
use std::fmt;

/// Feedback for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in the correct position (green)
    Match,
    /// Letter is in the target, at another position (yellow)
    WrongPosition,
    /// Letter is not usable here given the target's remaining letters (gray)
    Incorrect,
}

impl Feedback {
    pub fn to_emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::WrongPosition => '🟨',
            Self::Incorrect => '⬛',
        }
    }

    /// Single-letter code used in plain text output.
    pub fn to_char(self) -> char {
        match self {
            Self::Match => 'G',
            Self::WrongPosition => 'Y',
            Self::Incorrect => 'X',
        }
    }

    /// How much a label tells about a letter. Used to keep the most
    /// informative label when colouring the keyboard.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Self::Incorrect => 0,
            Self::WrongPosition => 1,
            Self::Match => 2,
        }
    }
}

/// Feedback labels for one accepted guess, aligned with its letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackRow(Vec<Feedback>);

impl FeedbackRow {
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|f| *f == Feedback::Match)
    }

    #[must_use]
    pub fn labels(&self) -> &[Feedback] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn to_emoji_string(&self) -> String {
        self.iter().map(Feedback::to_emoji).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.iter() {
            write!(f, "{}", label.to_char())?;
        }
        Ok(())
    }
}

/// Compute feedback for two equal-length letter strings, ignoring case.
///
/// Returns [`GameError::InvalidInput`] when the lengths differ.
pub fn evaluate(guess: &str, target: &str) -> GameResult<FeedbackRow> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();
    if guess.len() != target.len() {
        return Err(GameError::InvalidInput {
            guess_len: guess.len(),
            target_len: target.len(),
        });
    }
    Ok(evaluate_letters(&guess, &target))
}

/// Compute feedback for two validated words.
#[must_use]
pub fn evaluate_words(guess: &Word, target: &Word) -> FeedbackRow {
    let guess: Vec<char> = guess.letters().collect();
    let target: Vec<char> = target.letters().collect();
    evaluate_letters(&guess, &target)
}

fn evaluate_letters(guess: &[char], target: &[char]) -> FeedbackRow {
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in target {
        *remaining.entry(c).or_insert(0) += 1;
    }

    // First pass: exact matches consume their letter; `None` means the
    // position must wait until every match has been settled.
    let mut labels: Vec<Option<Feedback>> = Vec::with_capacity(guess.len());
    for (&g, &t) in guess.iter().zip(target) {
        let count = remaining.entry(g).or_insert(0);
        if g == t {
            *count = count.saturating_sub(1);
            labels.push(Some(Feedback::Match));
        } else if *count == 0 {
            labels.push(Some(Feedback::Incorrect));
        } else {
            labels.push(None);
        }
    }

    // Second pass: grant what is left of each letter, left to right
    let row = labels
        .into_iter()
        .zip(guess)
        .map(|(label, g)| {
            label.unwrap_or_else(|| match remaining.get_mut(g) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Feedback::WrongPosition
                }
                _ => Feedback::Incorrect,
            })
        })
        .collect();

    FeedbackRow(row)
}
