use crate::error::{GameError, GameResult};
use std::fmt;
use std::str::FromStr;

pub const WORD_LENGTH: usize = 5;

/// The one letter no word in this game may contain.
pub const BANNED_LETTER: char = 'Z';

/// True for letters that can be typed into a guess.
#[must_use]
pub fn is_playable_letter(c: char) -> bool {
    c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&BANNED_LETTER)
}

/// A five-letter word, stored upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a candidate word, rejecting anything that is not exactly five
    /// ASCII letters, or that contains [`BANNED_LETTER`]. Surrounding
    /// whitespace is not trimmed.
    pub fn parse(input: &str) -> GameResult<Self> {
        let len = input.chars().count();
        if len != WORD_LENGTH {
            return Err(GameError::TooShort { len });
        }
        if !input.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::NonAlphabetic(input.to_string()));
        }
        if !input.chars().all(is_playable_letter) {
            return Err(GameError::BannedLetter(BANNED_LETTER));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(input.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|&b| char::from(b))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
