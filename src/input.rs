//! Key handling shared by the front ends.
//!
//! Keys are mapped to [`Action`]s by a plain function so the mapping can be
//! tested without a terminal; [`GuessBuffer`] collects the letters of the
//! guess being typed.

use crate::word::{WORD_LENGTH, is_playable_letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Esc,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PushLetter(char),
    DeleteLetter,
    Submit,
    ToggleHelp,
    Quit,
    Ignore,
}

/// Map a key to an action. The banned letter never types. After the game
/// ends only help and quit work.
#[must_use]
pub fn dispatch(key: Key, game_over: bool) -> Action {
    match key {
        Key::Esc => Action::Quit,
        Key::Char('?') => Action::ToggleHelp,
        _ if game_over => Action::Ignore,
        Key::Enter => Action::Submit,
        Key::Backspace | Key::Delete => Action::DeleteLetter,
        Key::Char(c) if is_playable_letter(c) => Action::PushLetter(c.to_ascii_uppercase()),
        Key::Char(_) | Key::Other => Action::Ignore,
    }
}

/// Letters typed so far for the current row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: String,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter; returns false when the row is full or the
    /// character is not a playable letter.
    pub fn push(&mut self, c: char) -> bool {
        if self.is_full() || !is_playable_letter(c) {
            return false;
        }
        self.letters.push(c.to_ascii_uppercase());
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= WORD_LENGTH
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    /// Hand over the typed letters, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.letters)
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_during_play() {
        assert_eq!(dispatch(Key::Char('a'), false), Action::PushLetter('A'));
        assert_eq!(dispatch(Key::Char('Q'), false), Action::PushLetter('Q'));
        assert_eq!(dispatch(Key::Enter, false), Action::Submit);
        assert_eq!(dispatch(Key::Backspace, false), Action::DeleteLetter);
        assert_eq!(dispatch(Key::Delete, false), Action::DeleteLetter);
        assert_eq!(dispatch(Key::Char('?'), false), Action::ToggleHelp);
        assert_eq!(dispatch(Key::Esc, false), Action::Quit);
        assert_eq!(dispatch(Key::Char('3'), false), Action::Ignore);
        assert_eq!(dispatch(Key::Other, false), Action::Ignore);
    }

    #[test]
    fn test_dispatch_after_game_over() {
        assert_eq!(dispatch(Key::Char('a'), true), Action::Ignore);
        assert_eq!(dispatch(Key::Enter, true), Action::Ignore);
        assert_eq!(dispatch(Key::Backspace, true), Action::Ignore);
        assert_eq!(dispatch(Key::Char('?'), true), Action::ToggleHelp);
        assert_eq!(dispatch(Key::Esc, true), Action::Quit);
    }

    #[test]
    fn test_dispatch_ignores_banned_letter() {
        assert_eq!(dispatch(Key::Char('z'), false), Action::Ignore);
        assert_eq!(dispatch(Key::Char('Z'), false), Action::Ignore);
        assert_eq!(dispatch(Key::Char('y'), false), Action::PushLetter('Y'));
    }

    #[test]
    fn test_buffer_rejects_banned_letter() {
        let mut buffer = GuessBuffer::new();
        assert!(buffer.push('a'));
        assert!(!buffer.push('z'));
        assert!(!buffer.push('Z'));
        assert_eq!(buffer.as_str(), "A");
    }

    #[test]
    fn test_buffer_stops_at_word_length() {
        let mut buffer = GuessBuffer::new();
        for c in "cranes".chars() {
            buffer.push(c);
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.as_str(), "CRANE");
        assert!(!buffer.push('X'));
    }

    #[test]
    fn test_buffer_rejects_non_letters() {
        let mut buffer = GuessBuffer::new();
        assert!(!buffer.push('4'));
        assert!(!buffer.push(' '));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_buffer_pop_and_take() {
        let mut buffer = GuessBuffer::new();
        assert_eq!(buffer.pop(), None);
        for c in "SLAT".chars() {
            buffer.push(c);
        }
        assert_eq!(buffer.pop(), Some('T'));
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.take(), "SLA");
        assert!(buffer.is_empty());
    }
}
