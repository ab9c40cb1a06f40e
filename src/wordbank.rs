use crate::error::{GameError, GameResult};
use crate::word::Word;
use crate::{debug_log, info_log};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");
pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

const APP_DIR: &str = "daily-wordle";
const WORDLIST_FILE: &str = "wordlist.txt";
const DICTIONARY_FILE: &str = "dictionary.txt";

/// Set-membership oracle deciding which words are acceptable guesses.
pub trait Dictionary {
    fn contains(&self, word: &Word) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &Word) -> bool {
        (**self).contains(word)
    }
}

/// A fixed set of accepted guesses.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<Word>,
}

impl WordSet {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSet {
    fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

/// The target word for one day, with its position in the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub number: usize,
    pub target: Word,
}

/// Lines that are not playable five-letter words (wrong length, non-letters,
/// or the banned letter) are skipped.
fn parse_line(line: &str) -> Option<Word> {
    Word::parse(line.trim()).ok()
}

pub fn load_words_from_str(data: &str) -> Vec<Word> {
    data.lines().filter_map(parse_line).collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_line(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Word list override in the user config directory, if one exists.
pub fn get_wordlist_override_path() -> Option<PathBuf> {
    app_config_dir()
        .map(|dir| dir.join(WORDLIST_FILE))
        .filter(|path| path.is_file())
}

/// Dictionary override in the user config directory, if one exists.
pub fn get_dictionary_override_path() -> Option<PathBuf> {
    app_config_dir()
        .map(|dir| dir.join(DICTIONARY_FILE))
        .filter(|path| path.is_file())
}

/// Load words from `explicit`, else from `fallback_path`, else from the
/// embedded list.
pub fn resolve_words(
    explicit: Option<&Path>,
    fallback_path: Option<PathBuf>,
    embedded: &str,
) -> io::Result<Vec<Word>> {
    if let Some(path) = explicit {
        info_log!("Loading words from {}", path.display());
        return load_words_from_file(path);
    }
    if let Some(path) = fallback_path {
        info_log!("Loading words from config override {}", path.display());
        return load_words_from_file(path);
    }
    debug_log!("Using embedded word list");
    Ok(load_words_from_str(embedded))
}

/// Build the guess dictionary. Every target word is always a valid guess.
#[must_use]
pub fn build_dictionary(dictionary: Vec<Word>, wordlist: &[Word]) -> WordSet {
    let mut set = WordSet::new(dictionary);
    set.extend(wordlist.iter().copied());
    set
}

/// The date daily puzzles are counted from.
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default()
}

/// Whole days from `epoch` to `today`; negative before the epoch.
#[must_use]
pub fn elapsed_days(epoch: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(epoch).num_days()
}

/// Pick the puzzle for a day: `wordlist[elapsed_days mod len]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn select_puzzle(wordlist: &[Word], elapsed_days: i64) -> GameResult<Puzzle> {
    if wordlist.is_empty() {
        return Err(GameError::EmptyWordList);
    }
    // i128 holds every usize and i64; the remainder lies in 0..len
    let len = wordlist.len() as i128;
    let number = i128::from(elapsed_days).rem_euclid(len) as usize;
    let puzzle = Puzzle {
        number,
        target: wordlist[number],
    };
    debug_log!("Day {} selects puzzle #{}", elapsed_days, puzzle.number);
    Ok(puzzle)
}
