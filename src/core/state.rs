//! Game state: the root word, accepted words and score

use super::word::{LetterCounts, normalize, word_length};
use serde::Serialize;

/// State of a single game
///
/// Accepted words are stored most recent first. The score is the sum of the
/// lengths of every accepted word. Only the validator commits new words, so
/// a rejected submission can never leave a partially updated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
    #[serde(skip)]
    root_letters: LetterCounts,
}

impl GameState {
    /// Start a fresh game on `root_word`
    ///
    /// The root word is normalized the same way candidates are.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::GameState;
    ///
    /// let state = GameState::new("Silent");
    /// assert_eq!(state.root_word(), "silent");
    /// assert_eq!(state.score(), 0);
    /// assert!(state.used_words().is_empty());
    /// ```
    #[must_use]
    pub fn new(root_word: &str) -> Self {
        let root_word = normalize(root_word);
        let root_letters = LetterCounts::new(&root_word);
        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
            root_letters,
        }
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Letter counts of the root word
    #[inline]
    #[must_use]
    pub const fn root_letters(&self) -> &LetterCounts {
        &self.root_letters
    }

    /// Whether `word` has already been accepted
    #[must_use]
    pub fn has_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Record an accepted word in place
    ///
    /// Callers must have validated `word` first.
    pub(crate) fn record(&mut self, word: String) {
        self.score += word_length(&word);
        self.used_words.insert(0, word);
    }

    pub(crate) fn accept(mut self, word: String) -> Self {
        self.record(word);
        self
    }
}
