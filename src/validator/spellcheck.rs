//! Spell-check capability
//!
//! The validator only needs a yes/no answer for "is this word misspelled in
//! this language". Anything implementing [`SpellChecker`] can answer it: the
//! bundled [`Dictionary`], or a plain closure in tests.

use crate::wordlists::loader::load_from_file;
use crate::wordlists::{DICTIONARY, DICTIONARY_COUNT};
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::io;
use std::path::Path;

/// Language the embedded dictionary covers
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers whether a word is misspelled in a given language
pub trait SpellChecker {
    fn is_misspelled(&self, word: &str, language: &str) -> bool;
}

impl<F> SpellChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Word set for a single language
///
/// Every word is reported as misspelled when asked about any other language.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: String,
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from a list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validator::{Dictionary, SpellChecker};
    ///
    /// let dict = Dictionary::new("en", ["lines", "Tiles"]);
    /// assert!(!dict.is_misspelled("tiles", "en"));
    /// assert!(dict.is_misspelled("tlies", "en"));
    /// assert!(dict.is_misspelled("lines", "fr"));
    /// ```
    #[must_use]
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    ///
    /// The build script already trims and lowercases these entries.
    #[must_use]
    pub fn embedded() -> Self {
        let mut words = FxHashSet::with_capacity_and_hasher(DICTIONARY_COUNT, FxBuildHasher);
        words.extend(DICTIONARY.iter().map(|word| (*word).to_string()));
        log::debug!("loaded embedded {DEFAULT_LANGUAGE} dictionary ({DICTIONARY_COUNT} words)");

        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            words,
        }
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: impl Into<String>) -> io::Result<Self> {
        let words = load_from_file(path)?;
        Ok(Self::new(language, words))
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is listed, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl SpellChecker for Dictionary {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        !self.language.eq_ignore_ascii_case(language) || !self.contains(word)
    }
}
