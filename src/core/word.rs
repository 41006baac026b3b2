//! Candidate normalization and letter multisets
//!
//! A word is derivable from a root word when its letters, counted with
//! repetition, never exceed the root word's letter counts.

use rustc_hash::FxHashMap;

/// Shortest word length a game accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Normalize raw user input: trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Lines\n"), "lines");
/// ```
#[must_use]
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

/// Length of a word in characters (not bytes)
#[inline]
#[must_use]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Whether a normalized word is long enough to be accepted
#[inline]
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word_length(word) >= MIN_WORD_LENGTH
}

/// Whether the "word is too short" hint should show for the current input
///
/// The hint stays hidden for empty input so a fresh field is not flagged.
#[must_use]
pub fn is_too_short_hint(input: &str) -> bool {
    let len = word_length(input.trim());
    len > 0 && len < MIN_WORD_LENGTH
}

/// Letter counts of a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::new("letter");
    /// assert_eq!(counts.count('t'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Multiset-subset test: every letter of `other` is available here
    /// at least as many times
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .counts
            .iter()
            .all(|(&letter, &needed)| self.count(letter) >= needed)
    }

    /// Whether `word` can be spelled using only these letters
    ///
    /// Consumes letters one at a time and stops at the first one that has
    /// run out.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let silent = LetterCounts::new("silent");
    /// assert!(silent.can_spell("lines"));
    /// assert!(!silent.can_spell("tents"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for letter in word.chars() {
            match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("LINES"), "lines");
        assert_eq!(normalize("\t  Tiles \n"), "tiles");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" ice cream "), "ice cream");
    }

    #[test]
    fn word_length_counts_chars() {
        assert_eq!(word_length("lines"), 5);
        assert_eq!(word_length("café"), 4);
        assert_eq!(word_length(""), 0);
    }

    #[test]
    fn long_enough_boundary() {
        assert!(!is_long_enough("tin"));
        assert!(is_long_enough("tine"));
        assert!(!is_long_enough(""));
    }

    #[test]
    fn too_short_hint_hidden_for_empty_input() {
        assert!(!is_too_short_hint(""));
        assert!(!is_too_short_hint("   "));
    }

    #[test]
    fn too_short_hint_shown_for_one_to_three_chars() {
        assert!(is_too_short_hint("a"));
        assert!(is_too_short_hint(" tin "));
        assert!(!is_too_short_hint("tine"));
    }

    #[test]
    fn letter_counts_duplicates() {
        let counts = LetterCounts::new("letter");
        assert_eq!(counts.count('l'), 1);
        assert_eq!(counts.count('e'), 2);
        assert_eq!(counts.count('t'), 2);
        assert_eq!(counts.count('r'), 1);
        assert_eq!(counts.count('x'), 0);
    }

    #[test]
    fn letter_counts_empty() {
        let counts = LetterCounts::new("");
        assert_eq!(counts.count('a'), 0);
        assert!(LetterCounts::new("silent").contains(&counts));
    }

    #[test]
    fn contains_respects_multiplicity() {
        let silent = LetterCounts::new("silent");
        assert!(silent.contains(&LetterCounts::new("lines")));
        assert!(silent.contains(&LetterCounts::new("silent")));
        assert!(!silent.contains(&LetterCounts::new("lessen")));
        assert!(!silent.contains(&LetterCounts::new("zzzzz")));
    }

    #[test]
    fn can_spell_matches_contains() {
        let root = LetterCounts::new("elephant");
        for word in ["plant", "heap", "panel", "pelt", "elephants", "teeth", "help"] {
            assert_eq!(
                root.can_spell(word),
                root.contains(&LetterCounts::new(word)),
                "mismatch for '{word}'"
            );
        }
    }

    #[test]
    fn can_spell_rejects_overused_letter() {
        let silent = LetterCounts::new("silent");
        assert!(!silent.can_spell("sills"));
        assert!(silent.can_spell("list"));
    }

    #[test]
    fn can_spell_empty_word() {
        assert!(LetterCounts::new("silent").can_spell(""));
        assert!(LetterCounts::new("").can_spell(""));
    }
}
