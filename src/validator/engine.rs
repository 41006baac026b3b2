//! Candidate evaluation

use super::rules::{OriginalityRule, Rejection};
use super::spellcheck::{DEFAULT_LANGUAGE, SpellChecker};
use crate::core::{GameState, is_long_enough, normalize};

/// Decides whether a candidate may be added to a game
///
/// Checks run in a fixed order and the first failure wins:
/// length, letters available in the root word, originality, dictionary.
pub struct WordValidator<S: SpellChecker> {
    checker: S,
    language: String,
    originality: OriginalityRule,
}

impl<S: SpellChecker> WordValidator<S> {
    /// Create a validator for English with the strict originality rule
    #[must_use]
    pub fn new(checker: S) -> Self {
        Self {
            checker,
            language: DEFAULT_LANGUAGE.to_string(),
            originality: OriginalityRule::default(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_originality(mut self, originality: OriginalityRule) -> Self {
        self.originality = originality;
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn originality(&self) -> OriginalityRule {
        self.originality
    }

    /// Whether `word` uses only letters available in the root word
    #[must_use]
    pub fn is_possible(&self, word: &str, state: &GameState) -> bool {
        state.root_letters().can_spell(word)
    }

    #[must_use]
    pub fn is_original(&self, word: &str, state: &GameState) -> bool {
        self.originality.allows(word, state)
    }

    #[must_use]
    pub fn is_real(&self, word: &str) -> bool {
        !self.checker.is_misspelled(word, &self.language)
    }

    /// Run every check and return the normalized word on success
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] hit.
    pub fn check(&self, candidate: &str, state: &GameState) -> Result<String, Rejection> {
        let word = normalize(candidate);

        if !is_long_enough(&word) {
            return Err(Rejection::TooShort);
        }
        if !self.is_possible(&word, state) {
            return Err(Rejection::NotPossible);
        }
        if !self.is_original(&word, state) {
            return Err(Rejection::NotOriginal);
        }
        if !self.is_real(&word) {
            return Err(Rejection::NotReal);
        }

        Ok(word)
    }

    /// Evaluate a candidate against `state`
    ///
    /// On success the returned state has the word prepended to the used
    /// words and its length added to the score. `state` itself is never
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] hit.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::GameState;
    /// use word_scramble::validator::{Dictionary, Rejection, WordValidator};
    ///
    /// let validator = WordValidator::new(Dictionary::new("en", ["lines"]));
    /// let state = GameState::new("silent");
    ///
    /// let next = validator.evaluate(" Lines ", &state).unwrap();
    /// assert_eq!(next.score(), 5);
    /// assert_eq!(validator.evaluate("tin", &next), Err(Rejection::TooShort));
    /// assert_eq!(validator.evaluate("lines", &next), Err(Rejection::NotOriginal));
    /// ```
    pub fn evaluate(&self, candidate: &str, state: &GameState) -> Result<GameState, Rejection> {
        let word = self.check(candidate, state)?;
        log::debug!("accepted '{word}' for root '{}'", state.root_word());
        Ok(state.clone().accept(word))
    }
}
