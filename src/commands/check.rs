//! Word check command
//!
//! Evaluates a list of words, in order, against a fixed root word.

use crate::core::{GameState, word_length};
use crate::validator::{Rejection, SpellChecker, WordValidator};

/// Verdict for one submitted word
pub struct Verdict {
    pub input: String,
    /// Points scored, or why the word was rejected
    pub result: Result<usize, Rejection>,
}

/// Result of checking a list of words
pub struct CheckReport {
    pub root_word: String,
    pub verdicts: Vec<Verdict>,
    pub state: GameState,
}

impl CheckReport {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.verdicts.iter().filter(|v| v.result.is_ok()).count()
    }

    #[must_use]
    pub fn rejected(&self) -> usize {
        self.verdicts.len() - self.accepted()
    }
}

/// Submit `words` one after another to a new game on `root`
///
/// Each word sees the words accepted before it, so a repeat is rejected as
/// not original.
#[must_use]
pub fn check_words<S: SpellChecker>(
    validator: &WordValidator<S>,
    root: &str,
    words: &[String],
) -> CheckReport {
    let mut state = GameState::new(root);
    let mut verdicts = Vec::with_capacity(words.len());

    for input in words {
        let result = match validator.evaluate(input, &state) {
            Ok(next) => {
                let points = next.used_words().first().map_or(0, |w| word_length(w));
                state = next;
                Ok(points)
            }
            Err(rejection) => Err(rejection),
        };
        verdicts.push(Verdict {
            input: input.clone(),
            result,
        });
    }

    CheckReport {
        root_word: state.root_word().to_string(),
        verdicts,
        state,
    }
}
