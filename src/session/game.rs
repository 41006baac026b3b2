//! Session lifecycle: start, submit, restart

use crate::core::{GameState, word_length};
use crate::validator::{Rejection, SpellChecker, WordValidator};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;

/// Errors that stop a session from running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The root-word list is missing, unreadable or empty
    WordListUnavailable,
    /// A word was submitted before the first game started
    NotStarted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordListUnavailable => write!(f, "root word list is unavailable or empty"),
            Self::NotStarted => write!(f, "no game has been started"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Pick a root word uniformly at random and return a fresh game
///
/// Blank entries are ignored.
///
/// # Errors
///
/// Returns [`SessionError::WordListUnavailable`] if `word_list` has no
/// usable entry.
///
/// # Examples
/// ```
/// use word_scramble::session::start;
///
/// let state = start(&["silent"], &mut rand::rng()).unwrap();
/// assert_eq!(state.root_word(), "silent");
/// assert_eq!(state.score(), 0);
/// ```
pub fn start<W, R>(word_list: &[W], rng: &mut R) -> Result<GameState, SessionError>
where
    W: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<&str> = word_list
        .iter()
        .map(|word| word.as_ref().trim())
        .filter(|word| !word.is_empty())
        .collect();

    let root = candidates
        .choose(rng)
        .ok_or(SessionError::WordListUnavailable)?;

    log::info!("new game with root word '{root}'");
    Ok(GameState::new(root))
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Playing(GameState),
}

/// Result of submitting a word to a running game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted { word: String, points: usize },
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// A running game plus everything needed to restart it
pub struct GameSession<S: SpellChecker, R: Rng = StdRng> {
    validator: WordValidator<S>,
    word_list: Vec<String>,
    rng: R,
    phase: Phase,
}

impl<S: SpellChecker, R: Rng> GameSession<S, R> {
    /// Create an uninitialized session; call [`start`](Self::start) to play
    #[must_use]
    pub const fn new(validator: WordValidator<S>, word_list: Vec<String>, rng: R) -> Self {
        Self {
            validator,
            word_list,
            rng,
            phase: Phase::Uninitialized,
        }
    }

    /// Start a new game, discarding any game in progress
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WordListUnavailable`] if the word list has no
    /// usable entry. The previous game, if any, is kept in that case.
    pub fn start(&mut self) -> Result<&GameState, SessionError> {
        let state = start(&self.word_list, &mut self.rng)?;
        self.phase = Phase::Playing(state);
        self.state().ok_or(SessionError::NotStarted)
    }

    /// Same as [`start`](Self::start); kept for front ends that offer a
    /// "restart" action
    ///
    /// # Errors
    ///
    /// See [`start`](Self::start).
    pub fn restart(&mut self) -> Result<&GameState, SessionError> {
        if let Phase::Playing(state) = &self.phase {
            log::info!(
                "restarting; previous game scored {} with {} words",
                state.score(),
                state.used_words().len()
            );
        }
        self.start()
    }

    /// Submit a candidate word to the current game
    ///
    /// The game state changes only when the word is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotStarted`] if no game is running.
    pub fn submit(&mut self, candidate: &str) -> Result<Outcome, SessionError> {
        let Phase::Playing(state) = &mut self.phase else {
            return Err(SessionError::NotStarted);
        };

        match self.validator.check(candidate, state) {
            Ok(word) => {
                let points = word_length(&word);
                state.record(word.clone());
                log::debug!("accepted '{word}' (+{points}), score {}", state.score());
                Ok(Outcome::Accepted { word, points })
            }
            Err(rejection) => {
                log::debug!("rejected '{}': {rejection}", candidate.trim());
                Ok(Outcome::Rejected(rejection))
            }
        }
    }

    /// The current game, if one has started
    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        match &self.phase {
            Phase::Playing(state) => Some(state),
            Phase::Uninitialized => None,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing(_))
    }
}
