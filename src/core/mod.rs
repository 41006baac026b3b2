//! Core domain types for the word game
//!
//! Pure types with no I/O: candidate normalization, letter multisets and
//! the per-game state record.

mod state;
mod word;

pub use state::GameState;
pub use word::{
    LetterCounts, MIN_WORD_LENGTH, is_long_enough, is_too_short_hint, normalize, word_length,
};
