//! Word validation
//!
//! Decides whether a candidate can be added to a game and computes the
//! resulting state. Spell checking is injected through [`SpellChecker`].

mod engine;
mod rules;
mod spellcheck;

pub use engine::WordValidator;
pub use rules::{OriginalityRule, Rejection};
pub use spellcheck::{DEFAULT_LANGUAGE, Dictionary, SpellChecker};
