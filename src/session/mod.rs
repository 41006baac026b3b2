//! Game sessions
//!
//! A session picks a root word from the configured list, owns the current
//! [`GameState`](crate::core::GameState), and commits accepted words.

mod game;

pub use game::{GameSession, Outcome, Phase, SessionError, start};
