//! Word lists for the game
//!
//! Provides the embedded root-word list and dictionary compiled into the
//! binary, plus loading of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START, START_COUNT};

use crate::session::SessionError;
use std::path::Path;

/// Root words for new games: the embedded list, or a custom file
///
/// # Errors
///
/// Returns [`SessionError::WordListUnavailable`] if the file cannot be read
/// or holds no words.
pub fn root_words(path: Option<&Path>) -> Result<Vec<String>, SessionError> {
    let words = match path {
        None => {
            log::debug!("using {START_COUNT} embedded root words");
            loader::words_from_slice(START)
        }
        Some(path) => loader::load_from_file(path).map_err(|e| {
            log::error!("cannot read word list {}: {e}", path.display());
            SessionError::WordListUnavailable
        })?,
    };

    if words.is_empty() {
        return Err(SessionError::WordListUnavailable);
    }

    log::info!("loaded {} root words", words.len());
    Ok(words)
}
