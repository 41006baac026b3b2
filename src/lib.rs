//! Word Scramble
//!
//! A word-derivation game: make words of four letters or more out of the
//! letters of a random root word. Every accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::GameState;
//! use word_scramble::validator::{Dictionary, Rejection, WordValidator};
//!
//! let validator = WordValidator::new(Dictionary::embedded());
//! let state = GameState::new("silent");
//!
//! let state = validator.evaluate("lines", &state).unwrap();
//! assert_eq!(state.score(), 5);
//! assert_eq!(validator.evaluate("zzzzz", &state), Err(Rejection::NotPossible));
//! ```

// Core domain types
pub mod core;

// Candidate validation
pub mod validator;

// Session lifecycle
pub mod session;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
