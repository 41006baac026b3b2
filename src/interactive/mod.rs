//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{Alert, App, Message, MessageStyle, run_tui};
