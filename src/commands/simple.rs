//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::output::formatters::{alert_line, root_title, score_line, word_badge};
use crate::session::{GameSession, Outcome};
use crate::validator::SpellChecker;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no
/// game can be started.
pub fn run_simple<S: SpellChecker, R: Rng>(session: &mut GameSession<S, R>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, stdin.lock(), io::stdout())
}

/// Run the simple mode over arbitrary input and output
///
/// Input ends at EOF or on `:quit`.
///
/// # Errors
///
/// Returns an error on I/O failure or if no game can be started.
pub fn run_simple_with<S, R, I, O>(
    session: &mut GameSession<S, R>,
    input: I,
    mut out: O,
) -> Result<()>
where
    S: SpellChecker,
    R: Rng,
    I: BufRead,
    O: Write,
{
    if !session.is_playing() {
        session.start()?;
    }

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words of four letters or more from the root word.")?;
    writeln!(
        out,
        "Commands: ':words' to list your words, ':restart' for a new root word, ':quit' to exit\n"
    )?;
    print_root(session, &mut out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "Word: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":restart" | ":r" => {
                session.restart()?;
                writeln!(out, "\n🔄 New game started!")?;
                print_root(session, &mut out)?;
            }
            ":words" | ":w" => print_words(session, &mut out)?,
            "" => {}
            candidate => match session.submit(candidate)? {
                Outcome::Accepted { word, points } => {
                    let score = session.state().map_or(0, |s| s.score());
                    writeln!(
                        out,
                        "  {} {} {}  {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("+{points}").green(),
                        score_line(score).bright_cyan()
                    )?;
                }
                // No live hint while typing here, so show it after the line
                Outcome::Rejected(rejection) if rejection.is_silent() => {
                    writeln!(out, "  {}", "word is too short".bright_black())?;
                }
                Outcome::Rejected(rejection) => {
                    if let Some(alert) = alert_line(rejection) {
                        writeln!(out, "  {} {}", "✗".red().bold(), alert.red())?;
                    }
                }
            },
        }
    }

    if let Some(state) = session.state() {
        writeln!(
            out,
            "\n👋 Thanks for playing! Final {}",
            score_line(state.score()).to_lowercase()
        )?;
    }
    Ok(())
}

fn print_root<S: SpellChecker, R: Rng, O: Write>(
    session: &GameSession<S, R>,
    out: &mut O,
) -> Result<()> {
    if let Some(state) = session.state() {
        writeln!(
            out,
            "Root word: {}\n",
            root_title(state.root_word()).bright_yellow().bold()
        )?;
    }
    Ok(())
}

fn print_words<S: SpellChecker, R: Rng, O: Write>(
    session: &GameSession<S, R>,
    out: &mut O,
) -> Result<()> {
    let Some(state) = session.state() else {
        return Ok(());
    };

    if state.used_words().is_empty() {
        writeln!(out, "  No words yet")?;
    }
    for word in state.used_words() {
        writeln!(out, "  {}", word_badge(word))?;
    }
    writeln!(out, "  {}", score_line(state.score()))?;
    Ok(())
}
