//! Display functions for command results

use super::formatters::{root_title, score_line, word_badge};
use crate::commands::CheckReport;
use crate::core::GameState;
use colored::Colorize;

/// Print the result of checking a list of words against a root word
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        root_title(&report.root_word).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for verdict in &report.verdicts {
        match verdict.result {
            Ok(points) => println!(
                "  {} {:<16} {}",
                "✓".green().bold(),
                verdict.input.trim(),
                format!("+{points}").green()
            ),
            Err(rejection) if rejection.is_silent() => println!(
                "  {} {:<16} {}",
                "·".bright_black(),
                verdict.input.trim(),
                "too short".bright_black()
            ),
            Err(rejection) => println!(
                "  {} {:<16} {}",
                "✗".red().bold(),
                verdict.input.trim(),
                rejection.title().red()
            ),
        }
    }

    println!();
    print_state(&report.state);
}

/// Print accepted words (most recent first) and the score
pub fn print_state(state: &GameState) {
    if state.used_words().is_empty() {
        println!("  {}", "No words yet".bright_black());
    } else {
        for word in state.used_words() {
            println!("  {}", word_badge(word));
        }
    }
    println!("\n{}", score_line(state.score()).bright_cyan().bold());
}

/// Print how many root words are loaded and a sample of them
pub fn print_roots(total: usize, sample: &[&str]) {
    println!(
        "{} root words loaded",
        total.to_string().bright_yellow().bold()
    );
    for word in sample {
        println!("  • {word}");
    }
}
