//! Word Scramble - CLI
//!
//! Word derivation game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::path::PathBuf;
use word_scramble::{
    commands::{check_words, run_simple},
    config::{GameConfig, load_config},
    output::{print_check_report, print_roots},
    session::GameSession,
    validator::{DEFAULT_LANGUAGE, Dictionary, OriginalityRule, WordValidator},
    wordlists::root_words,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ~/.config/word_scramble/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Root word list: newline-delimited file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary: newline-delimited file (default: embedded English dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language passed to the spell checker
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Originality rule: strict (default) or legacy
    #[arg(short, long, global = true)]
    originality: Option<String>,

    /// Seed for reproducible root words
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line, no TUI)
    Simple,

    /// Check words, in order, against a given root word
    Check {
        /// The root word
        root: String,

        /// Words to submit
        words: Vec<String>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the loaded root words
    Roots {
        /// Number of random root words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { root, words, json } => run_check_command(&config, &root, &words, json),
        Commands::Roots { count } => run_roots_command(&config, count),
    }
}

/// Load the config file, then apply command-line overrides
fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = load_config(cli.config.as_deref())?;

    if let Some(path) = &cli.wordlist {
        config.word_list = Some(path.clone());
    }
    if let Some(path) = &cli.dictionary {
        config.dictionary = Some(path.clone());
    }
    if let Some(language) = &cli.language {
        config.language.clone_from(language);
    }
    if let Some(name) = &cli.originality {
        config.originality = OriginalityRule::from_name(name)
            .with_context(|| format!("unknown originality rule '{name}' (expected strict or legacy)"))?;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    if config.originality == OriginalityRule::Legacy {
        log::warn!("legacy originality rule: repeated words will be accepted");
    }
    Ok(config)
}

fn build_validator(config: &GameConfig) -> Result<WordValidator<Dictionary>> {
    let dictionary = match &config.dictionary {
        Some(path) => Dictionary::from_file(path, config.language.as_str())
            .with_context(|| format!("cannot read dictionary {}", path.display()))?,
        None => {
            if !config.language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) {
                log::warn!(
                    "embedded dictionary is '{DEFAULT_LANGUAGE}'; every word will be rejected for '{}'",
                    config.language
                );
            }
            Dictionary::embedded()
        }
    };

    if dictionary.is_empty() {
        log::warn!("dictionary is empty; every word will be rejected");
    }
    log::info!(
        "dictionary: {} words ({})",
        dictionary.len(),
        dictionary.language()
    );

    Ok(WordValidator::new(dictionary)
        .with_language(config.language.as_str())
        .with_originality(config.originality))
}

fn build_rng(config: &GameConfig) -> StdRng {
    config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn build_session(config: &GameConfig) -> Result<GameSession<Dictionary>> {
    let words = root_words(config.word_list.as_deref()).context("cannot start a game")?;
    let validator = build_validator(config)?;
    Ok(GameSession::new(validator, words, build_rng(config)))
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(build_session(config)?)?;
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut session = build_session(config)?;
    run_simple(&mut session)
}

fn run_check_command(config: &GameConfig, root: &str, words: &[String], json: bool) -> Result<()> {
    let validator = build_validator(config)?;
    let report = check_words(&validator, root, words);

    if json {
        println!("{}", serde_json::to_string_pretty(&report.state)?);
    } else {
        print_check_report(&report);
    }
    Ok(())
}

fn run_roots_command(config: &GameConfig, count: usize) -> Result<()> {
    let words = root_words(config.word_list.as_deref()).context("cannot load root words")?;

    let mut rng = build_rng(config);
    let sample: Vec<&str> = words
        .choose_multiple(&mut rng, count)
        .map(String::as_str)
        .collect();

    print_roots(words.len(), &sample);
    Ok(())
}
