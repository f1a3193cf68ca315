//! Expanded Wordle - CLI
//!
//! Wordle with 4, 5 and 6 letter words: full-screen TUI, plain CLI mode and
//! scripted replays.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use expanded_wordle::{
    commands::{ReplayConfig, replay, run_simple},
    core::WordLength,
    game::Session,
    interactive::{App, run_tui},
    logging,
    output::print_replay_result,
    wordlists::{WordSource, load_with_fallback},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "expanded_wordle",
    about = "Guess the hidden 4, 5 or 6 letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 4, 5 (default) or 6
    #[arg(short, long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u8).range(4..=6))]
    length: u8,

    /// Directory holding 4letter.txt, 5letter.txt and 6letter.txt (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Write log records to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Play a scripted list of guesses against a chosen target
    Replay {
        /// The target word
        target: String,

        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Show candidate counts and the final keyboard
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let owns_terminal = matches!(cli.command, None | Some(Commands::Play));
    logging::init(cli.log_file.as_deref(), owns_terminal).context("Failed to open log file")?;

    let length = WordLength::from_letters(usize::from(cli.length))
        .context("Word length must be 4, 5 or 6")?;
    let source = cli.words.map_or(WordSource::Embedded, WordSource::Directory);
    let (dictionary, fallback) = load_with_fallback(&source, length)
        .with_context(|| format!("Failed to load {length}-letter words"))?;

    match cli.command {
        None | Some(Commands::Play) => {
            let mut app = App::new(Session::new(dictionary), source);
            if let Some(err) = fallback {
                app.report_fallback(&err);
            }
            run_tui(app)?;
        }

        Some(Commands::Simple) => {
            let mut session = Session::new(dictionary);
            run_simple(&mut session, &source, io::stdin().lock(), io::stdout())
                .context("I/O error in simple mode")?;
        }

        Some(Commands::Replay {
            target,
            guesses,
            verbose,
        }) => {
            let config = ReplayConfig::new(target, guesses);
            let result = replay(dictionary, &config)
                .with_context(|| format!("Cannot use '{}' as the target", config.target))?;
            print_replay_result(&result, verbose);
        }
    }

    Ok(())
}
