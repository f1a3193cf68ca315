//! Logging setup
//!
//! Records go through the `log` facade. The default level is `warn`; set
//! `RUST_LOG=debug` to see the target word and the remaining candidates after
//! each guess. The TUI owns the terminal: there records are dropped unless a
//! log file is given.

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io;
use std::path::Path;

/// Install the global logger
///
/// Writes to `log_file` when given. Otherwise writes to stderr, or nowhere
/// when `owns_terminal` is set.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be created.
pub fn init(log_file: Option<&Path>, owns_terminal: bool) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);

    match log_file {
        Some(path) => {
            builder.target(Target::Pipe(Box::new(File::create(path)?)));
        }
        None if owns_terminal => {
            builder.target(Target::Pipe(Box::new(io::sink())));
        }
        None => {}
    }

    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
    Ok(())
}
