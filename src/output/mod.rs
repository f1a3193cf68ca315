//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_game_summary, print_keyboard, print_outcome, print_replay_result};
