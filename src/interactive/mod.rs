//! Interactive TUI interface

pub mod app;
pub mod rendering;
pub mod reveal;

pub use app::{App, Screen, run_tui};
pub use reveal::Reveal;
