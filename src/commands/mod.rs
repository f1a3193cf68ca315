//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay};
pub use simple::run_simple;
