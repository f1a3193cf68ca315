//! Game engine
//!
//! Guess evaluation, candidate filtering and the per-game session state.

mod candidates;
mod evaluator;
mod session;

pub use candidates::Constraints;
pub use evaluator::{GameStatus, GuessEvaluator, GuessOutcome, GuessRow, MAX_GUESSES};
pub use session::{GuessError, Session};
