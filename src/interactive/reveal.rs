//! Tile-by-tile reveal of a finished guess
//!
//! Pure presentation: holds a copy of the outcome and how many tiles are
//! showing. The session has already moved on when a reveal starts.

use crate::game::GuessOutcome;
use std::time::{Duration, Instant};

/// Delay between two tiles flipping
pub const REVEAL_STEP: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Reveal {
    outcome: GuessOutcome,
    shown: usize,
    last_step: Instant,
}

impl Reveal {
    #[must_use]
    pub const fn new(outcome: GuessOutcome, now: Instant) -> Self {
        Self {
            outcome,
            shown: 0,
            last_step: now,
        }
    }

    /// Tiles currently revealed
    #[must_use]
    pub const fn shown(&self) -> usize {
        self.shown
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.outcome.guess.len()
    }

    /// Flip the next tile
    pub fn advance(&mut self) {
        if !self.is_done() {
            self.shown += 1;
        }
    }

    /// Flip every tile whose delay has elapsed by `now`; true once all are shown
    pub fn tick(&mut self, now: Instant) -> bool {
        while !self.is_done() && now.saturating_duration_since(self.last_step) >= REVEAL_STEP {
            self.advance();
            self.last_step += REVEAL_STEP;
        }
        self.is_done()
    }

    #[must_use]
    pub fn into_outcome(self) -> GuessOutcome {
        self.outcome
    }
}
