//! The match engine.
//!
//! Owns the pool, both hands, the line and the outcome. Every mutation goes
//! through `MatchEngine` and returns a definite success or error; callers
//! branch on it instead of assuming success.
//!
//! ## Key Types
//!
//! - `MatchEngine`: legality, placement, drawing, terminal detection
//! - `MatchBuilder`: fixed positions for tests and puzzles
//! - `Outcome`: result, reason and remaining pip totals
//! - `SeatView`: what one seat is allowed to see

mod builder;
mod match_engine;
mod outcome;
mod view;

pub use builder::MatchBuilder;
pub use match_engine::{determine_starter, MatchEngine, PlayableTile};
pub use outcome::{EndReason, MatchResult, Outcome};
pub use view::{ConcealedHand, SeatView};
