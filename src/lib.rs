//! # domino-duel
//!
//! A two-seat block-domino engine: one human-equivalent seat against a
//! rule-based opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns State**: Pool, hands, line and outcome live in one
//!    `MatchEngine`. Every mutation returns a definite `Result`.
//!
//! 2. **Controller Owns Turns**: Only `TurnController` decides whose turn it
//!    is, when a seat must draw, and when the match ends.
//!
//! 3. **Seeded Randomness**: The shuffle and the first-player coin both come
//!    from `GameRng`, so a seed reproduces a match exactly.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, move records, errors
//! - `tiles`: the `Tile` value and full-set generation
//! - `board`: the line of play and its placements
//! - `engine`: legality, placement, drawing, terminal detection
//! - `policy`: move selection (`GreedyDoubles`, `FirstPlayable`)
//! - `controller`: the turn state machine
//!
//! ## Example
//!
//! ```
//! use domino_duel::{FirstPlayable, GreedyDoubles, MatchConfig, TurnController};
//!
//! let mut controller = TurnController::new(MatchConfig::default(), 7, GreedyDoubles).unwrap();
//! let outcome = controller.play_out(&FirstPlayable).unwrap();
//! assert_eq!(controller.engine().tile_count(), 28);
//! println!("{outcome}");
//! ```

pub mod core;
pub mod tiles;
pub mod board;
pub mod engine;
pub mod policy;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap,
    GameRng,
    MatchConfig, HAND_SIZE,
    Move, MoveRecord, TurnAction,
    MatchError,
};

pub use crate::tiles::{full_set, Pip, Tile};

pub use crate::board::{End, LegalPlacements, Line, Placement};

pub use crate::engine::{
    MatchBuilder, MatchEngine, PlayableTile,
    EndReason, MatchResult, Outcome,
    ConcealedHand, SeatView,
};

pub use crate::policy::{Decision, FirstPlayable, GreedyDoubles, MovePolicy};

pub use crate::controller::{TurnController, TurnEvent, TurnState};
