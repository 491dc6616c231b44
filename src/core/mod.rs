//! Core match types: seats, RNG, configuration, move records, errors.
//!
//! These are shared by the engine, the policies and the turn controller.

pub mod seat;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use seat::{Seat, SeatMap};
pub use rng::GameRng;
pub use config::{MatchConfig, HAND_SIZE, LARGEST_MAX_PIP, STANDARD_MAX_PIP};
pub use action::{Move, MoveRecord, TurnAction};
pub use error::MatchError;
