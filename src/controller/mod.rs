//! Turn sequencing.
//!
//! `TurnController` is the only component that decides whose turn it is.
//! Each step resolves one state (`AwaitingMove`, `Drawing`) into the next,
//! running the terminal check before the turn is handed over.

mod turn;

pub use turn::{TurnController, TurnEvent, TurnState};
