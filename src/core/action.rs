//! Move records: what each seat did, in order.
//!
//! The engine appends one record per placement, draw or pass so that a
//! presentation layer can narrate the match ("Opponent drew and played
//! [3|5]") without keeping its own copy of the board.

use serde::{Deserialize, Serialize};

use super::seat::Seat;
use crate::board::Placement;
use crate::tiles::Tile;

/// A tile laid at a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The tile to lay, in any orientation.
    pub tile: Tile,
    /// Where to lay it.
    pub placement: Placement,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(tile: Tile, placement: Placement) -> Self {
        Self { tile, placement }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.tile, self.placement)
    }
}

/// A single state-changing action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// A tile was laid; `laid` is the tile in its on-board orientation.
    Place {
        /// Tile as laid on the line.
        laid: Tile,
        /// Where it was laid.
        placement: Placement,
    },
    /// A tile moved from the pool into the seat's hand.
    Draw(Tile),
    /// The seat ended its turn without laying a tile.
    Pass,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that acted.
    pub seat: Seat,

    /// What it did.
    pub action: TurnAction,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number across the whole match.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(seat: Seat, action: TurnAction, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}
