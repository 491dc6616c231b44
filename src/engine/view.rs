//! Per-seat projection of a match for a presentation layer.
//!
//! A `SeatView` carries the viewer's own tiles, but only a count for the
//! other hand and the pool.

use serde::Serialize;

use super::outcome::Outcome;
use crate::core::Seat;
use crate::tiles::{Pip, Tile};

/// Hidden hand: only its size is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ConcealedHand {
    pub count: usize,
}

/// Everything one seat may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeatView {
    /// The viewing seat.
    pub seat: Seat,
    /// The viewer's tiles, in hand order.
    pub hand: Vec<Tile>,
    /// The subset of `hand` that can be laid now.
    pub playable: Vec<Tile>,
    /// The other seat's hand, concealed.
    pub other_hand: ConcealedHand,
    /// Tiles on the line, as laid.
    pub line: Vec<Tile>,
    /// Exposed `(left, right)` pips.
    pub ends: Option<(Pip, Pip)>,
    /// Tiles left to draw.
    pub pool_size: usize,
    /// Seat whose turn it is.
    pub active: Seat,
    /// Set once the match is over.
    pub outcome: Option<Outcome>,
}
