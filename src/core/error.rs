//! Error taxonomy for match commands.
//!
//! Every rejected command leaves the match untouched. An empty pool is not
//! an error: `draw` reports it as `None`.

use derive_more::{Display, Error};

use super::seat::Seat;
use crate::board::Placement;
use crate::tiles::Tile;

/// Error returned when a command cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// The tile cannot be laid at the requested placement.
    #[display("{tile} cannot be played at {placement}")]
    IllegalPlacement {
        /// Tile the caller tried to play.
        tile: Tile,
        /// Placement the caller asked for.
        placement: Placement,
    },

    /// The acting seat does not hold the tile.
    #[display("{seat} does not hold {tile}")]
    NotHeld {
        /// Seat that tried to play.
        seat: Seat,
        /// Tile it tried to play.
        tile: Tile,
    },

    /// A placement name was not one of the recognized values.
    #[display("unknown placement {_0:?}")]
    InvalidSide(#[error(not(source))] String),

    /// A tile description could not be parsed.
    #[display("unknown tile {_0:?}")]
    UnknownTile(#[error(not(source))] String),

    /// It is the other seat's turn.
    #[display("it is not {_0}'s turn")]
    NotYourTurn(#[error(not(source))] Seat),

    /// The seat has no playable tile and must draw instead.
    #[display("{_0} has no playable tile and must draw")]
    MustDraw(#[error(not(source))] Seat),

    /// The seat holds a playable tile and may not draw.
    #[display("{_0} holds a playable tile and must play")]
    MustPlay(#[error(not(source))] Seat),

    /// The match has ended; only inspection is allowed.
    #[display("the match is over")]
    MatchOver,

    /// A fixed deal was inconsistent (duplicate or out-of-range tiles).
    #[display("invalid deal: {_0}")]
    InvalidDeal(#[error(not(source))] String),

    /// The configuration cannot produce a match.
    #[display("invalid configuration: {_0}")]
    InvalidConfig(#[error(not(source))] String),
}
