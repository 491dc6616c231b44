//! Move selection policies.
//!
//! A policy looks at one hand and the line and either names a move or says
//! the seat must draw. Policies never mutate the match, so any policy can
//! drive either seat.
//!
//! - `GreedyDoubles`: the opponent's fixed heuristic
//! - `FirstPlayable`: first legal tile in hand order

mod greedy;

pub use greedy::{FirstPlayable, GreedyDoubles};

use crate::board::Line;
use crate::core::Move;
use crate::tiles::Tile;

/// What a policy decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Lay this tile here.
    Play(Move),
    /// Nothing in hand fits; draw from the pool.
    Draw,
}

/// Policy for choosing a move from a hand.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `hand` against `line`.
    ///
    /// Returns `Decision::Draw` if no tile in hand is playable.
    fn choose_move(&self, hand: &[Tile], line: &Line) -> Decision;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Tiles from `hand` that fit `line`, each with its first legal placement.
pub(crate) fn first_placements<'a>(
    hand: &'a [Tile],
    line: &'a Line,
) -> impl Iterator<Item = Move> + 'a {
    hand.iter().filter_map(move |&tile| {
        line.legal_placements(tile)
            .first()
            .map(|&placement| Move::new(tile, placement))
    })
}
