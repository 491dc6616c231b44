//! The line of play.
//!
//! Tiles are stored in the orientation they were laid, so each tile's right
//! pip equals its right neighbour's left pip. The two exposed pips are cached
//! in `ends` and are what legality checks read.

use im::Vector;
use serde::Serialize;
use smallvec::smallvec;

use super::placement::{End, LegalPlacements, Placement};
use crate::core::error::MatchError;
use crate::tiles::{Pip, Tile};

/// Played sequence plus its two open ends.
///
/// Built only through `new`, `from_tiles` and `place`, so `ends` always
/// matches the outer pips of `tiles`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Line {
    tiles: Vector<Tile>,
    ends: Option<(Pip, Pip)>,
}

impl Line {
    /// Create an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line from tiles already in play order and orientation.
    ///
    /// Fails if two neighbours do not abut.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Result<Self, MatchError> {
        let tiles: Vector<Tile> = tiles.into_iter().collect();

        for (a, b) in tiles.iter().zip(tiles.iter().skip(1)) {
            if a.right() != b.left() {
                return Err(MatchError::InvalidDeal(format!("{a} does not abut {b}")));
            }
        }

        let ends = match (tiles.front(), tiles.back()) {
            (Some(first), Some(last)) => Some((first.left(), last.right())),
            _ => None,
        };

        Ok(Self { tiles, ends })
    }

    /// No tile has been laid yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles laid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles in play order, as laid.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Exposed `(left, right)` pips, or `None` on an empty line.
    #[must_use]
    pub fn ends(&self) -> Option<(Pip, Pip)> {
        self.ends
    }

    /// Exposed pip at one end.
    #[must_use]
    pub fn end(&self, end: End) -> Option<Pip> {
        self.ends.map(|(left, right)| match end {
            End::Left => left,
            End::Right => right,
        })
    }

    /// Where `tile` may be laid, left before right.
    ///
    /// An empty line accepts any tile as the opener. Otherwise each end is
    /// checked on its own, so a tile can be legal at both.
    #[must_use]
    pub fn legal_placements(&self, tile: Tile) -> LegalPlacements {
        if self.ends.is_none() {
            return smallvec![Placement::Opener];
        }

        [End::Left, End::Right]
            .into_iter()
            .filter(|&end| self.end(end).is_some_and(|pip| tile.contains(pip)))
            .map(Placement::from)
            .collect()
    }

    /// The tile can be laid somewhere.
    #[must_use]
    pub fn accepts(&self, tile: Tile) -> bool {
        !self.legal_placements(tile).is_empty()
    }

    /// Lay `tile` at `placement`, orienting it so the matching pip touches
    /// the end. Returns the tile as laid.
    ///
    /// The caller never has to pre-orient the tile.
    pub fn place(&mut self, tile: Tile, placement: Placement) -> Result<Tile, MatchError> {
        if !self.legal_placements(tile).contains(&placement) {
            return Err(MatchError::IllegalPlacement { tile, placement });
        }

        let (Some(end), Some((left, right))) = (placement.end(), self.ends) else {
            self.ends = Some((tile.left(), tile.right()));
            self.tiles.push_back(tile);
            return Ok(tile);
        };

        let illegal = || MatchError::IllegalPlacement { tile, placement };
        let laid = match end {
            End::Left => {
                let laid = Tile::new(tile.other_end(left).ok_or_else(illegal)?, left);
                self.ends = Some((laid.left(), right));
                self.tiles.push_front(laid);
                laid
            }
            End::Right => {
                let laid = Tile::new(right, tile.other_end(right).ok_or_else(illegal)?);
                self.ends = Some((left, laid.right()));
                self.tiles.push_back(laid);
                laid
            }
        };

        Ok(laid)
    }
}
