//! The two-ended tile value type.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::core::error::MatchError;

/// Pip value on one end of a tile.
pub type Pip = u8;

/// A two-ended tile.
///
/// Equality and hashing ignore orientation: `[2|5] == [5|2]`. The
/// orientation the tile was built with is kept as-is, because a tile laid on
/// the line must remember which pip faces left.
///
/// ```
/// use domino_duel::tiles::Tile;
///
/// let tile = Tile::new(2, 5);
/// assert_eq!(tile, tile.flip());
/// assert_eq!(tile.flip().left(), 5);
/// assert_eq!(tile.sum(), 7);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tile {
    left: Pip,
    right: Pip,
}

impl Tile {
    /// Create a tile with the given orientation.
    #[must_use]
    pub const fn new(left: Pip, right: Pip) -> Self {
        Self { left, right }
    }

    /// Pip facing left in this orientation.
    #[must_use]
    pub const fn left(self) -> Pip {
        self.left
    }

    /// Pip facing right in this orientation.
    #[must_use]
    pub const fn right(self) -> Pip {
        self.right
    }

    /// Same tile, ends swapped.
    #[must_use]
    pub const fn flip(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Total pips on both ends.
    #[must_use]
    pub const fn sum(self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Both ends show the same value.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Either end shows `pip`.
    #[must_use]
    pub const fn contains(self, pip: Pip) -> bool {
        self.left == pip || self.right == pip
    }

    /// The pip opposite `pip`, if the tile carries it.
    #[must_use]
    pub const fn other_end(self, pip: Pip) -> Option<Pip> {
        if self.left == pip {
            Some(self.right)
        } else if self.right == pip {
            Some(self.left)
        } else {
            None
        }
    }

    /// Highest pip on the tile.
    #[must_use]
    pub fn high(self) -> Pip {
        self.left.max(self.right)
    }

    /// Orientation-free key: `(low, high)`.
    #[must_use]
    pub fn normalized(self) -> (Pip, Pip) {
        (self.left.min(self.right), self.left.max(self.right))
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// Parses `"[3|5]"`, `"3|5"`, `"3-5"` or `"35"`, keeping the written order.
impl FromStr for Tile {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || MatchError::UnknownTile(s.to_string());
        let body = s.trim().trim_start_matches('[').trim_end_matches(']');

        let (a, b) = match body.split_once(['|', '-', ',']) {
            Some(parts) => parts,
            None if body.len() == 2 && body.is_char_boundary(1) => body.split_at(1),
            None => return Err(unknown()),
        };

        let left = a.trim().parse::<Pip>().map_err(|_| unknown())?;
        let right = b.trim().parse::<Pip>().map_err(|_| unknown())?;
        Ok(Tile::new(left, right))
    }
}
