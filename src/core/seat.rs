//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! A match always has exactly two seats: the human-equivalent caller and the
//! automated opponent.
//!
//! ## SeatMap
//!
//! Per-seat storage with O(1) access, indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// The human-equivalent side, driven by an external caller.
    Human,
    /// The automated side, driven by a `MovePolicy`.
    Opponent,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Human => Seat::Opponent,
            Seat::Opponent => Seat::Human,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "Human"),
            Seat::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use domino_duel::core::{Seat, SeatMap};
///
/// let mut totals: SeatMap<u32> = SeatMap::new(|_| 0);
/// totals[Seat::Opponent] = 7;
/// assert_eq!(totals[Seat::Human], 0);
/// assert_eq!(totals[Seat::Opponent], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    human: T,
    opponent: T,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            human: factory(Seat::Human),
            opponent: factory(Seat::Opponent),
        }
    }

    /// Create from explicit per-seat values.
    pub fn from_values(human: T, opponent: T) -> Self {
        Self { human, opponent }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Human => &self.human,
            Seat::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Opponent => &mut self.opponent,
        }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
