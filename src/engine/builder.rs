//! Builder for matches with a fixed deal.
//!
//! Used to set up specific positions: explicit hands, an explicit line, an
//! explicit pool, a chosen starting seat. Anything left unset is filled in
//! the way a normal deal would be.

use rustc_hash::FxHashSet;

use super::match_engine::{determine_starter, MatchEngine};
use crate::board::Line;
use crate::core::{GameRng, MatchConfig, MatchError, Seat, SeatMap};
use crate::tiles::{full_set, Pip, Tile};

/// Builder for creating a `MatchEngine` from a fixed position.
///
/// ```
/// use domino_duel::core::Seat;
/// use domino_duel::engine::MatchBuilder;
/// use domino_duel::tiles::Tile;
///
/// let engine = MatchBuilder::new()
///     .hand(Seat::Human, [Tile::new(0, 0), Tile::new(1, 2)])
///     .hand(Seat::Opponent, [Tile::new(6, 6)])
///     .pool([])
///     .starter(Seat::Human)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(engine.hand(Seat::Human).len(), 2);
/// assert_eq!(engine.pool_size(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: MatchConfig,
    hands: SeatMap<Option<Vec<Tile>>>,
    line: Vec<Tile>,
    pool: Option<Vec<Tile>>,
    starter: Option<Seat>,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix a seat's hand. Unset hands are dealt from the pool.
    pub fn hand(mut self, seat: Seat, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.hands[seat] = Some(tiles.into_iter().collect());
        self
    }

    /// Tiles already on the line, in play order and laid orientation.
    pub fn line(mut self, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.line = tiles.into_iter().collect();
        self
    }

    /// Fix the pool; the last tile is drawn first. When unset, the pool is
    /// every unused tile of the set, shuffled.
    pub fn pool(mut self, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.pool = Some(tiles.into_iter().collect());
        self
    }

    /// Fix the starting seat. When unset, the usual highest-double rule applies.
    pub fn starter(mut self, seat: Seat) -> Self {
        self.starter = Some(seat);
        self
    }

    /// Build the match. Fails on duplicate or out-of-range tiles.
    pub fn build(self, seed: u64) -> Result<MatchEngine, MatchError> {
        self.config.validate()?;

        let rng = GameRng::new(seed);
        let mut shuffle = rng.for_context("shuffle");
        let mut coin = rng.for_context("first-player");

        let line = Line::from_tiles(self.line.iter().copied())?;

        let fixed = Seat::ALL
            .iter()
            .filter_map(|&seat| self.hands[seat].as_ref())
            .flatten()
            .chain(&self.line)
            .chain(self.pool.iter().flatten());
        let used = check_unique(fixed, self.config.max_pip)?;

        let mut pool = match self.pool {
            Some(pool) => pool,
            None => {
                let mut rest: Vec<Tile> = full_set(self.config.max_pip)
                    .into_iter()
                    .filter(|tile| !used.contains(tile))
                    .collect();
                shuffle.shuffle(&mut rest);
                rest
            }
        };

        let mut hands: SeatMap<Vec<Tile>> = SeatMap::default();
        for seat in Seat::ALL {
            hands[seat] = match &self.hands[seat] {
                Some(hand) => hand.clone(),
                None => {
                    let take = self.config.hand_size.min(pool.len());
                    pool.split_off(pool.len() - take)
                }
            };
        }

        let starter = self
            .starter
            .unwrap_or_else(|| determine_starter(&hands, &mut coin));

        Ok(MatchEngine::from_parts(self.config, pool, hands, line, starter, rng))
    }
}

fn check_unique<'a>(
    tiles: impl Iterator<Item = &'a Tile>,
    max_pip: Pip,
) -> Result<FxHashSet<Tile>, MatchError> {
    let mut seen = FxHashSet::default();
    for &tile in tiles {
        if tile.high() > max_pip {
            return Err(MatchError::InvalidDeal(format!("{tile} exceeds max pip {max_pip}")));
        }
        if !seen.insert(tile) {
            return Err(MatchError::InvalidDeal(format!("{tile} appears twice")));
        }
    }
    Ok(seen)
}
