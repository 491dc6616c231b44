//! Tiles and tile-set generation.
//!
//! - `Tile`: orientation-free value with a remembered orientation
//! - `full_set`: every unordered pip pair up to a maximum pip

pub mod tile;

pub use tile::{Pip, Tile};

/// Every unique tile with pips in `0..=max_pip`, in lexicographic order.
///
/// ```
/// use domino_duel::tiles::{full_set, Tile};
///
/// let set = full_set(6);
/// assert_eq!(set.len(), 28);
/// assert_eq!(set[0], Tile::new(0, 0));
/// assert_eq!(set[27], Tile::new(6, 6));
/// ```
#[must_use]
pub fn full_set(max_pip: Pip) -> Vec<Tile> {
    (0..=max_pip)
        .flat_map(|low| (low..=max_pip).map(move |high| Tile::new(low, high)))
        .collect()
}

/// Total pips across a collection of tiles.
#[must_use]
pub fn pip_total<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> u32 {
    tiles.into_iter().map(|t| t.sum()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_full_set_sizes() {
        for n in 0..=12u8 {
            let expected = (usize::from(n) + 1) * (usize::from(n) + 2) / 2;
            assert_eq!(full_set(n).len(), expected);
        }
    }

    #[test]
    fn test_full_set_is_unique() {
        let set = full_set(6);
        let unique: FxHashSet<Tile> = set.iter().copied().collect();
        assert_eq!(unique.len(), set.len());
    }

    #[test]
    fn test_full_set_has_one_double_per_pip() {
        let doubles: Vec<_> = full_set(6).into_iter().filter(|t| t.is_double()).collect();
        assert_eq!(doubles.len(), 7);
    }

    #[test]
    fn test_pip_total() {
        let hand = [Tile::new(6, 4), Tile::new(0, 0), Tile::new(1, 2)];
        assert_eq!(pip_total(&hand), 13);
        assert_eq!(pip_total(&[]), 0);
        // Every pip value appears N+2 times in a double-N set.
        assert_eq!(pip_total(&full_set(6)), 168);
    }
}
