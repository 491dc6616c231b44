//! Greedy policies with no lookahead.

use super::{first_placements, Decision, MovePolicy};
use crate::board::Line;
use crate::core::Move;
use crate::tiles::Tile;

/// Play the heaviest playable double; failing that, the heaviest playable
/// tile.
///
/// Ties keep the tile found first in hand order. A tile legal at both ends
/// goes left, the first placement the line reports. Nothing else is
/// considered: not the other hand, not what the move leaves exposed.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyDoubles;

impl MovePolicy for GreedyDoubles {
    fn choose_move(&self, hand: &[Tile], line: &Line) -> Decision {
        let double = heaviest(first_placements(hand, line).filter(|mv| mv.tile.is_double()));
        let chosen = double.or_else(|| heaviest(first_placements(hand, line)));

        match chosen {
            Some(mv) => Decision::Play(mv),
            None => Decision::Draw,
        }
    }

    fn name(&self) -> &'static str {
        "greedy-doubles"
    }
}

/// Highest pip sum; the earliest wins a tie.
fn heaviest(moves: impl Iterator<Item = Move>) -> Option<Move> {
    moves.reduce(|best, mv| if mv.tile.sum() > best.tile.sum() { mv } else { best })
}

/// Play the first playable tile in hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPlayable;

impl MovePolicy for FirstPlayable {
    fn choose_move(&self, hand: &[Tile], line: &Line) -> Decision {
        match first_placements(hand, line).next() {
            Some(mv) => Decision::Play(mv),
            None => Decision::Draw,
        }
    }

    fn name(&self) -> &'static str {
        "first-playable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Placement;

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b)
    }

    fn line(tiles: &[(u8, u8)]) -> Line {
        Line::from_tiles(tiles.iter().map(|&(a, b)| t(a, b))).unwrap()
    }

    #[test]
    fn test_must_draw_when_nothing_fits() {
        let decision = GreedyDoubles.choose_move(&[t(1, 2), t(4, 6)], &line(&[(0, 0)]));
        assert_eq!(decision, Decision::Draw);
        assert_eq!(GreedyDoubles.choose_move(&[], &Line::new()), Decision::Draw);
    }

    #[test]
    fn test_prefers_double_over_heavier_tile() {
        let hand = [t(6, 5), t(5, 5), t(1, 5)];
        let decision = GreedyDoubles.choose_move(&hand, &line(&[(3, 5)]));
        assert_eq!(decision, Decision::Play(Move::new(t(5, 5), Placement::Right)));
    }

    #[test]
    fn test_heaviest_double_wins() {
        let hand = [t(2, 2), t(6, 6), t(1, 1)];
        let decision = GreedyDoubles.choose_move(&hand, &Line::new());
        assert_eq!(decision, Decision::Play(Move::new(t(6, 6), Placement::Opener)));
    }

    #[test]
    fn test_unplayable_double_is_ignored() {
        let hand = [t(6, 6), t(3, 1), t(3, 4)];
        let decision = GreedyDoubles.choose_move(&hand, &line(&[(3, 5)]));
        assert_eq!(decision, Decision::Play(Move::new(t(3, 4), Placement::Left)));
    }

    #[test]
    fn test_ties_keep_first_in_hand_order() {
        let hand = [t(2, 4), t(1, 5), t(0, 6)];
        let decision = GreedyDoubles.choose_move(&hand, &Line::new());
        assert_eq!(decision, Decision::Play(Move::new(t(2, 4), Placement::Opener)));
    }

    #[test]
    fn test_both_ends_legal_goes_left() {
        let hand = [t(3, 5)];
        let decision = GreedyDoubles.choose_move(&hand, &line(&[(3, 1), (1, 5)]));
        assert_eq!(decision, Decision::Play(Move::new(t(3, 5), Placement::Left)));
    }

    #[test]
    fn test_first_playable_takes_hand_order() {
        let hand = [t(0, 1), t(6, 3), t(5, 3)];
        let decision = FirstPlayable.choose_move(&hand, &line(&[(3, 3)]));
        assert_eq!(decision, Decision::Play(Move::new(t(6, 3), Placement::Left)));
        assert_eq!(FirstPlayable.choose_move(&[t(0, 1)], &line(&[(3, 3)])), Decision::Draw);
    }

    #[test]
    fn test_policies_are_object_safe() {
        let policies: Vec<Box<dyn MovePolicy>> = vec![Box::new(GreedyDoubles), Box::new(FirstPlayable)];
        let names: Vec<_> = policies.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["greedy-doubles", "first-playable"]);
    }
}
