//! How a match ended.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(Seat),
    /// Blocked with equal pip totals.
    Tie,
}

impl MatchResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, MatchResult::Winner(s) if *s == seat)
    }
}

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A seat laid its last tile.
    Domino,
    /// Pool empty and neither seat can play.
    Blocked,
}

/// Terminal outcome with the pip totals left in each hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: MatchResult,
    pub reason: EndReason,
    pub pip_totals: SeatMap<u32>,
}

impl Outcome {
    /// A seat emptied its hand.
    #[must_use]
    pub fn domino(winner: Seat, pip_totals: SeatMap<u32>) -> Self {
        Self {
            result: MatchResult::Winner(winner),
            reason: EndReason::Domino,
            pip_totals,
        }
    }

    /// Neither seat can move: the lower pip total wins, equal totals tie.
    #[must_use]
    pub fn blocked(pip_totals: SeatMap<u32>) -> Self {
        let human = pip_totals[Seat::Human];
        let opponent = pip_totals[Seat::Opponent];

        let result = match human.cmp(&opponent) {
            std::cmp::Ordering::Less => MatchResult::Winner(Seat::Human),
            std::cmp::Ordering::Greater => MatchResult::Winner(Seat::Opponent),
            std::cmp::Ordering::Equal => MatchResult::Tie,
        };

        Self {
            result,
            reason: EndReason::Blocked,
            pip_totals,
        }
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self.result {
            MatchResult::Winner(seat) => Some(seat),
            MatchResult::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let totals = (self.pip_totals[Seat::Human], self.pip_totals[Seat::Opponent]);
        match (self.result, self.reason) {
            (MatchResult::Winner(seat), EndReason::Domino) => {
                write!(f, "{seat} dominoes (pips left {}-{})", totals.0, totals.1)
            }
            (MatchResult::Winner(seat), EndReason::Blocked) => {
                write!(f, "{seat} wins blocked game ({}-{})", totals.0, totals.1)
            }
            (MatchResult::Tie, _) => write!(f, "blocked tie ({}-{})", totals.0, totals.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_lower_total_wins() {
        let outcome = Outcome::blocked(SeatMap::from_values(10, 7));
        assert_eq!(outcome.result, MatchResult::Winner(Seat::Opponent));
        assert_eq!(outcome.reason, EndReason::Blocked);
        assert_eq!(outcome.pip_totals, SeatMap::from_values(10, 7));

        let outcome = Outcome::blocked(SeatMap::from_values(3, 9));
        assert_eq!(outcome.winner(), Some(Seat::Human));
    }

    #[test]
    fn test_blocked_equal_totals_tie() {
        let outcome = Outcome::blocked(SeatMap::from_values(8, 8));
        assert_eq!(outcome.result, MatchResult::Tie);
        assert_eq!(outcome.winner(), None);
        assert!(!outcome.result.is_winner(Seat::Human));
        assert!(!outcome.result.is_winner(Seat::Opponent));
    }

    #[test]
    fn test_domino_outcome() {
        let outcome = Outcome::domino(Seat::Human, SeatMap::from_values(0, 21));
        assert!(outcome.result.is_winner(Seat::Human));
        assert_eq!(outcome.to_string(), "Human dominoes (pips left 0-21)");
    }
}
