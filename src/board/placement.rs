//! Where a tile can go on the line.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{Display, EnumString};

use crate::core::error::MatchError;

/// One of the two open ends of a non-empty line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    Left,
    Right,
}

/// A requested or legal placement for a tile.
///
/// `Opener` is the only placement on an empty line; `Left` and `Right`
/// are the only placements afterwards.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// First tile of the match.
    Opener,
    /// Attach at the left end.
    Left,
    /// Attach at the right end.
    Right,
}

impl Placement {
    /// Parse a caller-supplied placement name.
    pub fn parse(name: &str) -> Result<Self, MatchError> {
        name.trim()
            .parse()
            .map_err(|_| MatchError::InvalidSide(name.to_string()))
    }

    /// The end this placement attaches to, if any.
    #[must_use]
    pub const fn end(self) -> Option<End> {
        match self {
            Placement::Opener => None,
            Placement::Left => Some(End::Left),
            Placement::Right => Some(End::Right),
        }
    }
}

impl From<End> for Placement {
    fn from(end: End) -> Self {
        match end {
            End::Left => Placement::Left,
            End::Right => Placement::Right,
        }
    }
}

/// Legal placements for one tile, left before right.
///
/// At most two entries, so it never allocates.
pub type LegalPlacements = SmallVec<[Placement; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Placement::parse("left").unwrap(), Placement::Left);
        assert_eq!(Placement::parse("Right").unwrap(), Placement::Right);
        assert_eq!(Placement::parse(" opener ").unwrap(), Placement::Opener);
    }

    #[test]
    fn test_parse_unknown_name_is_invalid_side() {
        let err = Placement::parse("middle").unwrap_err();
        assert_eq!(err, MatchError::InvalidSide("middle".to_string()));
    }

    #[test]
    fn test_display_round_trips() {
        for placement in [Placement::Opener, Placement::Left, Placement::Right] {
            assert_eq!(Placement::parse(&placement.to_string()).unwrap(), placement);
        }
    }

    #[test]
    fn test_end_mapping() {
        assert_eq!(Placement::Opener.end(), None);
        assert_eq!(Placement::Left.end(), Some(End::Left));
        assert_eq!(Placement::from(End::Right), Placement::Right);
    }
}
