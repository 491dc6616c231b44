//! Match configuration.
//!
//! The only rule parameter is the highest pip value `N`, which fixes the
//! size of the tile set and the rank of the doubles. Everything else about
//! a match (hand size, seat count) is the standard draw game.

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use crate::tiles::Pip;

/// Tiles dealt to each seat at the start of a match.
pub const HAND_SIZE: usize = 7;

/// Highest pip value of the standard double-six set.
pub const STANDARD_MAX_PIP: Pip = 6;

/// Largest set this engine will build (double-twelve).
pub const LARGEST_MAX_PIP: Pip = 12;

/// Configuration for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Highest pip value on any tile.
    pub max_pip: Pip,

    /// Tiles dealt to each seat. Always `HAND_SIZE`; `validate` rejects
    /// anything else.
    pub hand_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_pip: STANDARD_MAX_PIP,
            hand_size: HAND_SIZE,
        }
    }
}

impl MatchConfig {
    /// Create the standard double-six configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highest pip value.
    #[must_use]
    pub fn with_max_pip(mut self, max_pip: Pip) -> Self {
        self.max_pip = max_pip;
        self
    }

    /// Number of tiles in the full set: `(N+1)(N+2)/2`.
    #[must_use]
    pub fn set_size(&self) -> usize {
        let n = usize::from(self.max_pip);
        (n + 1) * (n + 2) / 2
    }

    /// Check that a match can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_pip > LARGEST_MAX_PIP {
            return Err(MatchError::InvalidConfig(format!(
                "max pip {} exceeds {}",
                self.max_pip, LARGEST_MAX_PIP
            )));
        }
        if self.hand_size != HAND_SIZE {
            return Err(MatchError::InvalidConfig(format!(
                "hand size {} is not the standard {}",
                self.hand_size, HAND_SIZE
            )));
        }
        if self.set_size() < self.hand_size * 2 {
            return Err(MatchError::InvalidConfig(format!(
                "{} tiles cannot fill two hands of {}",
                self.set_size(),
                self.hand_size
            )));
        }
        Ok(())
    }
}
