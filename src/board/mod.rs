//! The shared line of play.
//!
//! ## Key Types
//!
//! - `Line`: played tiles in laid orientation, plus the two exposed pips
//! - `Placement`: opener, left or right
//! - `End`: one of the two open ends
//! - `LegalPlacements`: the placements a tile may take, left before right

pub mod line;
pub mod placement;

pub use line::Line;
pub use placement::{End, LegalPlacements, Placement};
