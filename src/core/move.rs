use super::types::Square;
use std::fmt;

/// A reply chosen by a player: place a disc, or the explicit pass used
/// when there is no legal placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Place(Square),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Place(sq) => write!(f, "{}", sq),
            Move::Pass => write!(f, "pass"),
        }
    }
}
