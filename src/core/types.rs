use serde::{Deserialize, Serialize};
use std::fmt;

/// Board edge length. Othello is always played on 8x8.
pub const BOARD_SIZE: usize = 8;

/// Disc colour, and therefore side to move. There is no neutral side:
/// an empty cell is a `Cell` state, never a `Side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    fn default() -> Self {
        Side::Black
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// Board coordinate, 0-indexed, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Standard Othello notation: column letter, then 1-based row.
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}
