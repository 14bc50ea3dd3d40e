use super::types::{Side, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Disc(Side),
}

/// 8x8 board position. Plain value type: applying a move copies the board,
/// so a position handed to the search is never mutated underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Canonical starting position: four discs in the centre,
    /// diagonally arranged, Black on the anti-diagonal.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Disc(Side::White);
        board.cells[3][4] = Cell::Disc(Side::Black);
        board.cells[4][3] = Cell::Disc(Side::Black);
        board.cells[4][4] = Cell::Disc(Side::White);
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row][sq.col]
    }

    pub fn place(&mut self, sq: Square, side: Side) {
        self.cells[sq.row][sq.col] = Cell::Disc(side);
    }

    /// Number of discs `side` has on the board.
    pub fn count(&self, side: Side) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Disc(side))
            .count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|&cell| cell != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
