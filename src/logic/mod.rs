//! Board rules: legal-move enumeration and move application.
//!
//! These functions are the single arbiter of legality. The players never
//! construct placements themselves, they only replay squares enumerated
//! here, so an illegal square reaching `apply_move` is a caller bug.

use crate::core::{Board, Cell, Side, Square, BOARD_SIZE};

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All squares `side` may play on, in row-major order. The order is
/// deterministic; the engine's tie-break and the tests depend on that.
/// An empty result means `side` must pass.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Square> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let sq = Square::new(row, col);
            if is_legal_move(board, side, sq) {
                moves.push(sq);
            }
        }
    }
    moves
}

/// A placement is legal when the cell is empty and it flanks at least one
/// opposing disc in some direction.
pub fn is_legal_move(board: &Board, side: Side, sq: Square) -> bool {
    if sq.row >= BOARD_SIZE || sq.col >= BOARD_SIZE {
        return false;
    }
    if board.get(sq) != Cell::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| flips_in_direction(board, side, sq, dr, dc))
}

/// Does placing at `sq` flip discs along `(dr, dc)`? True when the ray
/// holds one or more opposing discs followed by one of `side`'s own.
fn flips_in_direction(board: &Board, side: Side, sq: Square, dr: i8, dc: i8) -> bool {
    let mut r = sq.row as i8 + dr;
    let mut c = sq.col as i8 + dc;
    let mut seen_opponent = false;

    while in_bounds(r, c) {
        match board.get(Square::new(r as usize, c as usize)) {
            Cell::Empty => return false,
            Cell::Disc(s) if s == side => return seen_opponent,
            Cell::Disc(_) => {
                seen_opponent = true;
                r += dr;
                c += dc;
            }
        }
    }

    false
}

/// Returns the position after `side` plays `sq`, leaving the input board
/// untouched. Caller contract: `sq` is in `legal_moves(board, side)`.
pub fn apply_move(board: &Board, side: Side, sq: Square) -> Board {
    let mut next = board.clone();
    next.place(sq, side);
    for &(dr, dc) in &DIRECTIONS {
        flip_in_direction(&mut next, side, sq, dr, dc);
    }
    next
}

fn flip_in_direction(board: &mut Board, side: Side, sq: Square, dr: i8, dc: i8) {
    // Rays from `sq` in distinct directions are disjoint, so flipping one
    // direction cannot invalidate this check for the next.
    if !flips_in_direction(board, side, sq, dr, dc) {
        return;
    }

    let mut r = sq.row as i8 + dr;
    let mut c = sq.col as i8 + dc;

    while in_bounds(r, c) {
        let here = Square::new(r as usize, c as usize);
        match board.get(here) {
            Cell::Disc(s) if s != side => {
                board.place(here, side);
                r += dr;
                c += dc;
            }
            _ => break,
        }
    }
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    (0..BOARD_SIZE).any(|row| {
        (0..BOARD_SIZE).any(|col| is_legal_move(board, side, Square::new(row, col)))
    })
}

/// The game ends when neither side can place a disc.
pub fn game_over(board: &Board) -> bool {
    !has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White)
}

fn in_bounds(r: i8, c: i8) -> bool {
    r >= 0 && r < BOARD_SIZE as i8 && c >= 0 && c < BOARD_SIZE as i8
}
