//! Fixed positional weight tables.
//!
//! Corners are decisive in Othello, so they carry the largest bonus; the
//! X-squares diagonally adjacent to them hand the corner to the opponent
//! and are penalised hard. Both tables are symmetric under rotation and
//! reflection of the board.

pub type PositionTable = [[i32; 8]; 8];

/// Table used by the standard weight set, with the deep X-square penalty.
pub const CLASSIC: PositionTable = [
    [50, -1, 5, 2, 2, 5, -1, 50],
    [-1, -10, 1, 1, 1, 1, -10, -1],
    [5, 1, 1, 1, 1, 1, 1, 5],
    [2, 1, 1, 0, 0, 1, 1, 2],
    [2, 1, 1, 0, 0, 1, 1, 2],
    [5, 1, 1, 1, 1, 1, 1, 5],
    [-1, -10, 1, 1, 1, 1, -10, -1],
    [50, -1, 5, 2, 2, 5, -1, 50],
];

/// Steeper-cornered variant used by the light engine, which leans on the
/// table alone (its mobility and material weights are 1).
pub const BALANCED: PositionTable = [
    [65, -3, 6, 4, 4, 6, -3, 65],
    [-3, -29, 3, 1, 1, 3, -29, -3],
    [6, 3, 5, 3, 3, 5, 3, 6],
    [4, 1, 3, 1, 1, 3, 1, 4],
    [4, 1, 3, 1, 1, 3, 1, 4],
    [6, 3, 5, 3, 3, 5, 3, 6],
    [-3, -29, 3, 1, 1, 3, -29, -3],
    [65, -3, 6, 4, 4, 6, -3, 65],
];
