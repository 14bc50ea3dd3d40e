//! Static position evaluation.
//!
//! Three additive terms, each computed as side-minus-opponent and combined
//! with the configured integer weights:
//! 1. positional: the fixed weight table over every occupied cell,
//! 2. mobility: legal-move count differential,
//! 3. material: disc-count differential.
//!
//! The material term must be generic over `side`; hard-coding one colour's
//! raw differential silently flips the sign for the other colour.

use super::config::EvaluationConfig;
use super::Score;
use crate::core::{Board, Cell, Side, Square, BOARD_SIZE};
use crate::logic::legal_moves;

/// Scores `board` from `side`'s perspective. Pure; the board is never
/// modified. Positive means `side` is better off.
pub fn evaluate(board: &Board, side: Side, cfg: &EvaluationConfig) -> Score {
    let opponent = side.opponent();

    let mut positional = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match board.get(Square::new(row, col)) {
                Cell::Disc(s) if s == side => positional += cfg.table[row][col],
                Cell::Disc(_) => positional -= cfg.table[row][col],
                Cell::Empty => {}
            }
        }
    }

    let mobility =
        legal_moves(board, side).len() as Score - legal_moves(board, opponent).len() as Score;
    let material = board.count(side) as Score - board.count(opponent) as Score;

    cfg.position_weight * positional
        + cfg.mobility_weight * mobility
        + cfg.material_weight * material
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ai::AIConfig;

    fn board_from(discs: &[(usize, usize, Side)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, side) in discs {
            board.place(Square::new(row, col), side);
        }
        board
    }

    #[test]
    fn empty_board_scores_zero() {
        let cfg = AIConfig::standard().evaluation;
        assert_eq!(evaluate(&Board::empty(), Side::Black, &cfg), 0);
        assert_eq!(evaluate(&Board::empty(), Side::White, &cfg), 0);
    }

    #[test]
    fn starting_position_is_balanced() {
        // Fully symmetric position: both sides must score the same.
        let cfg = AIConfig::standard().evaluation;
        let board = Board::new();
        assert_eq!(
            evaluate(&board, Side::Black, &cfg),
            evaluate(&board, Side::White, &cfg)
        );
    }

    #[test]
    fn material_sign_flips_with_side() {
        let mut cfg = AIConfig::standard().evaluation;
        cfg.position_weight = 0;
        cfg.mobility_weight = 0;
        cfg.material_weight = 1;

        // Three black discs against one white.
        let board = board_from(&[
            (0, 3, Side::Black),
            (2, 2, Side::Black),
            (5, 5, Side::Black),
            (7, 7, Side::White),
        ]);
        assert_eq!(evaluate(&board, Side::Black, &cfg), 2);
        assert_eq!(evaluate(&board, Side::White, &cfg), -2);
    }

    #[test]
    fn corner_outweighs_interior() {
        let mut cfg = AIConfig::standard().evaluation;
        cfg.mobility_weight = 0;
        cfg.material_weight = 0;

        let corner = board_from(&[(0, 0, Side::Black)]);
        let interior = board_from(&[(3, 3, Side::Black)]);
        assert!(
            evaluate(&corner, Side::Black, &cfg) > evaluate(&interior, Side::Black, &cfg)
        );
    }

    #[test]
    fn x_square_is_penalised() {
        let mut cfg = AIConfig::standard().evaluation;
        cfg.mobility_weight = 0;
        cfg.material_weight = 0;

        let x_square = board_from(&[(1, 1, Side::Black)]);
        assert!(evaluate(&x_square, Side::Black, &cfg) < 0);
    }

    #[test]
    fn mobility_counts_both_sides() {
        let mut cfg = AIConfig::standard().evaluation;
        cfg.position_weight = 0;
        cfg.material_weight = 0;
        cfg.mobility_weight = 1;

        // Black cannot move, White has exactly one placement (c1).
        let board = board_from(&[(0, 0, Side::White), (0, 1, Side::Black)]);
        assert_eq!(evaluate(&board, Side::White, &cfg), 1);
        assert_eq!(evaluate(&board, Side::Black, &cfg), -1);
    }
}
