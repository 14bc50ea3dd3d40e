use super::config::AIConfig;
use super::eval::evaluate;
use super::{Score, SCORE_MAX, SCORE_MIN};
use crate::core::{Board, Move, Side, Square};
use crate::logic::{apply_move, is_legal_move, legal_moves};
use crate::player::PlayerController;

/// Fixed-depth minimax player with alpha-beta pruning.
///
/// One engine covers every skill variant: depth, pruning and the
/// evaluation weights all come from the config. An instance is bound to
/// one side for its whole lifetime and `decide` is called once per turn.
pub struct MinimaxAI {
    side: Side,
    name: String,
    config: AIConfig,
}

impl MinimaxAI {
    pub fn new(side: Side, name: &str, config: AIConfig) -> Self {
        Self {
            side,
            name: name.to_string(),
            config,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Minimax value of `board` with `to_move` to play, seen from
    /// `self.side` — the cutoff always evaluates from the engine's own
    /// perspective, whoever is to move at the leaf.
    ///
    /// `alpha`/`beta` only carry meaning within one root branch; `decide`
    /// reopens the full window for every root move.
    pub fn search(
        &self,
        board: &Board,
        to_move: Side,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        if depth >= self.config.search.max_depth {
            return evaluate(board, self.side, &self.config.evaluation);
        }

        let moves = legal_moves(board, to_move);
        if moves.is_empty() {
            // Forced pass: the turn flips without touching the board. If
            // both sides are stuck this keeps passing down to the cutoff.
            return self.search(board, to_move.opponent(), depth + 1, alpha, beta);
        }

        let maximizing = to_move == self.side;
        let mut best = if maximizing { SCORE_MIN } else { SCORE_MAX };

        for &sq in &moves {
            let next = apply_move(board, to_move, sq);
            let value = self.search(&next, to_move.opponent(), depth + 1, alpha, beta);

            if maximizing {
                best = best.max(value);
                if self.config.search.use_pruning {
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
            } else {
                best = best.min(value);
                if self.config.search.use_pruning {
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }
        }

        best
    }

    /// Picks the best reply for the engine's side, or `Move::Pass` when
    /// there is none. A strictly greater score is required to displace the
    /// running best, so ties go to the first move in enumeration order.
    pub fn decide(&self, board: &Board) -> Move {
        let moves = legal_moves(board, self.side);
        if moves.is_empty() {
            return Move::Pass;
        }

        let mut best_square = moves[0];
        let mut best_value = SCORE_MIN;

        for &sq in &moves {
            let next = apply_move(board, self.side, sq);
            let value = self.search(&next, self.side.opponent(), 1, SCORE_MIN, SCORE_MAX);
            if value > best_value {
                best_value = value;
                best_square = sq;
            }
        }

        if self.config.search.validate_decision && !is_legal_move(board, self.side, best_square) {
            return Move::Pass;
        }
        Move::Place(best_square)
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, _legal_moves: &[Square]) -> Option<Move> {
        Some(self.decide(board))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn engine(side: Side, config: AIConfig) -> MinimaxAI {
        MinimaxAI::new(side, "test", config)
    }

    fn board_from(discs: &[(usize, usize, Side)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, side) in discs {
            board.place(Square::new(row, col), side);
        }
        board
    }

    /// Plays `plies` random legal moves from the start, passing when a
    /// side is stuck. Seeded, so every run sees the same positions.
    fn random_position(seed: u64, plies: usize) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut side = Side::Black;
        for _ in 0..plies {
            let moves = legal_moves(&board, side);
            if moves.is_empty() {
                side = side.opponent();
                if legal_moves(&board, side).is_empty() {
                    break;
                }
                continue;
            }
            let sq = moves[rng.gen_range(0..moves.len())];
            board = apply_move(&board, side, sq);
            side = side.opponent();
        }
        board
    }

    #[test]
    fn pruning_never_changes_the_result() {
        let mut pruned = AIConfig::standard();
        pruned.search.max_depth = 3;
        let mut plain = pruned.clone();
        plain.search.use_pruning = false;

        for seed in 0..8 {
            let board = random_position(seed, 4 + (seed as usize) * 3);
            for side in [Side::Black, Side::White] {
                let a = engine(side, pruned.clone());
                let b = engine(side, plain.clone());
                assert_eq!(
                    a.search(&board, side, 0, SCORE_MIN, SCORE_MAX),
                    b.search(&board, side, 0, SCORE_MIN, SCORE_MAX),
                    "seed {seed}, side {side:?}"
                );
                assert_eq!(a.decide(&board), b.decide(&board), "seed {seed}");
            }
        }
    }

    #[test]
    fn stuck_side_passes_through_to_the_opponent() {
        // Black has no placement here; White can play c1.
        let board = board_from(&[(0, 0, Side::White), (0, 1, Side::Black)]);
        assert!(legal_moves(&board, Side::Black).is_empty());
        assert!(!legal_moves(&board, Side::White).is_empty());

        let ai = engine(Side::Black, AIConfig::standard());
        assert_eq!(
            ai.search(&board, Side::Black, 0, SCORE_MIN, SCORE_MAX),
            ai.search(&board, Side::White, 1, SCORE_MIN, SCORE_MAX)
        );
        // Also holds under a tightened window.
        assert_eq!(
            ai.search(&board, Side::Black, 0, -100, 100),
            ai.search(&board, Side::White, 1, -100, 100)
        );
    }

    #[test]
    fn double_stuck_search_falls_through_to_the_evaluator() {
        // Only white discs: neither side can place, so the search passes
        // all the way down and returns the static score at the cutoff.
        let board = board_from(&[(3, 3, Side::White), (3, 4, Side::White)]);
        let config = AIConfig::standard();
        let ai = engine(Side::Black, config.clone());
        assert_eq!(
            ai.search(&board, Side::Black, 0, SCORE_MIN, SCORE_MAX),
            evaluate(&board, Side::Black, &config.evaluation)
        );
    }

    #[test]
    fn root_pass_when_no_legal_moves() {
        let board = board_from(&[(0, 0, Side::White), (0, 1, Side::Black)]);
        let ai = engine(Side::Black, AIConfig::standard());
        assert_eq!(ai.decide(&board), Move::Pass);
    }

    #[test]
    fn decide_is_deterministic() {
        let board = random_position(42, 11);
        let ai = engine(Side::Black, AIConfig::standard());
        let first = ai.decide(&board);
        for _ in 0..3 {
            assert_eq!(ai.decide(&board), first);
        }
    }

    #[test]
    fn opening_move_is_one_of_the_four() {
        let board = Board::new();
        let openings = legal_moves(&board, Side::Black);
        assert_eq!(openings.len(), 4);

        for config in [AIConfig::light(), AIConfig::standard(), AIConfig::strong()] {
            let ai = engine(Side::Black, config);
            match ai.decide(&board) {
                Move::Place(sq) => assert!(openings.contains(&sq)),
                Move::Pass => panic!("engine passed with moves available"),
            }
        }
    }

    #[test]
    fn equal_scores_break_toward_enumeration_order() {
        // The four openings are rotations/reflections of one another and
        // the weight table shares those symmetries, so all four root
        // scores are equal; the first enumerated square must win.
        let board = Board::new();
        let ai = engine(Side::Black, AIConfig::standard());
        assert_eq!(ai.decide(&board), Move::Place(Square::new(2, 3)));
    }

    #[test]
    fn depth_one_picks_the_evaluator_argmax() {
        // Two placements for Black: the a1 corner (flipping b1) or d5
        // (flipping e5). The corner dominates under the weight table.
        let board = board_from(&[
            (0, 1, Side::White),
            (0, 2, Side::Black),
            (4, 4, Side::White),
            (4, 5, Side::Black),
        ]);
        let moves = legal_moves(&board, Side::Black);
        assert_eq!(moves, vec![Square::new(0, 0), Square::new(4, 3)]);

        let mut config = AIConfig::standard();
        config.search.max_depth = 1;

        let corner_child = apply_move(&board, Side::Black, Square::new(0, 0));
        let other_child = apply_move(&board, Side::Black, Square::new(4, 3));
        assert!(
            evaluate(&corner_child, Side::Black, &config.evaluation)
                > evaluate(&other_child, Side::Black, &config.evaluation)
        );

        let ai = engine(Side::Black, config);
        assert_eq!(ai.decide(&board), Move::Place(Square::new(0, 0)));
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let board = random_position(7, 9);
        let snapshot = board.clone();
        let ai = engine(Side::White, AIConfig::standard());
        ai.decide(&board);
        assert_eq!(board, snapshot);
    }
}
