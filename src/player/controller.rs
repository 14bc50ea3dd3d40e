use crate::core::{Board, Move, Square};

/// A participant in the game loop. `legal_moves` is never empty when this
/// is called; forced passes are handled by the loop itself. Returning
/// `None` resigns.
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Square]) -> Option<Move>;
    fn name(&self) -> &str;
}
