use crate::core::{Board, Move, Square};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// Baseline opponent: uniform choice among the legal squares.
pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn choose_move(&self, _board: &Board, legal_moves: &[Square]) -> Option<Move> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied().map(Move::Place)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
