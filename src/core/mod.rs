pub mod board;
pub mod r#move;
pub mod types;

pub use board::{Board, Cell};
pub use r#move::Move;
pub use types::{Side, Square, BOARD_SIZE};
