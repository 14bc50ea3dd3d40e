use crate::core::{Board, Move, Side, Square, BOARD_SIZE};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

/// Human player: cursor-driven square selection over the rendered board.
pub struct TuiController {
    side: Side,
    name: String,
}

impl TuiController {
    pub fn new(side: Side, name: &str) -> Self {
        Self {
            side,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn choose_move(&self, board: &Board, legal_moves: &[Square]) -> Option<Move> {
        let mut state = DisplayState {
            cursor: legal_moves[0],
            highlights: legal_moves.to_vec(),
            status_msg: Some(format!("{}'s turn ({:?})", self.name, self.side)),
            show_cursor: true,
            ..DisplayState::default()
        };

        loop {
            render_board(board, &state);
            print!("[Arrows]: move | [Enter]: place | [q]: resign\r\n");

            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            if let Ok(Event::Key(KeyEvent { code, .. })) = event::read() {
                match code {
                    KeyCode::Char('q') => return None,
                    KeyCode::Up => {
                        if state.cursor.row > 0 {
                            state.cursor.row -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if state.cursor.row < BOARD_SIZE - 1 {
                            state.cursor.row += 1;
                        }
                    }
                    KeyCode::Left => {
                        if state.cursor.col > 0 {
                            state.cursor.col -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if state.cursor.col < BOARD_SIZE - 1 {
                            state.cursor.col += 1;
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if legal_moves.contains(&state.cursor) {
                            return Some(Move::Place(state.cursor));
                        }
                        state.status_msg =
                            Some(format!("{} is not a legal square", state.cursor));
                    }
                    _ => {}
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
