use crate::core::{Board, Move, Side, Square};
use crate::display::{render_board, DisplayState};
use crate::logic::{apply_move, game_over, is_legal_move, legal_moves};
use crate::player::PlayerController;

pub struct Game {
    pub board: Board,
    pub current: Side,
    pub last_move: Option<Square>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current: Side::Black,
            last_move: None,
        }
    }

    /// Alternates the two controllers until the game ends or a player
    /// resigns. A side without a legal move is passed over automatically;
    /// when neither side can move the discs are counted out.
    pub fn play(&mut self, black: &dyn PlayerController, white: &dyn PlayerController) {
        loop {
            let controller = match self.current {
                Side::Black => black,
                Side::White => white,
            };

            let mut state = DisplayState::default();
            state.last_move = self.last_move;
            state.status_msg = Some(format!(
                "{}'s turn ({:?})",
                controller.name(),
                self.current
            ));
            render_board(&self.board, &state);

            if game_over(&self.board) {
                self.announce_result();
                break;
            }

            // Keep AI-vs-AI games watchable and let 'q' break out of them.
            if controller.name().contains("AI") {
                if crossterm::event::poll(std::time::Duration::from_millis(500)).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                        if key.code == crossterm::event::KeyCode::Char('q') {
                            print!("Interrupted by user.\r\n");
                            break;
                        }
                    }
                }
            }

            let moves = legal_moves(&self.board, self.current);
            if moves.is_empty() {
                state.status_msg = Some(format!("{:?} has no move and passes", self.current));
                render_board(&self.board, &state);
                std::thread::sleep(std::time::Duration::from_millis(800));
                self.current = self.current.opponent();
                continue;
            }

            match controller.choose_move(&self.board, &moves) {
                None => {
                    print!(
                        "{} resigned. {:?} wins!\r\n",
                        controller.name(),
                        self.current.opponent()
                    );
                    break;
                }
                Some(Move::Pass) => {
                    // A pass with moves on the table forfeits the turn.
                    self.current = self.current.opponent();
                }
                Some(Move::Place(sq)) => {
                    if is_legal_move(&self.board, self.current, sq) {
                        self.board = apply_move(&self.board, self.current, sq);
                        self.last_move = Some(sq);
                        self.current = self.current.opponent();
                    }
                    // An illegal square is ignored; the same side picks again.
                }
            }
        }
    }

    fn announce_result(&self) {
        let black = self.board.count(Side::Black);
        let white = self.board.count(Side::White);
        let mut state = DisplayState::default();
        state.last_move = self.last_move;
        state.status_msg = Some(if black > white {
            format!("Game over: Black wins {}-{}", black, white)
        } else if white > black {
            format!("Game over: White wins {}-{}", white, black)
        } else {
            format!("Game over: draw {}-{}", black, white)
        });
        render_board(&self.board, &state);
        std::thread::sleep(std::time::Duration::from_secs(5));
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
