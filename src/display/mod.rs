use crate::core::{Board, Cell, Side, Square, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Square,
    pub highlights: Vec<Square>,
    pub status_msg: Option<String>,
    pub last_move: Option<Square>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Square::default(),
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: false,
        }
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // Full clear to keep the board anchored instead of scrolling.
    let _ = execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );

    print!("=== Othello Minimax ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    print!("   ");
    for col in 0..BOARD_SIZE {
        print!(" {} ", (b'a' + col as u8) as char);
    }
    print!("\r\n");
    print!("  +{}+\r\n", "---".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("{} |", row + 1);
        for col in 0..BOARD_SIZE {
            let sq = Square::new(row, col);
            let is_cursor = state.show_cursor && state.cursor == sq;
            let is_highlight = state.highlights.contains(&sq);
            let is_last_move = state.last_move == Some(sq);

            let disc = match board.get(sq) {
                Cell::Disc(Side::Black) => 'X',
                Cell::Disc(Side::White) => 'O',
                Cell::Empty => '.',
            };

            let (prefix, suffix) = if is_cursor {
                ('[', ']')
            } else if is_highlight {
                ('(', ')')
            } else if is_last_move {
                ('{', '}')
            } else {
                (' ', ' ')
            };

            let cell_text = format!("{}{}{}", prefix, disc, suffix);
            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_highlight {
                print!("{}", cell_text.green());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else {
                match board.get(sq) {
                    Cell::Disc(Side::Black) => print!("{}", cell_text.cyan()),
                    Cell::Disc(Side::White) => print!("{}", cell_text.magenta()),
                    Cell::Empty => print!("{}", cell_text),
                }
            }
        }
        print!("|\r\n");
    }

    print!("  +{}+\r\n", "---".repeat(BOARD_SIZE));
    print!(
        "Black (X): {}   White (O): {}\r\n",
        board.count(Side::Black),
        board.count(Side::White)
    );
}
