use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use othello_minimax::core::Side;
use othello_minimax::game::Game;
use othello_minimax::player::ai::AIConfig;
use othello_minimax::player::{MinimaxAI, PlayerController, RandomAI, TuiController};
use std::io;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen)?;

    let res = run();

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    res
}

fn run() -> anyhow::Result<()> {
    print!("=== Othello Minimax ===\r\n\r\n");
    print!("Select mode:\r\n");
    print!("1. Human vs AI\r\n");
    print!("2. AI vs AI (Minimax vs Random)\r\n");
    print!("3. Human vs Human\r\n");
    print!("q. Quit\r\n");

    let mode = loop {
        match read_key()? {
            KeyCode::Char('1') => break "human_vs_ai",
            KeyCode::Char('2') => break "ai_vs_ai",
            KeyCode::Char('3') => break "human_vs_human",
            KeyCode::Char('q') => return Ok(()),
            _ => {}
        }
    };

    let (black, white): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match mode {
        "human_vs_ai" => {
            let config = select_config()?;

            print!("\r\nPlay as:\r\n");
            print!("1. Black (moves first)\r\n");
            print!("2. White\r\n");
            let human_is_black = loop {
                match read_key()? {
                    KeyCode::Char('1') => break true,
                    KeyCode::Char('2') => break false,
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            };

            if human_is_black {
                (
                    Box::new(TuiController::new(Side::Black, "You")),
                    Box::new(MinimaxAI::new(Side::White, "Minimax AI", config)),
                )
            } else {
                (
                    Box::new(MinimaxAI::new(Side::Black, "Minimax AI", config)),
                    Box::new(TuiController::new(Side::White, "You")),
                )
            }
        }
        "ai_vs_ai" => {
            let config = select_config()?;
            (
                Box::new(MinimaxAI::new(Side::Black, "Minimax AI", config)),
                Box::new(RandomAI::new("Random AI")),
            )
        }
        _ => (
            Box::new(TuiController::new(Side::Black, "Black")),
            Box::new(TuiController::new(Side::White, "White")),
        ),
    };

    Game::new().play(black.as_ref(), white.as_ref());
    Ok(())
}

fn select_config() -> anyhow::Result<AIConfig> {
    print!("\r\nSelect AI strength:\r\n");
    print!("1. Light (depth 2, no pruning)\r\n");
    print!("2. Standard (depth 4)\r\n");
    print!("3. Strong (depth 6)\r\n");
    print!("4. Custom (ai_config.json)\r\n");

    loop {
        match read_key()? {
            KeyCode::Char('1') => return Ok(AIConfig::light()),
            KeyCode::Char('2') => return Ok(AIConfig::standard()),
            KeyCode::Char('3') => return Ok(AIConfig::strong()),
            KeyCode::Char('4') => return Ok(AIConfig::get().clone()),
            _ => {}
        }
    }
}

fn read_key() -> anyhow::Result<KeyCode> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                return Ok(key.code);
            }
        }
    }
}
