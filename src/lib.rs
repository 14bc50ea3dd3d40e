//! Fixed-depth minimax decision engine for 8x8 Othello/Reversi.
//!
//! The interesting part lives in [`player::ai`]: a static evaluator
//! (positional table, mobility, material), a depth-limited alpha-beta
//! search and the root decision procedure, all parameterized by
//! [`player::ai::AIConfig`] rather than duplicated per skill level.
//! `core` and `logic` hold the board value types and the rules engine;
//! `game`, `display` and `player::tui` are the terminal harness.

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;
