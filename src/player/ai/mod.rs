pub mod config;
pub mod eval;
pub mod minimax;
pub mod random;
pub mod table;

pub use config::AIConfig;
pub use minimax::MinimaxAI;
pub use random::RandomAI;

/// Search and evaluation score.
pub type Score = i32;

/// Seeds for best-so-far accumulators and the initial alpha/beta window.
/// Kept well inside `i32` so comparisons and weighted sums cannot wrap.
pub const SCORE_MIN: Score = -9_999_999;
pub const SCORE_MAX: Score = 9_999_999;
