//! Rules engine trait and one-ply lookahead helpers.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each position
//! - How moves modify the position, and how to take them back
//! - Win/draw conditions and a heuristic value
//!
//! Search and learning code outside this crate calls into `RulesEngine`
//! without knowing Connect Four specifics.

pub mod engine;
pub mod lookahead;

pub use engine::{GameResult, RulesEngine};
pub use lookahead::{immediate_win, win_or_block};
