//! # connect-four-env
//!
//! A Connect Four rules engine and a reinforcement-learning environment on
//! top of it.
//!
//! ## Design Principles
//!
//! 1. **Reversible**: every move can be taken back exactly. Lookahead and
//!    rollouts play and undo in place instead of copying the board.
//!
//! 2. **Primitives, not search**: the engine exposes legal moves, make/undo,
//!    a terminal test, a heuristic value and a flat feature vector. Search
//!    and learning live outside this crate.
//!
//! 3. **Deterministic**: the only randomness is the scripted opponent's,
//!    drawn from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: coordinates, cells, board, players, move history, RNG, config
//! - `rules`: `RulesEngine` trait and one-ply lookahead helpers
//! - `games`: the Connect Four engine, win detection and valuation
//! - `env`: the environment adapter and scripted opponents
//! - `error`: `EngineError`
//!
//! ## Example
//!
//! ```
//! use connect_four_env::{ConnectFourEnv, EnvConfig, PlayerId};
//!
//! let mut env = ConnectFourEnv::new(PlayerId::new(0), PlayerId::new(1), EnvConfig::default())?;
//! while !env.is_terminal() {
//!     let column = match env.hint()? {
//!         Some(column) => column,
//!         None => env.valid_moves()[0],
//!     };
//!     env.make_move(column)?;
//! }
//! assert!(env.reward().abs() == 1.0 || env.engine().is_draw());
//! # Ok::<(), connect_four_env::EngineError>(())
//! ```

pub mod core;
pub mod env;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, EngineConfig, EnvConfig, GameRng, GameRngState, MoveHistory,
    MoveRecord, PlayerId, ValuationConfig,
};

pub use crate::env::{
    ConnectFourEnv, OneStepAhead, OpponentPolicy, SmartRandom, StepOutcome, UniformRandom,
};

pub use crate::error::EngineError;

pub use crate::games::connect_four::{Columns, ConnectFour};

pub use crate::rules::{GameResult, RulesEngine};
