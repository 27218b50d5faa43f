//! Core types: coordinates, cells, the board, players, move history, RNG,
//! configuration.
//!
//! Nothing in here knows the rules of Connect Four. The engine in
//! `games::connect_four` builds the rules on top of these pieces.

pub mod board;
pub mod cell;
pub mod config;
pub mod coord;
pub mod history;
pub mod player;
pub mod rng;

pub use board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use cell::Cell;
pub use config::{EngineConfig, EnvConfig, ValuationConfig, MIN_DIMENSION};
pub use coord::Coord;
pub use history::{MoveHistory, MoveRecord};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
