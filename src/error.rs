//! Engine error types.
//!
//! Wins, draws and ongoing games are values (see `GameResult`), never errors.
//! Everything here is a rejected operation.

use crate::core::PlayerId;

/// Errors returned by the engine, the environment and config validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Target column is full or outside the board.
    #[error("illegal move: column {column} cannot take a piece")]
    IllegalMove { column: usize },

    /// Undo requested with no moves on the history stack.
    #[error("no moves left to undo")]
    EmptyHistory,

    /// Write to an occupied cell. Means the gravity invariant is broken.
    #[error("cell at row {row}, column {col} is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Out-of-turn move while turn order is enforced.
    #[error("it is not the turn of {player}")]
    NotYourTurn { player: PlayerId },

    /// Player is neither of the engine's two fixed identities.
    #[error("{player} is not seated in this game")]
    UnknownPlayer { player: PlayerId },

    #[error("first and second player must be distinct")]
    SamePlayers,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
