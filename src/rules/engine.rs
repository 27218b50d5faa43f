//! Rules engine trait consumed by external search and learning code.
//!
//! The crate does not search. It hands out the primitives a search needs:
//! legal moves, reversible make/undo, a terminal test, a heuristic value and
//! a flat feature vector. Any minimax, MCTS or Q-learning rollout can be
//! written once against this trait.

use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::error::EngineError;

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Board filled with no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Two-player, perfect-information game with exact undo.
///
/// ## Implementation Notes
///
/// - `make_move` must not check whose turn it is unless the implementation
///   was configured to; lookahead plays hypothetical moves for either side.
/// - `undo_last_move` must restore the board, the history length and the
///   player to move exactly.
/// - `result` returns `None` while the game continues.
pub trait RulesEngine {
    /// Move type (a column index for Connect Four).
    type Move: Copy + Eq + std::fmt::Debug;

    /// Player due to move.
    fn current_player(&self) -> PlayerId;

    /// The other seated player.
    fn opponent_of(&self, player: PlayerId) -> PlayerId;

    /// Legal moves for `player`, in ascending order.
    fn valid_moves(&self, player: PlayerId) -> SmallVec<[Self::Move; 8]>;

    /// Apply a move for `player`.
    fn make_move(&mut self, player: PlayerId, mv: Self::Move) -> Result<(), EngineError>;

    /// Apply a hypothetical move for either side, ignoring whose turn it is.
    ///
    /// Lookahead plays this and then `undo_last_move`. Engines without a
    /// turn check can leave the default.
    fn simulate_move(&mut self, player: PlayerId, mv: Self::Move) -> Result<(), EngineError> {
        self.make_move(player, mv)
    }

    /// Revert the most recent move.
    fn undo_last_move(&mut self) -> Result<(), EngineError>;

    /// Return to the starting position.
    fn reset(&mut self);

    /// Finished game's outcome, `None` while it continues.
    fn result(&self) -> Option<GameResult>;

    /// Heuristic value from `player`'s point of view.
    fn value(&self, player: PlayerId) -> f64;

    /// Flat feature vector from `player`'s point of view.
    fn to_input_layer(&self, player: PlayerId) -> Vec<f32>;

    // === Convenience Methods ===

    fn winner(&self) -> Option<PlayerId> {
        match self.result() {
            Some(GameResult::Winner(player)) => Some(player),
            _ => None,
        }
    }

    fn is_game_over(&self) -> bool {
        self.result().is_some()
    }

    fn has_won(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    /// False while nobody has won.
    fn has_lost(&self, player: PlayerId) -> bool {
        matches!(self.winner(), Some(winner) if winner != player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert!(!draw.is_winner(PlayerId::new(1)));
    }
}
