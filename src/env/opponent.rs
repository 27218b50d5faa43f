//! Scripted opponents that generate training opposition.
//!
//! A policy picks the opponent's column inside an environment step. It is
//! handed the engine mutably so it can probe moves with make/undo, and it
//! must hand it back unchanged.

use tracing::debug;

use crate::core::{EnvConfig, GameRng, PlayerId};
use crate::error::EngineError;
use crate::games::connect_four::ConnectFour;
use crate::rules::win_or_block;

/// Policy for choosing the scripted side's move.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a column for `me`.
    ///
    /// Returns `None` if no column can take a piece.
    fn choose_move(
        &self,
        engine: &mut ConnectFour,
        me: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Option<usize>, EngineError>;
}

// =============================================================================
// Smart Random
// =============================================================================

/// Wins and blocks early and occasionally, random otherwise.
///
/// During the opening, or with probability `smart_probability` after it, the
/// policy takes an immediate win if it has one, else blocks the other side's
/// immediate win. In every other case, or when neither exists, it plays a
/// uniformly random legal column.
#[derive(Clone, Debug, PartialEq)]
pub struct SmartRandom {
    /// Moves played before which the tactical check always runs.
    pub opening_moves: usize,
    /// Chance of running the tactical check after the opening.
    pub smart_probability: f64,
}

impl Default for SmartRandom {
    fn default() -> Self {
        Self {
            opening_moves: 15,
            smart_probability: 0.4,
        }
    }
}

impl SmartRandom {
    #[must_use]
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            opening_moves: config.opening_moves,
            smart_probability: config.smart_probability,
        }
    }
}

impl OpponentPolicy for SmartRandom {
    fn choose_move(
        &self,
        engine: &mut ConnectFour,
        me: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Option<usize>, EngineError> {
        let valid = engine.valid_moves(me);
        if valid.is_empty() {
            return Ok(None);
        }

        if engine.move_count() < self.opening_moves || rng.gen_bool(self.smart_probability) {
            let other = engine.opponent_of(me);
            if let Some(column) = win_or_block(engine, me, other)? {
                debug!(%me, column, "smart-random: win or block");
                return Ok(Some(column));
            }
        }

        Ok(rng.choose(&valid))
    }
}

// =============================================================================
// One Step Ahead
// =============================================================================

/// Deterministic greedy opponent.
///
/// Wins or blocks when it can; otherwise plays the column that maximizes its
/// own heuristic value after the move. Columns are tried left to right and a
/// later one wins only with a strictly higher value, so ties go to the
/// leftmost.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneStepAhead;

impl OpponentPolicy for OneStepAhead {
    fn choose_move(
        &self,
        engine: &mut ConnectFour,
        me: PlayerId,
        _rng: &mut GameRng,
    ) -> Result<Option<usize>, EngineError> {
        let valid = engine.valid_moves(me);
        if valid.is_empty() {
            return Ok(None);
        }

        let other = engine.opponent_of(me);
        if let Some(column) = win_or_block(engine, me, other)? {
            return Ok(Some(column));
        }

        let mut best: Option<(usize, f64)> = None;
        for column in valid {
            engine.simulate_move(me, column)?;
            let value = engine.value(me);
            engine.undo_last_move()?;

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((column, value));
            }
        }

        Ok(best.map(|(column, _)| column))
    }
}

// =============================================================================
// Uniform Random
// =============================================================================

/// Uniformly random legal column.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl OpponentPolicy for UniformRandom {
    fn choose_move(
        &self,
        engine: &mut ConnectFour,
        me: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Option<usize>, EngineError> {
        Ok(rng.choose(&engine.valid_moves(me)))
    }
}
