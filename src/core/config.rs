//! Engine and environment configuration.
//!
//! Every struct has a `Default` matching the standard game, `with_*` builder
//! methods, and a `validate` check that constructors run before accepting it.
//! All of them round-trip through serde so a driver can keep them in its own
//! config files.

use serde::{Deserialize, Serialize};

use super::board::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::error::EngineError;

/// Smallest board on which a line of four fits in every direction.
pub const MIN_DIMENSION: usize = 4;

/// Weights for the partial-line heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Score of a window holding four of the player's pieces.
    pub win_weight: f64,

    /// Score of a window holding three pieces and no opposing piece.
    pub three_weight: f64,

    /// Score of a window holding two pieces and no opposing piece.
    pub two_weight: f64,

    /// Only count windows whose cells all rest on filled columns.
    ///
    /// Off by default: every window is scored whether or not it is playable
    /// yet.
    pub require_support: bool,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            win_weight: 10.0,
            three_weight: 1.0,
            two_weight: 0.1,
            require_support: false,
        }
    }
}

impl ValuationConfig {
    #[must_use]
    pub fn with_weights(mut self, win: f64, three: f64, two: f64) -> Self {
        self.win_weight = win;
        self.three_weight = three;
        self.two_weight = two;
        self
    }

    #[must_use]
    pub fn with_support_check(mut self, enabled: bool) -> Self {
        self.require_support = enabled;
        self
    }

    /// Weights must be strictly ordered `win > three > two > 0`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.two_weight > 0.0) {
            return Err(EngineError::InvalidConfig(
                "valuation.two_weight must be > 0".into(),
            ));
        }
        if !(self.three_weight > self.two_weight) {
            return Err(EngineError::InvalidConfig(
                "valuation.three_weight must be > two_weight".into(),
            ));
        }
        if !(self.win_weight > self.three_weight) {
            return Err(EngineError::InvalidConfig(
                "valuation.win_weight must be > three_weight".into(),
            ));
        }
        Ok(())
    }
}

/// Board shape and rule switches for the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,

    /// Reject moves by the player who is not to move.
    ///
    /// Off by default so lookahead can play hypothetical moves for either
    /// side.
    pub enforce_turn_order: bool,

    pub valuation: ValuationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            enforce_turn_order: false,
            valuation: ValuationConfig::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_turn_check(mut self, enabled: bool) -> Self {
        self.enforce_turn_order = enabled;
        self
    }

    #[must_use]
    pub fn with_valuation(mut self, valuation: ValuationConfig) -> Self {
        self.valuation = valuation;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows < MIN_DIMENSION {
            return Err(EngineError::InvalidConfig(format!(
                "rows must be >= {MIN_DIMENSION}"
            )));
        }
        if self.columns < MIN_DIMENSION {
            return Err(EngineError::InvalidConfig(format!(
                "columns must be >= {MIN_DIMENSION}"
            )));
        }
        self.valuation.validate()
    }
}

/// Environment-level settings: seating, reward shaping, opponent behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Whether the agent takes the first seat.
    pub plays_first: bool,

    /// Seed for the opponent's random source.
    pub seed: u64,

    /// Divisor applied to the heuristic value before clamping.
    pub reward_scale: f64,

    /// Bound on the shaped reward while the game is undecided.
    pub reward_clamp: f64,

    /// Moves played before which the smart-random opponent always looks
    /// for a win or block.
    pub opening_moves: usize,

    /// Chance the smart-random opponent looks for a win or block after the
    /// opening.
    pub smart_probability: f64,

    pub engine: EngineConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            plays_first: true,
            seed: 42,
            reward_scale: 30.0,
            reward_clamp: 0.1,
            opening_moves: 15,
            smart_probability: 0.4,
            engine: EngineConfig::default(),
        }
    }
}

impl EnvConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_plays_first(mut self, plays_first: bool) -> Self {
        self.plays_first = plays_first;
        self
    }

    #[must_use]
    pub fn with_smart_probability(mut self, probability: f64) -> Self {
        self.smart_probability = probability;
        self
    }

    #[must_use]
    pub fn with_opening_moves(mut self, moves: usize) -> Self {
        self.opening_moves = moves;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.reward_scale > 0.0) {
            return Err(EngineError::InvalidConfig(
                "reward_scale must be > 0".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.reward_clamp) {
            return Err(EngineError::InvalidConfig(
                "reward_clamp must be in [0, 1)".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.smart_probability) {
            return Err(EngineError::InvalidConfig(
                "smart_probability must be in [0, 1]".into(),
            ));
        }
        self.engine.validate()
    }
}
