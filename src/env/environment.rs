//! Reinforcement-learning environment over the Connect Four engine.
//!
//! The environment seats the agent ("me") and a scripted opponent. One call
//! to `make_move` is one environment step: the agent's move, then, unless
//! that ended the game, the opponent's reply. Callers never move the
//! opponent directly.

use std::fmt;

use tracing::debug;

use crate::core::{EnvConfig, GameRng, GameRngState, PlayerId};
use crate::error::EngineError;
use crate::games::connect_four::{Columns, ConnectFour};
use crate::rules::win_or_block;

use super::opponent::{OpponentPolicy, SmartRandom};

/// What happened during one environment step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    /// Column the agent played.
    pub column: usize,
    /// Column the opponent replied with, if the game was still running.
    pub reply: Option<usize>,
    /// Reward after the step.
    pub reward: f64,
    /// Game over after the step.
    pub terminal: bool,
}

/// Connect Four from one player's point of view against a scripted opponent.
#[derive(Clone, Debug)]
pub struct ConnectFourEnv<P: OpponentPolicy = SmartRandom> {
    engine: ConnectFour,
    me: PlayerId,
    opponent: PlayerId,
    policy: P,
    rng: GameRng,
    config: EnvConfig,
}

impl ConnectFourEnv<SmartRandom> {
    /// Environment against the smart-random opponent configured by `config`.
    pub fn new(me: PlayerId, opponent: PlayerId, config: EnvConfig) -> Result<Self, EngineError> {
        let policy = SmartRandom::from_config(&config);
        Self::with_policy(me, opponent, config, policy)
    }
}

impl<P: OpponentPolicy> ConnectFourEnv<P> {
    /// Environment against a custom opponent policy.
    ///
    /// If the agent plays second, the opponent makes its opening move here so
    /// the agent is to move when this returns.
    pub fn with_policy(
        me: PlayerId,
        opponent: PlayerId,
        config: EnvConfig,
        policy: P,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let (first, second) = if config.plays_first {
            (me, opponent)
        } else {
            (opponent, me)
        };
        let engine = ConnectFour::with_config(first, second, config.engine.clone())?;

        let mut env = Self {
            engine,
            me,
            opponent,
            policy,
            rng: GameRng::new(config.seed),
            config,
        };
        env.open()?;
        Ok(env)
    }

    /// Play the opponent's opening move when it holds the first seat.
    fn open(&mut self) -> Result<(), EngineError> {
        if self.engine.first_player() == self.opponent {
            let reply = self.opponent_move()?;
            debug!(?reply, "opponent opened");
        }
        Ok(())
    }

    /// Let the policy pick and play the opponent's move.
    fn opponent_move(&mut self) -> Result<Option<usize>, EngineError> {
        let choice = self
            .policy
            .choose_move(&mut self.engine, self.opponent, &mut self.rng)?;
        if let Some(column) = choice {
            self.engine.make_move(self.opponent, column)?;
        }
        Ok(choice)
    }

    // === Accessors ===

    #[must_use]
    pub fn engine(&self) -> &ConnectFour {
        &self.engine
    }

    #[must_use]
    pub fn me(&self) -> PlayerId {
        self.me
    }

    #[must_use]
    pub fn opponent(&self) -> PlayerId {
        self.opponent
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Position of the opponent's random source.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Stepping ===

    /// Columns the agent may play.
    #[must_use]
    pub fn valid_moves(&self) -> Columns {
        self.engine.valid_moves(self.me)
    }

    /// Play the agent's move, then the opponent's reply if the game goes on.
    ///
    /// If the reply fails the agent's move is taken back and the random
    /// source rewound, so an error leaves the environment as it was.
    pub fn make_move(&mut self, column: usize) -> Result<StepOutcome, EngineError> {
        self.engine.make_move(self.me, column)?;

        let reply = if self.engine.is_game_over() {
            None
        } else {
            let rng = self.rng.clone();
            match self.opponent_move() {
                Ok(reply) => reply,
                Err(err) => {
                    self.rng = rng;
                    self.engine.undo_last_move()?;
                    debug!(column, %err, "opponent reply failed, step rolled back");
                    return Err(err);
                }
            }
        };

        let outcome = StepOutcome {
            column,
            reply,
            reward: self.reward(),
            terminal: self.is_terminal(),
        };
        debug!(
            column,
            ?reply,
            reward = outcome.reward,
            terminal = outcome.terminal,
            "environment step"
        );
        Ok(outcome)
    }

    /// Start a new episode. The random source keeps its position, so
    /// successive episodes differ.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.engine.reset();
        self.open()
    }

    // === Signals ===

    /// `+1` on a win, `-1` on a loss, otherwise the heuristic value scaled
    /// and clamped to a small shaping signal.
    #[must_use]
    pub fn reward(&self) -> f64 {
        if self.has_won() {
            return 1.0;
        }
        if self.has_lost() {
            return -1.0;
        }
        let clamp = self.config.reward_clamp;
        (self.engine.value(self.me) / self.config.reward_scale).clamp(-clamp, clamp)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.engine.is_game_over()
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.engine.has_won(self.me)
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.engine.has_lost(self.me)
    }

    /// Episodes have no move cap.
    #[must_use]
    pub fn has_timed_out(&self) -> bool {
        false
    }

    /// A column that wins for the agent right now, else one that blocks the
    /// opponent's immediate win, else `None`. Always `None` once the game is
    /// over.
    pub fn hint(&mut self) -> Result<Option<usize>, EngineError> {
        if self.is_terminal() {
            return Ok(None);
        }
        let hint = win_or_block(&mut self.engine, self.me, self.opponent)?;
        debug!(?hint, "hint");
        Ok(hint)
    }

    // === Encoding ===

    /// Board from the agent's point of view.
    #[must_use]
    pub fn to_layer(&self) -> Vec<f32> {
        self.engine.to_input_layer(self.me)
    }

    #[must_use]
    pub fn layer_size(&self) -> usize {
        self.engine.input_layer_size()
    }

    /// 1-based column label.
    #[must_use]
    pub fn move_to_string(&self, column: usize) -> String {
        ConnectFour::move_to_string(column)
    }
}

impl<P: OpponentPolicy> fmt::Display for ConnectFourEnv<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.engine, f)
    }
}
