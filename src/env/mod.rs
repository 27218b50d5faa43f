//! Reinforcement-learning environment adapter.
//!
//! - `environment`: `ConnectFourEnv`, the agent-facing step/reward/hint API
//! - `opponent`: `OpponentPolicy` and the scripted opponents that play the
//!   other side

pub mod environment;
pub mod opponent;

pub use environment::{ConnectFourEnv, StepOutcome};
pub use opponent::{OneStepAhead, OpponentPolicy, SmartRandom, UniformRandom};
