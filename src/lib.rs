//! # bluff-dice
//!
//! A deterministic engine for a three-dice bluffing game, built to be driven
//! by reinforcement learning loops.
//!
//! ## Design Principles
//!
//! 1. **Flat Action Space**: Agents answer every observation with a single
//!    integer id. Structured actions exist only inside the engine.
//!
//! 2. **Rejections Are Values**: An illegal id never panics and never changes
//!    state. It earns a penalty and a reason.
//!
//! 3. **Reproducible**: Every random draw comes from one seeded stream, so a
//!    seed and an action sequence replay a round exactly.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `rules`: `Environment` trait (reset/step)
//! - `games`: The bluffing game itself (dice, codec, round, observation)
//! - `nn`: Observation encoding for policy networks
//! - `policy`: Agents, including the scripted random baseline
//! - `simulate`: Rollout helpers used by the CLI and tests

pub mod core;
pub mod games;
pub mod nn;
pub mod policy;
pub mod rules;
pub mod simulate;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, GameRngState, PlayerId, PlayerMap, RewardConfig, RoundConfig,
};

pub use crate::games::bluff::{
    Action, BluffRound, Observation, Phase, Rejection, StepInfo, ACTION_SPACE_SIZE,
};

pub use crate::rules::{Environment, StepResult};

pub use crate::nn::{EncodedState, FlatObservationEncoder, StateEncoder};

pub use crate::policy::{Policy, RandomPolicy};
