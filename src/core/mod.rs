//! Core engine types: players, RNG, configuration, errors.
//!
//! These building blocks carry no game rules. The dice game in
//! `games::bluff` is assembled from them.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{RewardConfig, RoundConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::ConfigError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
