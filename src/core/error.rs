//! Configuration errors.

use thiserror::Error;

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },
}
