//! Round configuration.
//!
//! Drivers configure the engine at construction:
//! - `RewardConfig`: the fixed reward values emitted by `step`
//! - `RoundConfig`: table size plus rewards
//!
//! Both types derive serde so a driver can keep them in a JSON file. A
//! `RoundConfig` is validated on the way in, so a bad table size is a
//! deserialization error rather than a broken round.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 3;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Reward values handed out by the engine.
///
/// Survival focused: nobody wins a round, one player loses it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Believing a declaration and passing the turn on.
    pub survive: f32,

    /// Catching a bluff, or rolling the declared triple in the poker phase.
    pub catch_bluff: f32,

    /// Losing the round.
    pub lose_round: f32,

    /// Any rejected action.
    pub invalid: f32,

    /// Accepted actions that neither pass a test nor end the round.
    #[serde(default)]
    pub neutral: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            survive: 0.05,
            catch_bluff: 0.05,
            lose_round: -1.0,
            invalid: -0.5,
            neutral: 0.0,
        }
    }
}

impl RewardConfig {
    #[must_use]
    pub fn with_survive(mut self, reward: f32) -> Self {
        self.survive = reward;
        self
    }

    #[must_use]
    pub fn with_catch_bluff(mut self, reward: f32) -> Self {
        self.catch_bluff = reward;
        self
    }

    #[must_use]
    pub fn with_lose_round(mut self, penalty: f32) -> Self {
        self.lose_round = penalty;
        self
    }

    #[must_use]
    pub fn with_invalid(mut self, penalty: f32) -> Self {
        self.invalid = penalty;
        self
    }

    #[must_use]
    pub fn with_neutral(mut self, reward: f32) -> Self {
        self.neutral = reward;
        self
    }
}

/// Complete round configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoundConfig")]
pub struct RoundConfig {
    num_players: usize,

    /// Reward values.
    pub rewards: RewardConfig,
}

impl RoundConfig {
    /// Create a configuration for a table of `num_players`.
    ///
    /// ```
    /// use bluff_dice::core::RoundConfig;
    ///
    /// assert!(RoundConfig::new(4).is_ok());
    /// assert!(RoundConfig::new(2).is_err());
    /// ```
    pub fn new(num_players: usize) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigError::PlayerCount {
                got: num_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        Ok(Self {
            num_players,
            rewards: RewardConfig::default(),
        })
    }

    /// Replace the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// Number of seats at the table.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.num_players
    }
}

/// Unchecked wire form of [`RoundConfig`].
#[derive(Deserialize)]
struct RawRoundConfig {
    num_players: usize,
    #[serde(default)]
    rewards: RewardConfig,
}

impl TryFrom<RawRoundConfig> for RoundConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRoundConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.num_players)?.with_rewards(raw.rewards))
    }
}
