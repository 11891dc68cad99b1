//! Scripted random agent.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::games::bluff::{
    Observation, Phase, BELIEVE_ID, DECLARE_START, DOUBT_ID, MAX_NORMAL_DECLARE, POKER_VALUE,
    THROW_START,
};

use super::Policy;

/// Lowest normal declaration the agent bothers with.
const MIN_BLUFF: u16 = 111;

/// Tunables for [`RandomPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomPolicyConfig {
    /// Chance of doubting a declaration.
    pub doubt_prob: f64,

    /// Chance of declaring poker outright.
    pub poker_prob: f64,
}

impl Default for RandomPolicyConfig {
    fn default() -> Self {
        Self {
            doubt_prob: 0.25,
            poker_prob: 0.05,
        }
    }
}

/// Plays uniformly random throws and mostly believes.
///
/// Declarations are drawn uniformly from `max(prev + 1, 111)..=665`, with an
/// occasional poker claim; poker is forced once that range is exhausted.
/// Only ever produces legal ids.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    config: RandomPolicyConfig,
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            config: RandomPolicyConfig::default(),
            rng: GameRng::new(seed),
        }
    }

    /// Use an existing stream, e.g. a fork of the environment's seed.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            config: RandomPolicyConfig::default(),
            rng,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RandomPolicyConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_doubt_prob(mut self, probability: f64) -> Self {
        self.config.doubt_prob = probability;
        self
    }

    #[must_use]
    pub fn with_poker_prob(mut self, probability: f64) -> Self {
        self.config.poker_prob = probability;
        self
    }

    #[must_use]
    pub fn config(&self) -> &RandomPolicyConfig {
        &self.config
    }

    fn believe(&mut self) -> u32 {
        if self.rng.gen_bool(self.config.doubt_prob) {
            DOUBT_ID
        } else {
            BELIEVE_ID
        }
    }

    fn throw(&mut self) -> u32 {
        self.rng.gen_range_u32(THROW_START..DECLARE_START)
    }

    fn declare(&mut self, previous: u16) -> u32 {
        let poker = DECLARE_START + u32::from(POKER_VALUE);
        if previous < POKER_VALUE && self.rng.gen_bool(self.config.poker_prob) {
            return poker;
        }

        let low = previous.saturating_add(1).max(MIN_BLUFF);
        if low > MAX_NORMAL_DECLARE {
            return poker;
        }

        let value = self
            .rng
            .gen_range_u32(u32::from(low)..u32::from(MAX_NORMAL_DECLARE) + 1);
        DECLARE_START + value
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, obs: &Observation) -> u32 {
        match obs.phase {
            Phase::Believe => self.believe(),
            Phase::Throw | Phase::Poker => self.throw(),
            Phase::Declare => self.declare(obs.prev_declared_value),
        }
    }
}
