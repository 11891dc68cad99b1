//! Agents that pick actions from observations.
//!
//! A [`Policy`] sees exactly what the environment hands out and answers with
//! a flat action id. Learned policies live outside the crate; the scripted
//! [`RandomPolicy`] is the baseline opponent and the CLI's driver.

pub mod random;

pub use random::RandomPolicy;

use crate::games::bluff::Observation;

/// Chooses an action id for the acting player.
pub trait Policy {
    fn act(&mut self, obs: &Observation) -> u32;
}
