//! Environment trait for game implementations.
//!
//! Games implement `Environment` to expose:
//! - A reset that (re)starts a round, optionally reseeding
//! - A step that applies one flat action id
//! - The size of the action space and the currently legal ids

use serde::Serialize;

use crate::core::PlayerId;

/// Outcome of one `step` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepResult<O, I> {
    /// What the next acting player sees.
    pub observation: O,

    /// Reward for the player who acted.
    pub reward: f32,

    /// The round has ended; call `reset` before stepping again.
    pub terminated: bool,

    /// Diagnostics. Not part of the observation.
    pub info: I,
}

/// Step/reset interface.
///
/// ## Implementation Notes
///
/// - `step` must never panic on any action id; illegal ids are reported
///   through the result, not by unwinding
/// - A rejected `step` must not change state
/// - `reset(None)` continues the current random stream, `reset(Some(seed))`
///   reseeds it
pub trait Environment {
    /// Per-step view handed to the acting player.
    type Observation;

    /// Diagnostic payload attached to each step.
    type Info;

    /// Start a new round and return its first observation.
    fn reset(&mut self, seed: Option<u64>) -> Self::Observation;

    /// Apply one action id.
    fn step(&mut self, action: u32) -> StepResult<Self::Observation, Self::Info>;

    /// Number of action ids. Valid ids are `0..action_space_size()`.
    fn action_space_size(&self) -> usize;

    /// Ids that `step` would accept right now.
    fn legal_actions(&self) -> Vec<u32>;

    /// The player expected to act next.
    fn current_player(&self) -> PlayerId;

    fn num_players(&self) -> usize;
}
