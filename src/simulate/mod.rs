//! Driving rounds with a policy.
//!
//! Used by the `bluff-sim` binary and by integration tests. Every seat is
//! played by the same [`Policy`]; rewards are credited to whoever acted.

pub mod rollout;

pub use rollout::{play_round, play_rounds, tally_losses, RoundSummary};
