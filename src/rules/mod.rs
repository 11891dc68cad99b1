//! Environment trait for rules engines.
//!
//! External drivers (training loops, scripted agents, the simulator CLI)
//! talk to a game only through `Environment`: `reset` to start a round,
//! `step` to act. They never reach into engine state.

pub mod engine;

pub use engine::{Environment, StepResult};
