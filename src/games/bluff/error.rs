//! Step rejections.
//!
//! Nothing here is fatal to an engine instance. Every rejected step leaves
//! the round exactly as it was and the same player acts again.

use serde::Serialize;
use thiserror::Error;

use super::round::Phase;

/// An action id that does not decode to any action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Error)]
pub enum ActionError {
    #[error("action id {id} is outside the action space (size {size})")]
    OutOfRange { id: u32, size: u32 },
}

/// Faces that no die can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Error)]
pub enum DiceError {
    #[error("die face {face} is outside 1..=6")]
    FaceOutOfRange { face: u8 },
}

/// Why a step was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Error)]
pub enum Rejection {
    /// The id is outside the whole action space.
    #[error("malformed action: {0}")]
    Malformed(#[from] ActionError),

    /// The action's kind does not fit the current phase.
    #[error("invalid action {action} for phase {phase}")]
    InvalidForPhase { action: u32, phase: Phase },

    /// A declaration that is not strictly higher or not an allowed value.
    #[error("declaration {value} must be higher than {previous} and a legal rank")]
    InvalidDeclaration { value: u16, previous: u16 },

    /// The round already ended; `reset` must be called first.
    #[error("round is over, reset before acting")]
    RoundOver,
}
