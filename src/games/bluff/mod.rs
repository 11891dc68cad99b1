//! Three-dice bluffing game ("blufpoker").
//!
//! Players pass a cup with three dice around the table:
//! - The holder declares a rank that must beat the previous declaration
//! - The next player believes it (and throws on) or doubts it (and the cup
//!   is lifted)
//! - A declared triple that is believed must actually be rolled within
//!   three attempts
//!
//! Supports 3-8 players. One round ends with one loser, who opens the next.

mod action;
mod dice;
mod error;
pub mod legal;
mod observation;
mod round;

pub use action::{
    Action, DieAction, ThrowAction, ACTION_SPACE_SIZE, BELIEVE_ID, DECLARE_START, DOUBT_ID,
    MAX_DECLARE_VALUE, THROW_COUNT, THROW_START,
};
pub use dice::{rank, Cup, Dice, HIDDEN_FACE, MAX_FACE, MAX_NORMAL_DECLARE, NUM_DICE, POKER_VALUE};
pub use error::{ActionError, DiceError, Rejection};
pub use observation::{GymObservation, Observation};
pub use round::{BluffRound, Phase, StepInfo, MAX_POKER_ATTEMPTS};
