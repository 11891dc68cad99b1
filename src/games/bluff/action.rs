//! Action codec: flat integer ids <-> structured actions.
//!
//! The external contract is a single integer in `0..ACTION_SPACE_SIZE`:
//!
//! | ids         | action                                          |
//! |-------------|-------------------------------------------------|
//! | `0`         | Believe                                         |
//! | `1`         | Doubt                                           |
//! | `2..=65`    | Throw: three base-4 digits, die 1 most significant |
//! | `66..=1066` | Declare `id - 66`                               |
//!
//! Inside the engine actions are always the [`Action`] enum; the integer form
//! exists only at the boundary.

use serde::{Deserialize, Serialize};

use super::dice::{NUM_DICE, POKER_VALUE};
use super::error::ActionError;

pub const BELIEVE_ID: u32 = 0;
pub const DOUBT_ID: u32 = 1;

/// First throw id.
pub const THROW_START: u32 = 2;

/// Number of throw ids (4 sub-actions per die, 3 dice).
pub const THROW_COUNT: u32 = 64;

/// First declare id. Declaring `v` is id `DECLARE_START + v`.
pub const DECLARE_START: u32 = THROW_START + THROW_COUNT;

/// Highest declarable value, the poker sentinel.
pub const MAX_DECLARE_VALUE: u16 = POKER_VALUE;

/// Total number of action ids.
pub const ACTION_SPACE_SIZE: u32 = DECLARE_START + MAX_DECLARE_VALUE as u32 + 1;

/// What to do with one die during a throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DieAction {
    KeepHide = 0,
    KeepShow = 1,
    RollHide = 2,
    RollShow = 3,
}

impl DieAction {
    pub const ALL: [DieAction; 4] = [
        DieAction::KeepHide,
        DieAction::KeepShow,
        DieAction::RollHide,
        DieAction::RollShow,
    ];

    /// Decode a base-4 digit. Only the low two bits are read.
    #[must_use]
    pub fn from_digit(digit: u32) -> Self {
        Self::ALL[(digit % 4) as usize]
    }

    #[must_use]
    pub fn digit(self) -> u32 {
        self as u32
    }

    /// Whether the die gets rerolled.
    #[must_use]
    pub fn rolls(self) -> bool {
        matches!(self, DieAction::RollHide | DieAction::RollShow)
    }

    /// Whether the die ends up under the cup.
    #[must_use]
    pub fn hides(self) -> bool {
        matches!(self, DieAction::KeepHide | DieAction::RollHide)
    }
}

impl std::fmt::Display for DieAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DieAction::KeepHide => "Keep+Hide",
            DieAction::KeepShow => "Keep+Show",
            DieAction::RollHide => "Roll+Hide",
            DieAction::RollShow => "Roll+Show",
        };
        f.write_str(label)
    }
}

/// One sub-action per die, die 1 first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThrowAction([DieAction; NUM_DICE]);

impl ThrowAction {
    #[must_use]
    pub fn new(dice: [DieAction; NUM_DICE]) -> Self {
        Self(dice)
    }

    /// Decode an offset in `0..THROW_COUNT`.
    ///
    /// Digits come out least significant first, so the extraction order is
    /// reversed to put die 1 at index 0.
    #[must_use]
    pub fn from_offset(offset: u32) -> Self {
        let mut rest = offset;
        let mut dice = [DieAction::KeepHide; NUM_DICE];
        for slot in dice.iter_mut() {
            *slot = DieAction::from_digit(rest % 4);
            rest /= 4;
        }
        dice.reverse();
        Self(dice)
    }

    /// Offset in `0..THROW_COUNT`; inverse of [`ThrowAction::from_offset`].
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.0.iter().fold(0, |acc, d| acc * 4 + d.digit())
    }

    #[must_use]
    pub fn dice(&self) -> [DieAction; NUM_DICE] {
        self.0
    }

    /// Whether any die is shaken under the cup.
    #[must_use]
    pub fn uses_cup(&self) -> bool {
        self.0.contains(&DieAction::RollHide)
    }

    /// Apply the physical constraint of the cup.
    ///
    /// While the cup is being used to shake dice it cannot also cover a kept
    /// die, so every Keep+Hide becomes Keep+Show.
    #[must_use]
    pub fn with_cup_constraint(self) -> Self {
        if !self.uses_cup() {
            return self;
        }
        let mut dice = self.0;
        for d in dice.iter_mut() {
            if *d == DieAction::KeepHide {
                *d = DieAction::KeepShow;
            }
        }
        Self(dice)
    }

    #[must_use]
    pub fn reroll_mask(&self) -> [bool; NUM_DICE] {
        self.0.map(DieAction::rolls)
    }

    #[must_use]
    pub fn hide_mask(&self) -> [bool; NUM_DICE] {
        self.0.map(DieAction::hides)
    }
}

impl std::fmt::Display for ThrowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// A decoded action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Believe,
    Doubt,
    Throw(ThrowAction),
    /// Claim a rank. `0` decodes but is never legal.
    Declare(u16),
}

impl Action {
    /// Decode a flat action id.
    ///
    /// ```
    /// use bluff_dice::games::bluff::Action;
    ///
    /// assert_eq!(Action::decode(1), Ok(Action::Doubt));
    /// assert_eq!(Action::decode(66 + 642), Ok(Action::Declare(642)));
    /// assert!(Action::decode(5000).is_err());
    /// ```
    pub fn decode(id: u32) -> Result<Self, ActionError> {
        match id {
            BELIEVE_ID => Ok(Action::Believe),
            DOUBT_ID => Ok(Action::Doubt),
            id if id < DECLARE_START => Ok(Action::Throw(ThrowAction::from_offset(id - THROW_START))),
            id if id < ACTION_SPACE_SIZE => Ok(Action::Declare((id - DECLARE_START) as u16)),
            id => Err(ActionError::OutOfRange {
                id,
                size: ACTION_SPACE_SIZE,
            }),
        }
    }

    /// Encode to a flat action id; inverse of [`Action::decode`].
    ///
    /// Declarations above [`MAX_DECLARE_VALUE`] encode past the end of the
    /// action space and decode as malformed.
    #[must_use]
    pub fn encode(&self) -> u32 {
        match self {
            Action::Believe => BELIEVE_ID,
            Action::Doubt => DOUBT_ID,
            Action::Throw(throw) => THROW_START + throw.offset(),
            Action::Declare(value) => DECLARE_START + u32::from(*value),
        }
    }

    /// Decode and describe an id, for logs.
    #[must_use]
    pub fn describe(id: u32) -> String {
        match Self::decode(id) {
            Ok(action) => action.to_string(),
            Err(_) => format!("UNKNOWN ({id})"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Believe => f.write_str("BELIEVE"),
            Action::Doubt => f.write_str("DOUBT"),
            Action::Throw(throw) => write!(f, "THROW {throw}"),
            Action::Declare(POKER_VALUE) => write!(f, "DECLARE {POKER_VALUE} (poker)"),
            Action::Declare(value) => write!(f, "DECLARE {value}"),
        }
    }
}
