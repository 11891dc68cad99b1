//! Dice, the cup, and the ranking of a throw.
//!
//! A throw is ranked by sorting the three faces in descending order and
//! reading them as a three-digit number, so (4, 6, 2) ranks 642. Three equal
//! faces ("poker") rank above everything as [`POKER_VALUE`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::GameRng;

use super::error::DiceError;

/// Dice per throw.
pub const NUM_DICE: usize = 3;

/// Highest face of a die.
pub const MAX_FACE: u8 = 6;

/// Rank of any triple. Also the declaration that claims one.
pub const POKER_VALUE: u16 = 1000;

/// Highest rank a non-triple can reach (6, 6, 5).
pub const MAX_NORMAL_DECLARE: u16 = 665;

/// Face reported in observations for a die under the cup.
pub const HIDDEN_FACE: u8 = 0;

/// Rank a throw.
///
/// ```
/// use bluff_dice::games::bluff::{rank, POKER_VALUE};
///
/// assert_eq!(rank([4, 6, 2]), 642);
/// assert_eq!(rank([5, 5, 5]), POKER_VALUE);
/// ```
#[must_use]
pub fn rank(faces: [u8; NUM_DICE]) -> u16 {
    let [a, b, c] = faces;
    if a == b && b == c {
        return POKER_VALUE;
    }

    let mut sorted = faces;
    sorted.sort_unstable_by(|x, y| y.cmp(x));
    sorted
        .iter()
        .fold(0u16, |acc, &face| acc * 10 + u16::from(face))
}

/// Three dice, each showing a face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; NUM_DICE]")]
pub struct Dice([u8; NUM_DICE]);

impl TryFrom<[u8; NUM_DICE]> for Dice {
    type Error = DiceError;

    fn try_from(faces: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        match faces.iter().find(|f| !(1..=MAX_FACE).contains(*f)) {
            Some(&face) => Err(DiceError::FaceOutOfRange { face }),
            None => Ok(Self(faces)),
        }
    }
}

impl Dice {
    /// Dice showing faces the caller already knows are in `1..=6`.
    #[cfg(test)]
    pub(crate) fn new(faces: [u8; NUM_DICE]) -> Self {
        debug_assert!(faces.iter().all(|f| (1..=MAX_FACE).contains(f)));
        Self(faces)
    }

    /// Throw all three dice.
    #[must_use]
    pub fn thrown(rng: &mut GameRng) -> Self {
        let mut dice = Self([1; NUM_DICE]);
        dice.roll([true; NUM_DICE], rng);
        dice
    }

    /// The faces, die 1 first.
    #[must_use]
    pub fn faces(&self) -> [u8; NUM_DICE] {
        self.0
    }

    /// Rank of the current faces.
    #[must_use]
    pub fn rank(&self) -> u16 {
        rank(self.0)
    }

    /// Whether all three faces match.
    #[must_use]
    pub fn is_poker(&self) -> bool {
        self.rank() == POKER_VALUE
    }

    /// Reroll the dice selected by `mask`, keeping the rest.
    ///
    /// Draws exactly one value per selected die, left to right, so a seed
    /// and a sequence of masks always reproduce the same faces.
    pub fn roll(&mut self, mask: [bool; NUM_DICE], rng: &mut GameRng) {
        for (face, reroll) in self.0.iter_mut().zip(mask) {
            if reroll {
                *face = rng.roll_die();
            }
        }
        trace!(faces = ?self.0, ?mask, "rolled dice");
    }
}

/// Which dice sit under the cup. `true` means hidden.
///
/// Everyone can see which dice are covered, just not what they show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cup([bool; NUM_DICE]);

impl Cup {
    /// Every die covered.
    #[must_use]
    pub fn covered() -> Self {
        Self([true; NUM_DICE])
    }

    /// Every die in the open.
    #[must_use]
    pub fn lifted() -> Self {
        Self([false; NUM_DICE])
    }

    #[must_use]
    pub fn from_flags(flags: [bool; NUM_DICE]) -> Self {
        Self(flags)
    }

    #[must_use]
    pub fn flags(&self) -> [bool; NUM_DICE] {
        self.0
    }

    /// Faces as seen from outside the cup: covered dice read [`HIDDEN_FACE`].
    #[must_use]
    pub fn mask(&self, dice: &Dice) -> [u8; NUM_DICE] {
        let mut faces = dice.faces();
        for (face, &hidden) in faces.iter_mut().zip(&self.0) {
            if hidden {
                *face = HIDDEN_FACE;
            }
        }
        faces
    }
}
