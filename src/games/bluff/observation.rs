//! What the acting player gets to see.
//!
//! The observation is the only window external code has on a round. Dice
//! under the cup read as [`HIDDEN_FACE`] while a declaration is being judged
//! (the BELIEVE phase). In the other phases the acting player is the one
//! holding the cup, so the true faces are shown. Which dice are covered is
//! always public.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::dice::{HIDDEN_FACE, NUM_DICE};
use super::round::{BluffRound, Phase};

/// Partially masked snapshot of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Faces, with covered dice masked during BELIEVE.
    pub dice: [u8; NUM_DICE],

    /// Which dice sit under the cup.
    pub cup: [bool; NUM_DICE],

    pub declared_value: u16,
    pub prev_declared_value: u16,
    pub phase: Phase,
    pub current_player: PlayerId,
    pub poker_attempts: u8,
}

impl Observation {
    pub(super) fn project(round: &BluffRound) -> Self {
        let cup = round.cup();
        let dice = if round.phase() == Phase::Believe {
            cup.mask(&round.dice())
        } else {
            round.dice().faces()
        };

        Self {
            dice,
            cup: cup.flags(),
            declared_value: round.declared_value(),
            prev_declared_value: round.prev_declared_value(),
            phase: round.phase(),
            current_player: round.current_player(),
            poker_attempts: round.poker_attempts(),
        }
    }

    /// Whether any face is masked in this view.
    #[must_use]
    pub fn has_masked_dice(&self) -> bool {
        self.dice.contains(&HIDDEN_FACE)
    }
}

/// Gym-style view of an [`Observation`].
///
/// Field names and integer widths follow the dict observation space Python
/// agents expect: `dice` and `cup_mask` are int8, the cup as 0/1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GymObservation {
    pub dice: [i8; NUM_DICE],
    pub cup_mask: [i8; NUM_DICE],
    pub declared_value: u16,
    pub prev_declared_value: u16,
    pub phase: u8,
    pub player_index: u8,
    pub poker_attempt: u8,
}

impl From<&Observation> for GymObservation {
    fn from(obs: &Observation) -> Self {
        // Faces are at most 6, so the narrowing is lossless
        Self {
            dice: obs.dice.map(|face| face as i8),
            cup_mask: obs.cup.map(i8::from),
            declared_value: obs.declared_value,
            prev_declared_value: obs.prev_declared_value,
            phase: obs.phase as u8,
            player_index: obs.current_player.0,
            poker_attempt: obs.poker_attempts,
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) dice", self.current_player, self.phase)?;
        for (&face, &hidden) in self.dice.iter().zip(&self.cup) {
            match (face, hidden) {
                (HIDDEN_FACE, _) => write!(f, " [?]")?,
                (face, true) => write!(f, " [{face}]")?,
                (face, false) => write!(f, " {face}")?,
            }
        }
        write!(
            f,
            " declared {} (prev {})",
            self.declared_value, self.prev_declared_value
        )?;
        if self.phase == Phase::Poker {
            write!(f, " attempt {}", self.poker_attempts)?;
        }
        Ok(())
    }
}
