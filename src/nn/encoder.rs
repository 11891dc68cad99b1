//! Observation encoding for neural network input.
//!
//! Transforms an [`Observation`] into a flat feature vector. Encoders only
//! ever see what the acting player sees, so nothing hidden can leak into the
//! network input.

use crate::games::bluff::{
    Observation, Phase, ACTION_SPACE_SIZE, MAX_DECLARE_VALUE, MAX_FACE, MAX_POKER_ATTEMPTS,
    NUM_DICE,
};
use crate::nn::tensor::EncodedState;

/// Encodes observations into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the acting player's observation.
    fn encode(&self, obs: &Observation) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output vector.
    fn action_space_size(&self) -> usize;

    fn player_count(&self) -> usize;
}

/// Slots per die: one per face plus one for a masked die.
const DIE_SLOTS: usize = MAX_FACE as usize + 1;

const PHASE_SLOTS: usize = Phase::ALL.len();

/// Flat encoder for the bluffing game.
///
/// Layout, in order:
/// - Dice: one-hot per die over `[hidden, 1, ..., 6]` (3 x 7)
/// - Cup flags (3)
/// - Declared and previous declared value, divided by 1000 (2)
/// - Phase one-hot (4)
/// - Acting player one-hot (`player_count`)
/// - Poker attempts used, divided by 3 (1)
///
/// Total features = `31 + player_count`.
#[derive(Clone, Debug)]
pub struct FlatObservationEncoder {
    player_count: usize,
}

impl FlatObservationEncoder {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self { player_count }
    }

    fn feature_count(&self) -> usize {
        NUM_DICE * DIE_SLOTS + NUM_DICE + 2 + PHASE_SLOTS + self.player_count + 1
    }
}

impl StateEncoder for FlatObservationEncoder {
    fn encode(&self, obs: &Observation) -> EncodedState {
        let mut tensor = vec![0.0f32; self.feature_count()];
        let mut base = 0;

        for (die, &face) in obs.dice.iter().enumerate() {
            // HIDDEN_FACE is 0, so the face doubles as the slot
            let slot = usize::from(face).min(DIE_SLOTS - 1);
            tensor[base + die * DIE_SLOTS + slot] = 1.0;
        }
        base += NUM_DICE * DIE_SLOTS;

        for (die, &hidden) in obs.cup.iter().enumerate() {
            tensor[base + die] = if hidden { 1.0 } else { 0.0 };
        }
        base += NUM_DICE;

        let scale = f32::from(MAX_DECLARE_VALUE);
        tensor[base] = f32::from(obs.declared_value) / scale;
        tensor[base + 1] = f32::from(obs.prev_declared_value) / scale;
        base += 2;

        tensor[base + obs.phase.index()] = 1.0;
        base += PHASE_SLOTS;

        if obs.current_player.index() < self.player_count {
            tensor[base + obs.current_player.index()] = 1.0;
        }
        base += self.player_count;

        tensor[base] = f32::from(obs.poker_attempts) / f32::from(MAX_POKER_ATTEMPTS);

        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.feature_count()]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE as usize
    }

    fn player_count(&self) -> usize {
        self.player_count
    }
}
