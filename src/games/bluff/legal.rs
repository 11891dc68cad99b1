//! Legal actions, computed from an observation alone.
//!
//! Agents only ever hold an [`Observation`], so legality is defined on it:
//! a policy can mask its output without any access to the round.

use super::action::{ACTION_SPACE_SIZE, BELIEVE_ID, DECLARE_START, DOUBT_ID, THROW_START};
use super::dice::{MAX_NORMAL_DECLARE, POKER_VALUE};
use super::observation::Observation;
use super::round::Phase;

/// Whether `value` may be declared after `previous`.
///
/// A declaration must beat the previous one and be either a normal rank
/// (`1..=665`) or the poker sentinel.
///
/// ```
/// use bluff_dice::games::bluff::legal::is_legal_declaration;
///
/// assert!(is_legal_declaration(0, 1));
/// assert!(is_legal_declaration(665, 1000));
/// assert!(!is_legal_declaration(500, 500));
/// assert!(!is_legal_declaration(500, 700));
/// ```
#[must_use]
pub fn is_legal_declaration(previous: u16, value: u16) -> bool {
    value > previous && ((1..=MAX_NORMAL_DECLARE).contains(&value) || value == POKER_VALUE)
}

/// Every id the round would accept from the acting player.
#[must_use]
pub fn legal_actions(obs: &Observation) -> Vec<u32> {
    match obs.phase {
        Phase::Believe => vec![BELIEVE_ID, DOUBT_ID],
        Phase::Throw | Phase::Poker => (THROW_START..DECLARE_START).collect(),
        Phase::Declare => {
            let previous = obs.prev_declared_value;
            let normal = (previous.saturating_add(1).max(1)..=MAX_NORMAL_DECLARE)
                .map(|value| DECLARE_START + u32::from(value));
            let mut ids: Vec<u32> = normal.collect();
            if previous < POKER_VALUE {
                ids.push(DECLARE_START + u32::from(POKER_VALUE));
            }
            ids
        }
    }
}

/// Dense boolean mask over the whole action space.
#[must_use]
pub fn action_mask(obs: &Observation) -> Vec<bool> {
    let mut mask = vec![false; ACTION_SPACE_SIZE as usize];
    for id in legal_actions(obs) {
        mask[id as usize] = true;
    }
    mask
}
