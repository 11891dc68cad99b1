//! The round state machine.
//!
//! ```text
//! DECLARE --declare--> BELIEVE --believe--> THROW --throw--> DECLARE
//!                         |    \
//!                       doubt   believe a poker declaration
//!                         |       \
//!                      (over)    POKER --up to 3 attempts--> (over)
//! ```
//!
//! `BluffRound` is the only thing that mutates round state. Codec and ranking
//! are pure functions it calls. A rejected step changes nothing, not even the
//! position of the random stream.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, PlayerId, RoundConfig};
use crate::rules::{Environment, StepResult};

use super::action::{Action, ThrowAction, ACTION_SPACE_SIZE};
use super::dice::{Cup, Dice, NUM_DICE, POKER_VALUE};
use super::error::Rejection;
use super::legal;
use super::observation::Observation;

/// Attempts the roller gets to produce a declared triple.
pub const MAX_POKER_ATTEMPTS: u8 = 3;

/// Round phase. Each phase accepts exactly one kind of action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Declare = 0,
    Believe = 1,
    Throw = 2,
    Poker = 3,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Declare, Phase::Believe, Phase::Throw, Phase::Poker];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Declare => "DECLARE",
            Phase::Believe => "BELIEVE",
            Phase::Throw => "THROW",
            Phase::Poker => "POKER",
        };
        f.write_str(name)
    }
}

/// Diagnostics attached to every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    /// Why the step was refused, if it was.
    pub rejection: Option<Rejection>,

    /// Set when the step ended the round.
    pub loser: Option<PlayerId>,

    /// Rank of the dice after a doubt or a poker attempt.
    pub revealed_rank: Option<u16>,
}

/// Result of an accepted action.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    reward: f32,
    loser: Option<PlayerId>,
    revealed_rank: Option<u16>,
}

impl Transition {
    fn reward(reward: f32) -> Self {
        Self {
            reward,
            loser: None,
            revealed_rank: None,
        }
    }

    fn revealed(mut self, rank: u16) -> Self {
        self.revealed_rank = Some(rank);
        self
    }

    fn ends_with(mut self, loser: PlayerId) -> Self {
        self.loser = Some(loser);
        self
    }
}

/// One round of the dice bluffing game.
///
/// ## Example
///
/// ```
/// use bluff_dice::core::RoundConfig;
/// use bluff_dice::games::bluff::{BluffRound, Phase};
/// use bluff_dice::rules::Environment;
///
/// let mut round = BluffRound::new(RoundConfig::new(4).unwrap(), 42);
/// let obs = round.reset(Some(7));
/// assert_eq!(obs.phase, Phase::Declare);
///
/// // Declare 321: id 66 + 321
/// let result = round.step(66 + 321);
/// assert!(result.info.rejection.is_none());
/// assert_eq!(result.observation.phase, Phase::Believe);
/// ```
#[derive(Clone, Debug)]
pub struct BluffRound {
    config: RoundConfig,
    rng: GameRng,
    phase: Phase,
    current_player: PlayerId,
    loser: PlayerId,
    dice: Dice,
    cup: Cup,
    declared_value: u16,
    prev_declared_value: u16,
    poker_attempts: u8,
    terminated: bool,
}

impl BluffRound {
    /// Create a round and deal the first throw. Player 0 starts.
    #[must_use]
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let dice = Dice::thrown(&mut rng);
        Self {
            config,
            rng,
            phase: Phase::Declare,
            current_player: PlayerId::default(),
            loser: PlayerId::default(),
            dice,
            cup: Cup::covered(),
            declared_value: 0,
            prev_declared_value: 0,
            poker_attempts: 0,
            terminated: false,
        }
    }

    /// Start a fresh round. The previous loser opens it.
    fn deal(&mut self) {
        self.current_player = self.loser;
        self.dice = Dice::thrown(&mut self.rng);
        self.cup = Cup::covered();
        self.declared_value = 0;
        self.prev_declared_value = 0;
        self.phase = Phase::Declare;
        self.poker_attempts = 0;
        self.terminated = false;
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Loser of the last finished round. Opens the next one.
    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.loser
    }

    #[must_use]
    pub fn declared_value(&self) -> u16 {
        self.declared_value
    }

    #[must_use]
    pub fn prev_declared_value(&self) -> u16 {
        self.prev_declared_value
    }

    #[must_use]
    pub fn poker_attempts(&self) -> u8 {
        self.poker_attempts
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub(crate) fn dice(&self) -> Dice {
        self.dice
    }

    pub(crate) fn cup(&self) -> Cup {
        self.cup
    }

    /// The acting player's view of the round.
    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation::project(self)
    }

    // === Transitions ===

    fn apply(&mut self, id: u32) -> Result<Transition, Rejection> {
        if self.terminated {
            return Err(Rejection::RoundOver);
        }

        let action = Action::decode(id)?;
        match (self.phase, action) {
            (Phase::Declare, Action::Declare(value)) => self.declare(value),
            (Phase::Believe, Action::Believe) => Ok(self.believe()),
            (Phase::Believe, Action::Doubt) => Ok(self.doubt()),
            (Phase::Throw, Action::Throw(throw)) => Ok(self.throw(throw)),
            (Phase::Poker, Action::Throw(throw)) => Ok(self.poker(throw)),
            (phase, _) => Err(Rejection::InvalidForPhase { action: id, phase }),
        }
    }

    fn declare(&mut self, value: u16) -> Result<Transition, Rejection> {
        if !legal::is_legal_declaration(self.prev_declared_value, value) {
            return Err(Rejection::InvalidDeclaration {
                value,
                previous: self.prev_declared_value,
            });
        }

        self.declared_value = value;
        self.prev_declared_value = value;
        self.current_player = self.current_player.next(self.num_players());
        self.phase = Phase::Believe;
        Ok(Transition::reward(self.config.rewards.neutral))
    }

    fn believe(&mut self) -> Transition {
        if self.declared_value == POKER_VALUE {
            self.phase = Phase::Poker;
            self.poker_attempts = 0;
            Transition::reward(self.config.rewards.neutral)
        } else {
            self.phase = Phase::Throw;
            Transition::reward(self.config.rewards.survive)
        }
    }

    fn doubt(&mut self) -> Transition {
        self.cup = Cup::lifted();
        let actual = self.dice.rank();
        let rewards = self.config.rewards;

        let (loser, reward) = if actual < self.declared_value {
            // Bluff caught: the declarer sits right before the doubter
            (self.current_player.previous(self.num_players()), rewards.catch_bluff)
        } else {
            (self.current_player, rewards.lose_round)
        };

        self.finish(loser);
        Transition::reward(reward).revealed(actual).ends_with(loser)
    }

    fn throw(&mut self, throw: ThrowAction) -> Transition {
        let throw = throw.with_cup_constraint();
        self.dice.roll(throw.reroll_mask(), &mut self.rng);
        self.cup = Cup::from_flags(throw.hide_mask());
        self.phase = Phase::Declare;
        Transition::reward(self.config.rewards.neutral)
    }

    fn poker(&mut self, throw: ThrowAction) -> Transition {
        self.poker_attempts += 1;

        // The first attempt always throws everything
        let mask = if self.poker_attempts == 1 {
            [true; NUM_DICE]
        } else {
            throw.reroll_mask()
        };

        self.dice.roll(mask, &mut self.rng);
        if mask.contains(&true) {
            // Rolled dice go under the cup, kept dice stay outside it
            self.cup = Cup::from_flags(mask);
        }

        let actual = self.dice.rank();
        let rewards = self.config.rewards;

        if actual == POKER_VALUE {
            let loser = self.current_player.previous(self.num_players());
            self.finish(loser);
            return Transition::reward(rewards.catch_bluff)
                .revealed(actual)
                .ends_with(loser);
        }

        if self.poker_attempts >= MAX_POKER_ATTEMPTS {
            let loser = self.current_player;
            self.finish(loser);
            return Transition::reward(rewards.lose_round)
                .revealed(actual)
                .ends_with(loser);
        }

        Transition::reward(rewards.neutral).revealed(actual)
    }

    fn finish(&mut self, loser: PlayerId) {
        self.loser = loser;
        self.terminated = true;
        debug!(%loser, "round over");
    }
}

impl Environment for BluffRound {
    type Observation = Observation;
    type Info = StepInfo;

    fn reset(&mut self, seed: Option<u64>) -> Observation {
        if let Some(seed) = seed {
            self.rng = GameRng::new(seed);
        }
        self.deal();
        debug!(starter = %self.current_player, "new round");
        self.observe()
    }

    fn step(&mut self, action: u32) -> StepResult<Observation, StepInfo> {
        let player = self.current_player;
        let phase = self.phase;

        match self.apply(action) {
            Ok(transition) => {
                debug!(
                    %player,
                    %phase,
                    action = %Action::describe(action),
                    reward = transition.reward,
                    "accepted action"
                );
                StepResult {
                    observation: self.observe(),
                    reward: transition.reward,
                    terminated: self.terminated,
                    info: StepInfo {
                        rejection: None,
                        loser: transition.loser,
                        revealed_rank: transition.revealed_rank,
                    },
                }
            }
            Err(rejection) => {
                debug!(%player, %phase, action, %rejection, "rejected action");
                StepResult {
                    observation: self.observe(),
                    reward: self.config.rewards.invalid,
                    terminated: self.terminated,
                    info: StepInfo {
                        rejection: Some(rejection),
                        ..StepInfo::default()
                    },
                }
            }
        }
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE as usize
    }

    fn legal_actions(&self) -> Vec<u32> {
        if self.terminated {
            return Vec::new();
        }
        legal::legal_actions(&self.observe())
    }

    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn num_players(&self) -> usize {
        self.config.num_players()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRngState, RewardConfig};
    use crate::games::bluff::action::DieAction::{self, KeepHide, KeepShow, RollHide, RollShow};
    use crate::games::bluff::action::{BELIEVE_ID, DECLARE_START, DOUBT_ID, THROW_START};
    use crate::games::bluff::dice::MAX_NORMAL_DECLARE;

    fn round(players: usize, seed: u64) -> BluffRound {
        BluffRound::new(RoundConfig::new(players).unwrap(), seed)
    }

    fn declare_id(value: u16) -> u32 {
        DECLARE_START + u32::from(value)
    }

    fn throw_id(dice: [DieAction; 3]) -> u32 {
        Action::Throw(ThrowAction::new(dice)).encode()
    }

    /// Everything a rejected step must leave alone.
    #[derive(Debug, PartialEq)]
    struct Fingerprint {
        phase: Phase,
        current_player: PlayerId,
        loser: PlayerId,
        dice: Dice,
        cup: Cup,
        declared_value: u16,
        prev_declared_value: u16,
        poker_attempts: u8,
        terminated: bool,
        rng: GameRngState,
    }

    fn fingerprint(round: &BluffRound) -> Fingerprint {
        Fingerprint {
            phase: round.phase,
            current_player: round.current_player,
            loser: round.loser,
            dice: round.dice,
            cup: round.cup,
            declared_value: round.declared_value,
            prev_declared_value: round.prev_declared_value,
            poker_attempts: round.poker_attempts,
            terminated: round.terminated,
            rng: round.rng.state(),
        }
    }

    /// Put a round into BELIEVE after `declarer` declared `value`.
    fn believe_phase(players: usize, declarer: u8, value: u16, dice: [u8; 3]) -> BluffRound {
        let mut r = round(players, 1);
        r.dice = Dice::new(dice);
        r.current_player = PlayerId::new(declarer).next(players);
        r.declared_value = value;
        r.prev_declared_value = value;
        r.phase = Phase::Believe;
        r
    }

    #[test]
    fn test_reset_deals_covered_dice() {
        let mut r = round(3, 42);
        let obs = r.reset(Some(9));

        assert_eq!(obs.phase, Phase::Declare);
        assert_eq!(obs.cup, [true; 3]);
        assert_eq!(obs.declared_value, 0);
        assert_eq!(obs.prev_declared_value, 0);
        assert_eq!(obs.poker_attempts, 0);
        assert_eq!(obs.current_player, PlayerId::new(0));
        assert!(obs.dice.iter().all(|f| (1..=6).contains(f)));
    }

    #[test]
    fn test_first_declaration_advances_player() {
        let mut r = round(4, 42);
        r.reset(Some(3));
        r.dice = Dice::new([3, 3, 3]);

        let result = r.step(declare_id(1));

        assert!(result.info.rejection.is_none());
        assert_eq!(result.reward, 0.0);
        assert!(!result.terminated);
        assert_eq!(r.phase(), Phase::Believe);
        assert_eq!(r.current_player(), PlayerId::new(1));
        assert_eq!(r.declared_value(), 1);
        assert_eq!(r.prev_declared_value(), 1);
    }

    #[test]
    fn test_neutral_reward_is_configurable() {
        let rewards = RewardConfig::default().with_neutral(0.25);
        let mut r = BluffRound::new(RoundConfig::new(3).unwrap().with_rewards(rewards), 42);

        // declare, throw
        assert_eq!(r.step(declare_id(300)).reward, 0.25);
        assert_eq!(r.step(BELIEVE_ID).reward, rewards.survive);
        assert_eq!(r.step(throw_id([KeepShow, KeepShow, KeepShow])).reward, 0.25);

        // believing a poker declaration
        r.step(declare_id(POKER_VALUE));
        assert_eq!(r.step(BELIEVE_ID).reward, 0.25);
        assert_eq!(r.phase(), Phase::Poker);
    }

    #[test]
    fn test_round_from_json_config() {
        let config: RoundConfig = serde_json::from_str(r#"{"num_players":3}"#).unwrap();
        let mut r = BluffRound::new(config, 5);

        let result = r.step(declare_id(100));
        assert!(result.info.rejection.is_none());
        assert_eq!(r.current_player(), PlayerId::new(1));
        assert!(serde_json::from_str::<RoundConfig>(r#"{"num_players":0}"#).is_err());
    }

    #[test]
    fn test_declaration_must_increase() {
        let mut r = round(3, 42);
        r.step(declare_id(400));
        r.step(BELIEVE_ID);
        r.step(throw_id([KeepShow, KeepShow, KeepShow]));
        assert_eq!(r.phase(), Phase::Declare);

        let before = fingerprint(&r);
        for value in [0, 399, 400] {
            let result = r.step(declare_id(value));
            assert_eq!(
                result.info.rejection,
                Some(Rejection::InvalidDeclaration { value, previous: 400 })
            );
            assert_eq!(result.reward, -0.5);
            assert_eq!(fingerprint(&r), before);
        }

        assert!(r.step(declare_id(401)).info.rejection.is_none());
    }

    #[test]
    fn test_declaration_range() {
        let mut r = round(3, 42);
        let before = fingerprint(&r);

        for value in [MAX_NORMAL_DECLARE + 1, 999] {
            let result = r.step(declare_id(value));
            assert!(matches!(
                result.info.rejection,
                Some(Rejection::InvalidDeclaration { .. })
            ));
            assert_eq!(fingerprint(&r), before);
        }

        assert!(r.step(declare_id(POKER_VALUE)).info.rejection.is_none());
        assert_eq!(r.declared_value(), POKER_VALUE);
    }

    #[test]
    fn test_believe_normal_declaration_goes_to_throw() {
        let mut r = believe_phase(3, 0, 500, [4, 2, 1]);
        let result = r.step(BELIEVE_ID);

        assert_eq!(result.reward, 0.05);
        assert!(!result.terminated);
        assert_eq!(r.phase(), Phase::Throw);
        assert_eq!(r.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_believe_poker_declaration_goes_to_poker() {
        let mut r = believe_phase(4, 2, POKER_VALUE, [4, 2, 1]);
        r.poker_attempts = 2;

        let result = r.step(BELIEVE_ID);

        assert_eq!(result.reward, 0.0);
        assert!(!result.terminated);
        assert_eq!(r.phase(), Phase::Poker);
        assert_eq!(r.poker_attempts(), 0);
    }

    #[test]
    fn test_doubt_catches_bluff() {
        let mut r = believe_phase(4, 2, 500, [1, 4, 2]);
        let result = r.step(DOUBT_ID);

        assert!(result.terminated);
        assert_eq!(result.reward, 0.05);
        assert_eq!(result.info.revealed_rank, Some(421));
        assert_eq!(result.info.loser, Some(PlayerId::new(2)));
        assert_eq!(r.loser(), PlayerId::new(2));
        assert_eq!(r.cup(), Cup::lifted());
    }

    #[test]
    fn test_doubt_of_truth_loses() {
        let mut r = believe_phase(3, 2, 421, [1, 4, 2]);
        let result = r.step(DOUBT_ID);

        // Equal rank is not a bluff
        assert!(result.terminated);
        assert_eq!(result.reward, -1.0);
        assert_eq!(result.info.loser, Some(PlayerId::new(0)));
        assert_eq!(r.loser(), PlayerId::new(0));
    }

    #[test]
    fn test_doubt_wraps_declarer_to_last_seat() {
        let mut r = believe_phase(5, 4, 600, [1, 2, 3]);
        assert_eq!(r.current_player(), PlayerId::new(0));

        let result = r.step(DOUBT_ID);
        assert_eq!(result.info.loser, Some(PlayerId::new(4)));
    }

    #[test]
    fn test_loser_starts_next_round() {
        let mut r = believe_phase(4, 2, 500, [1, 4, 2]);
        r.step(DOUBT_ID);

        let obs = r.reset(None);
        assert_eq!(obs.current_player, PlayerId::new(2));
        assert!(!r.is_terminated());
        assert_eq!(obs.phase, Phase::Declare);
    }

    #[test]
    fn test_throw_applies_cup_constraint() {
        let mut r = round(3, 8);
        r.phase = Phase::Throw;
        r.dice = Dice::new([6, 5, 4]);
        r.cup = Cup::covered();

        let mut reference = r.rng.clone();
        let expected_first = reference.roll_die();

        let result = r.step(throw_id([RollHide, KeepHide, KeepShow]));

        assert!(result.info.rejection.is_none());
        assert!(!result.terminated);
        assert_eq!(r.phase(), Phase::Declare);
        assert_eq!(r.dice().faces(), [expected_first, 5, 4]);
        // Die 2 was forced out of the cup
        assert_eq!(r.cup().flags(), [true, false, false]);
        assert_eq!(r.rng.state(), reference.state());
    }

    #[test]
    fn test_throw_without_cup_keeps_hidden_dice() {
        let mut r = round(3, 8);
        r.phase = Phase::Throw;
        r.dice = Dice::new([6, 5, 4]);

        r.step(throw_id([KeepHide, RollShow, KeepShow]));

        assert_eq!(r.cup().flags(), [true, false, false]);
        assert_eq!(r.dice().faces()[0], 6);
        assert_eq!(r.dice().faces()[2], 4);
    }

    #[test]
    fn test_out_of_range_throw_rejected() {
        let mut r = round(4, 8);
        r.phase = Phase::Throw;
        let before = fingerprint(&r);

        let result = r.step(200);

        assert_eq!(
            result.info.rejection,
            Some(Rejection::InvalidForPhase { action: 200, phase: Phase::Throw })
        );
        assert_eq!(result.reward, -0.5);
        assert!(!result.terminated);
        assert_eq!(fingerprint(&r), before);
    }

    #[test]
    fn test_wrong_kind_rejected_in_every_phase() {
        let cases = [
            (Phase::Declare, BELIEVE_ID),
            (Phase::Declare, THROW_START),
            (Phase::Believe, THROW_START + 10),
            (Phase::Believe, declare_id(500)),
            (Phase::Throw, DOUBT_ID),
            (Phase::Poker, BELIEVE_ID),
            (Phase::Poker, declare_id(POKER_VALUE)),
        ];

        for (phase, action) in cases {
            let mut r = round(3, 21);
            r.phase = phase;
            let before = fingerprint(&r);

            let result = r.step(action);
            assert_eq!(
                result.info.rejection,
                Some(Rejection::InvalidForPhase { action, phase })
            );
            assert_eq!(fingerprint(&r), before);
        }
    }

    #[test]
    fn test_malformed_action_rejected() {
        let mut r = round(3, 21);
        let before = fingerprint(&r);

        let result = r.step(ACTION_SPACE_SIZE + 5);
        assert!(matches!(result.info.rejection, Some(Rejection::Malformed(_))));
        assert_eq!(result.reward, -0.5);
        assert_eq!(fingerprint(&r), before);
    }

    #[test]
    fn test_step_after_round_over() {
        let mut r = believe_phase(3, 0, 500, [1, 4, 2]);
        r.step(DOUBT_ID);
        let before = fingerprint(&r);

        let result = r.step(declare_id(300));
        assert_eq!(result.info.rejection, Some(Rejection::RoundOver));
        assert!(result.terminated);
        assert_eq!(fingerprint(&r), before);
        assert!(r.legal_actions().is_empty());
    }

    fn poker_phase(players: usize, roller: u8, seed: u64) -> BluffRound {
        let mut r = round(players, seed);
        r.phase = Phase::Poker;
        r.current_player = PlayerId::new(roller);
        r.declared_value = POKER_VALUE;
        r.prev_declared_value = POKER_VALUE;
        r.poker_attempts = 0;
        r
    }

    #[test]
    fn test_first_poker_attempt_rolls_everything() {
        let mut r = poker_phase(3, 1, 77);
        r.dice = Dice::new([1, 2, 3]);

        let mut reference = r.rng.clone();
        let expected = [reference.roll_die(), reference.roll_die(), reference.roll_die()];

        // Asks to keep everything; ignored on the first attempt
        let result = r.step(throw_id([KeepShow, KeepShow, KeepShow]));

        assert!(result.info.rejection.is_none());
        assert_eq!(r.poker_attempts(), 1);
        assert_eq!(r.dice().faces(), expected);
        assert_eq!(r.cup(), Cup::covered());
        assert_eq!(r.rng.state(), reference.state());
    }

    #[test]
    fn test_invalid_poker_action_does_not_use_attempt() {
        let mut r = poker_phase(3, 1, 77);
        let before = fingerprint(&r);

        let result = r.step(declare_id(10));
        assert!(result.info.rejection.is_some());
        assert_eq!(r.poker_attempts(), 0);
        assert_eq!(fingerprint(&r), before);
    }

    #[test]
    fn test_poker_ends_within_three_attempts() {
        for seed in 0..200 {
            let mut r = poker_phase(4, 3, seed);
            let mut attempts = 0;
            loop {
                let result = r.step(throw_id([KeepShow, KeepShow, KeepShow]));
                assert!(result.info.rejection.is_none());
                attempts += 1;
                if result.terminated {
                    break;
                }
                assert!(attempts < MAX_POKER_ATTEMPTS);
            }
            assert!(attempts <= MAX_POKER_ATTEMPTS);
        }
    }

    #[test]
    fn test_poker_outcomes() {
        let mut successes = 0;
        let mut failures = 0;

        for seed in 0..300 {
            let mut r = poker_phase(4, 0, seed);
            r.poker_attempts = 2;
            r.dice = Dice::new([4, 4, 1]);

            let result = r.step(throw_id([KeepHide, KeepHide, RollShow]));
            assert!(result.terminated);
            assert_eq!(r.dice().faces()[..2], [4, 4]);
            // Kept dice come out of the cup, the rolled one goes in
            assert_eq!(r.cup().flags(), [false, false, true]);

            if r.dice().is_poker() {
                successes += 1;
                assert_eq!(result.reward, 0.05);
                // The declarer sits before the roller
                assert_eq!(result.info.loser, Some(PlayerId::new(3)));
            } else {
                failures += 1;
                assert_eq!(result.reward, -1.0);
                assert_eq!(result.info.loser, Some(PlayerId::new(0)));
            }
        }

        assert!(successes > 0);
        assert!(failures > 0);
    }

    #[test]
    fn test_poker_keep_all_leaves_cup_alone() {
        let mut r = poker_phase(3, 0, 4);
        r.poker_attempts = 1;
        r.dice = Dice::new([2, 5, 6]);
        r.cup = Cup::covered();

        let result = r.step(throw_id([KeepHide, KeepShow, KeepHide]));
        assert!(!result.terminated);
        assert_eq!(r.poker_attempts(), 2);
        assert_eq!(r.dice().faces(), [2, 5, 6]);
        assert_eq!(r.cup(), Cup::covered());
        assert_eq!(result.info.revealed_rank, Some(652));
    }

    #[test]
    fn test_same_seed_same_round() {
        let script = [
            declare_id(300),
            BELIEVE_ID,
            throw_id([RollHide, RollShow, KeepHide]),
            declare_id(450),
            BELIEVE_ID,
            throw_id([RollShow, RollShow, RollShow]),
            declare_id(POKER_VALUE),
            BELIEVE_ID,
            throw_id([RollHide, RollHide, RollHide]),
            throw_id([RollHide, KeepShow, RollHide]),
            throw_id([RollHide, RollHide, KeepShow]),
        ];

        let mut a = round(5, 99);
        let mut b = round(5, 1234);
        a.reset(Some(2024));
        b.reset(Some(2024));

        for &id in &script {
            let ra = a.step(id);
            let rb = b.step(id);
            assert_eq!(ra.observation, rb.observation);
            assert_eq!(ra.reward, rb.reward);
            assert_eq!(ra.terminated, rb.terminated);
            assert_eq!(fingerprint(&a), fingerprint(&b));
            if ra.terminated {
                break;
            }
        }
    }
}
