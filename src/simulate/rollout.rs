//! Round rollouts.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{PlayerId, PlayerMap};
use crate::games::bluff::{Observation, StepInfo};
use crate::policy::Policy;
use crate::rules::Environment;

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundSummary {
    /// Steps taken, rejected ones included.
    pub steps: usize,

    /// Steps the environment rejected.
    pub invalid_steps: usize,

    /// `None` if the step limit was hit first.
    pub loser: Option<PlayerId>,

    /// Summed rewards per seat.
    pub rewards: PlayerMap<f32>,
}

impl RoundSummary {
    /// Whether the round was cut off by the step limit.
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.loser.is_none()
    }
}

/// Reset `env` and play one round with `policy` acting for every seat.
///
/// Stops after `max_steps` steps even if the round has not ended.
pub fn play_round<E, P>(env: &mut E, policy: &mut P, max_steps: usize) -> RoundSummary
where
    E: Environment<Observation = Observation, Info = StepInfo>,
    P: Policy + ?Sized,
{
    let mut obs = env.reset(None);
    let mut summary = RoundSummary {
        steps: 0,
        invalid_steps: 0,
        loser: None,
        rewards: PlayerMap::with_value(env.num_players(), 0.0),
    };

    while summary.steps < max_steps {
        let actor = env.current_player();
        let action = policy.act(&obs);
        let result = env.step(action);

        summary.steps += 1;
        summary.rewards[actor] += result.reward;
        if result.info.rejection.is_some() {
            summary.invalid_steps += 1;
        }
        obs = result.observation;

        if result.terminated {
            summary.loser = result.info.loser;
            debug!(steps = summary.steps, loser = ?summary.loser, "round finished");
            return summary;
        }
    }

    warn!(max_steps, "round truncated");
    summary
}

/// Play `rounds` consecutive rounds. Each round is opened by the previous loser.
pub fn play_rounds<E, P>(
    env: &mut E,
    policy: &mut P,
    rounds: usize,
    max_steps: usize,
) -> Vec<RoundSummary>
where
    E: Environment<Observation = Observation, Info = StepInfo>,
    P: Policy + ?Sized,
{
    (0..rounds)
        .map(|_| play_round(env, policy, max_steps))
        .collect()
}

/// Count losses per seat.
#[must_use]
pub fn tally_losses(summaries: &[RoundSummary], player_count: usize) -> PlayerMap<u32> {
    let mut losses = PlayerMap::with_value(player_count, 0);
    for loser in summaries.iter().filter_map(|s| s.loser) {
        if loser.index() < player_count {
            losses[loser] += 1;
        }
    }
    losses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundConfig;
    use crate::games::bluff::{BluffRound, BELIEVE_ID, DECLARE_START, DOUBT_ID};
    use crate::policy::RandomPolicy;

    /// Declares 300, then doubts.
    struct Doubter;

    impl Policy for Doubter {
        fn act(&mut self, obs: &Observation) -> u32 {
            if obs.declared_value == 0 {
                DECLARE_START + 300
            } else {
                DOUBT_ID
            }
        }
    }

    /// Always believes, which is illegal outside BELIEVE.
    struct Believer;

    impl Policy for Believer {
        fn act(&mut self, _obs: &Observation) -> u32 {
            BELIEVE_ID
        }
    }

    #[test]
    fn test_two_step_round() {
        let mut env = BluffRound::new(RoundConfig::new(3).unwrap(), 4);
        let summary = play_round(&mut env, &mut Doubter, 100);

        assert_eq!(summary.steps, 2);
        assert_eq!(summary.invalid_steps, 0);
        assert!(!summary.truncated());

        // Player 1 doubted player 0
        let loser = summary.loser.unwrap();
        assert!(loser == PlayerId::new(0) || loser == PlayerId::new(1));
        assert_eq!(summary.rewards[PlayerId::new(0)], 0.0);
        assert_eq!(summary.rewards[PlayerId::new(2)], 0.0);
    }

    #[test]
    fn test_truncation() {
        let mut env = BluffRound::new(RoundConfig::new(3).unwrap(), 4);
        let summary = play_round(&mut env, &mut Believer, 10);

        assert_eq!(summary.steps, 10);
        assert_eq!(summary.invalid_steps, 10);
        assert!(summary.truncated());
        assert!((summary.rewards[PlayerId::new(0)] + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_random_rounds_finish() {
        let mut env = BluffRound::new(RoundConfig::new(5).unwrap(), 11);
        let mut policy = RandomPolicy::new(12);
        let summaries = play_rounds(&mut env, &mut policy, 50, 1000);

        assert_eq!(summaries.len(), 50);
        assert!(summaries.iter().all(|s| !s.truncated()));
        assert!(summaries.iter().all(|s| s.invalid_steps == 0));

        let losses = tally_losses(&summaries, 5);
        assert_eq!(losses.iter().map(|(_, &n)| n).sum::<u32>(), 50);
    }
}
