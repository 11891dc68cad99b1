//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::RoundConfig;
use crate::games::bluff::{legal, Action, BluffRound, GymObservation, Observation, StepInfo};
use crate::nn::{FlatObservationEncoder, StateEncoder};
use crate::policy::{Policy, RandomPolicy};
use crate::rules::Environment;

use super::py_nn::PyEncodedState;

fn observation_dict<'py>(py: Python<'py>, obs: &Observation) -> PyResult<Bound<'py, PyDict>> {
    let gym = GymObservation::from(obs);
    let dict = PyDict::new_bound(py);
    dict.set_item("dice", PyArray1::from_slice_bound(py, &gym.dice))?;
    dict.set_item("cup_mask", PyArray1::from_slice_bound(py, &gym.cup_mask))?;
    dict.set_item("declared_value", gym.declared_value)?;
    dict.set_item("prev_declared_value", gym.prev_declared_value)?;
    dict.set_item("phase", gym.phase)?;
    dict.set_item("player_index", gym.player_index)?;
    dict.set_item("poker_attempt", gym.poker_attempt)?;
    Ok(dict)
}

fn info_dict<'py>(py: Python<'py>, info: &StepInfo) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    if let Some(rejection) = &info.rejection {
        dict.set_item("invalid", rejection.to_string())?;
    }
    if let Some(loser) = info.loser {
        dict.set_item("loser", loser.index())?;
    }
    if let Some(rank) = info.revealed_rank {
        dict.set_item("revealed_rank", rank)?;
    }
    Ok(dict)
}

/// Python wrapper for a bluffing round.
///
/// `step` returns `(obs, reward, terminated, truncated, info)`; `truncated`
/// is always `False` since rounds always end.
#[pyclass(name = "DiceBluffEnv")]
pub struct PyDiceBluffEnv {
    round: BluffRound,
}

impl PyDiceBluffEnv {
    pub(crate) fn observation(&self) -> Observation {
        self.round.observe()
    }
}

#[pymethods]
impl PyDiceBluffEnv {
    /// Create an environment.
    ///
    /// # Arguments
    /// - num_players: Number of seats (3-8)
    /// - seed: RNG seed for deterministic rounds
    #[new]
    #[pyo3(signature = (num_players = 5, seed = 0))]
    fn new(num_players: usize, seed: u64) -> PyResult<Self> {
        let config =
            RoundConfig::new(num_players).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            round: BluffRound::new(config, seed),
        })
    }

    /// Start a new round. Returns `(obs, info)`.
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(
        &mut self,
        py: Python<'py>,
        seed: Option<u64>,
    ) -> PyResult<(Bound<'py, PyDict>, Bound<'py, PyDict>)> {
        let obs = self.round.reset(seed);
        Ok((observation_dict(py, &obs)?, PyDict::new_bound(py)))
    }

    /// Apply an action id. Out-of-range ids are rejected, not raised.
    #[allow(clippy::type_complexity)]
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: i64,
    ) -> PyResult<(Bound<'py, PyDict>, f32, bool, bool, Bound<'py, PyDict>)> {
        let id = u32::try_from(action).unwrap_or(u32::MAX);
        let result = self.round.step(id);
        Ok((
            observation_dict(py, &result.observation)?,
            result.reward,
            result.terminated,
            false,
            info_dict(py, &result.info)?,
        ))
    }

    /// The acting player's observation, without stepping.
    fn observe<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        observation_dict(py, &self.round.observe())
    }

    /// Encode the current observation as a flat tensor.
    fn encode(&self) -> PyEncodedState {
        let encoder = FlatObservationEncoder::new(self.round.num_players());
        PyEncodedState(encoder.encode(&self.round.observe()))
    }

    fn legal_actions(&self) -> Vec<u32> {
        self.round.legal_actions()
    }

    /// Boolean mask over the whole action space.
    fn action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        let mask = if self.round.is_terminated() {
            vec![false; self.round.action_space_size()]
        } else {
            legal::action_mask(&self.round.observe())
        };
        PyArray1::from_vec_bound(py, mask)
    }

    #[staticmethod]
    fn describe_action(action: i64) -> String {
        match u32::try_from(action) {
            Ok(id) => Action::describe(id),
            Err(_) => format!("UNKNOWN ({action})"),
        }
    }

    /// Human-readable view of the current observation.
    fn render(&self) -> String {
        self.round.observe().to_string()
    }

    /// Loser of the last finished round.
    #[getter]
    fn loser(&self) -> usize {
        self.round.loser().index()
    }

    #[getter]
    fn num_players(&self) -> usize {
        self.round.num_players()
    }

    #[getter]
    fn current_player(&self) -> usize {
        self.round.current_player().index()
    }

    #[getter]
    fn terminated(&self) -> bool {
        self.round.is_terminated()
    }

    #[getter]
    fn action_space_size(&self) -> usize {
        self.round.action_space_size()
    }

    fn __repr__(&self) -> String {
        let status = if self.round.is_terminated() {
            "terminated"
        } else {
            "ongoing"
        };
        format!(
            "DiceBluffEnv(players={}, phase={}, current=P{}, status={})",
            self.round.num_players(),
            self.round.phase(),
            self.round.current_player().index(),
            status
        )
    }
}

/// Python wrapper for the scripted random agent.
#[pyclass(name = "RandomPolicy")]
pub struct PyRandomPolicy(RandomPolicy);

#[pymethods]
impl PyRandomPolicy {
    #[new]
    #[pyo3(signature = (seed = 0, doubt_prob = 0.25, poker_prob = 0.05))]
    fn new(seed: u64, doubt_prob: f64, poker_prob: f64) -> Self {
        Self(
            RandomPolicy::new(seed)
                .with_doubt_prob(doubt_prob)
                .with_poker_prob(poker_prob),
        )
    }

    /// Pick an action for the environment's acting player.
    fn act(&mut self, env: &PyDiceBluffEnv) -> u32 {
        self.0.act(&env.observation())
    }

    fn __repr__(&self) -> String {
        let config = self.0.config();
        format!(
            "RandomPolicy(doubt_prob={}, poker_prob={})",
            config.doubt_prob, config.poker_prob
        )
    }
}
