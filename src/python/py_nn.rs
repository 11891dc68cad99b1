//! Neural network type bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::nn::{EncodedState, FlatObservationEncoder, StateEncoder};

use super::py_env::PyDiceBluffEnv;

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    #[getter]
    fn tensor(&self) -> Vec<f32> {
        self.0.tensor.clone()
    }

    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Python wrapper for the flat observation encoder.
#[pyclass(name = "ObservationEncoder")]
pub struct PyObservationEncoder(FlatObservationEncoder);

#[pymethods]
impl PyObservationEncoder {
    #[new]
    fn new(player_count: usize) -> Self {
        Self(FlatObservationEncoder::new(player_count))
    }

    /// Encode the acting player's view of `env`.
    fn encode(&self, env: &PyDiceBluffEnv) -> PyEncodedState {
        PyEncodedState(self.0.encode(&env.observation()))
    }

    #[getter]
    fn output_shape(&self) -> Vec<usize> {
        self.0.output_shape()
    }

    #[getter]
    fn action_space_size(&self) -> usize {
        self.0.action_space_size()
    }

    fn __repr__(&self) -> String {
        format!("ObservationEncoder(player_count={})", self.0.player_count())
    }
}
