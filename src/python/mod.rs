//! Python bindings for the dice bluffing engine.
//!
//! Exposes a Gymnasium-style environment so an external training loop can
//! drive rounds from Python.
//!
//! # Quick Start
//!
//! ```python
//! import bluff_dice
//!
//! env = bluff_dice.DiceBluffEnv(num_players=5, seed=42)
//! obs, info = env.reset()
//!
//! action = env.legal_actions()[0]
//! obs, reward, terminated, truncated, info = env.step(action)
//! print(env.describe_action(action), reward)
//! ```

use pyo3::prelude::*;

mod py_env;
mod py_nn;

pub use py_env::*;
pub use py_nn::*;

/// bluff_dice: a dice bluffing game engine for reinforcement learning.
#[pymodule]
fn bluff_dice(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDiceBluffEnv>()?;
    m.add_class::<PyRandomPolicy>()?;

    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyObservationEncoder>()?;

    m.add("ACTION_SPACE_SIZE", crate::games::bluff::ACTION_SPACE_SIZE)?;
    m.add("POKER_VALUE", crate::games::bluff::POKER_VALUE)?;

    Ok(())
}
