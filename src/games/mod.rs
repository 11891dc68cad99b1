//! Concrete games built on the engine core.

pub mod bluff;
