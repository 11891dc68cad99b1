//! Neural network integration.
//!
//! Policy networks live outside this crate (typically in Python via PyO3).
//! This module turns observations into the tensors they consume.
//!
//! ## Usage
//!
//! ```rust
//! use bluff_dice::core::RoundConfig;
//! use bluff_dice::games::bluff::BluffRound;
//! use bluff_dice::nn::{FlatObservationEncoder, StateEncoder};
//!
//! let round = BluffRound::new(RoundConfig::new(3).unwrap(), 42);
//! let encoder = FlatObservationEncoder::new(3);
//!
//! let encoded = encoder.encode(&round.observe());
//! assert_eq!(encoded.shape, encoder.output_shape());
//! ```

pub mod encoder;
pub mod tensor;

pub use encoder::{FlatObservationEncoder, StateEncoder};
pub use tensor::EncodedState;
