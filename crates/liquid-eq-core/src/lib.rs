//! Liquid EQ Core - frequency response model for graphic equalizer curves
//!
//! A graphic equalizer's displayed curve is the response of a chain of
//! high-shelf biquads, one per adjacent pair of bands. This crate computes
//! that curve with no dependency on any drawing toolkit.
//!
//! ## Layout
//!
//! - [`filter`]: shelf biquad sections and transfer function evaluation
//! - [`response`]: band layout and the composed response curve
//! - [`state`]: clamped band gain state
//! - [`axis`]: normalized log-frequency and decibel axes
//! - [`presets`]: built-in band curves
//! - [`config`]: YAML configuration
//!
//! ```
//! use liquid_eq_core::{EqualizerState, ResponseComposer, SAMPLE_RATE};
//!
//! let mut state = EqualizerState::default();
//! state.set_band(1, 6.0).unwrap();
//!
//! let mut composer = ResponseComposer::default();
//! let db = composer
//!     .compute_response(state.bands(), &[62.5, 1000.0], SAMPLE_RATE)
//!     .unwrap();
//! assert!(db[0] > db[1]);
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod filter;
pub mod presets;
pub mod response;
pub mod state;
pub mod types;

pub use axis::{DecibelAxis, FrequencyAxis};
pub use config::EqualizerConfig;
pub use error::{EqError, EqResult};
pub use filter::{BiquadCoeffs, FilterDesign, FilterType, Resonance, ShelfBiquad};
pub use response::{compute_response, BandLayout, FrequencySamplePoint, ResponseComposer};
pub use state::EqualizerState;
pub use types::*;
