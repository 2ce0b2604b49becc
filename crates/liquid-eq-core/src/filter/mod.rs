//! Filter sections used to model the equalizer curve

mod biquad;

pub use biquad::{
    unit_circle_point, BiquadCoeffs, FilterDesign, FilterType, Resonance, ShelfBiquad,
};
