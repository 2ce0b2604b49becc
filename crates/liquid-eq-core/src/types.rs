//! Common constants and unit conversions for liquid-eq
//!
//! Defaults mirror the classic ten-band liquid equalizer: bands spaced one
//! octave apart starting from 15.625 Hz, gains limited to ±12 dB.

/// Default sampling rate used for response evaluation
pub const SAMPLE_RATE: f64 = 44100.0;

/// Default number of equalizer bands
pub const BANDS_NUM: usize = 10;

/// Lowest gain a band can hold (dB)
pub const MIN_DB: f64 = -12.0;

/// Highest gain a band can hold (dB)
pub const MAX_DB: f64 = 12.0;

/// Frequency the octave progression starts from (Hz)
pub const BASE_FREQUENCY_HZ: f64 = 15.625;

/// Octave offset of a band's labelled center frequency
pub const LABEL_OCTAVE_OFFSET: f64 = 1.0;

/// Octave offset of a section's shelf corner (before doubling)
///
/// Deliberately differs from [`LABEL_OCTAVE_OFFSET`]: the shelf corner sits
/// a little above the labelled tick, which is what gives the curve its shape.
pub const CORNER_OCTAVE_OFFSET: f64 = 0.65;

/// Shelf slope (S) used for every section
pub const SHELF_SLOPE: f64 = 1.0;

/// Number of points sampled per response curve
pub const RESPONSE_POINTS: usize = 128;

/// Gain change applied by one keyboard step (dB)
pub const KEY_STEP_DB: f64 = 0.5;

/// Lowest decibel value a response point can take
pub const RESPONSE_FLOOR_DB: f64 = -240.0;

/// Highest decibel value a response point can take
pub const RESPONSE_CEILING_DB: f64 = 240.0;

/// Convert decibels to a linear amplitude ratio
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert a linear amplitude ratio to decibels
///
/// Zero, negative and NaN ratios map to [`RESPONSE_FLOOR_DB`]; the result is
/// always finite.
#[inline]
pub fn linear_to_db(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        return RESPONSE_FLOOR_DB;
    }
    (20.0 * value.log10()).clamp(RESPONSE_FLOOR_DB, RESPONSE_CEILING_DB)
}
