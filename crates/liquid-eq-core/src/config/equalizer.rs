//! Equalizer configuration
//!
//! Band count, gain range, band placement and sampling parameters. Every
//! field has a default, so a config file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::axis::{DecibelAxis, FrequencyAxis};
use crate::error::{EqError, EqResult};
use crate::presets;
use crate::response::BandLayout;
use crate::types::{
    BANDS_NUM, BASE_FREQUENCY_HZ, CORNER_OCTAVE_OFFSET, LABEL_OCTAVE_OFFSET, MAX_DB, MIN_DB,
    RESPONSE_POINTS, SAMPLE_RATE, SHELF_SLOPE,
};

/// Equalizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualizerConfig {
    /// Number of band gain control points
    /// Default: 10
    pub band_count: usize,

    /// Sampling rate the filter sections are designed for (Hz)
    /// Default: 44100
    pub sample_rate_hz: f64,

    /// Lowest band gain (dB)
    /// Default: -12.0
    pub min_db: f64,

    /// Highest band gain (dB)
    /// Default: 12.0
    pub max_db: f64,

    /// Start of the octave progression (Hz)
    /// Default: 15.625
    pub base_frequency_hz: f64,

    /// Octave offset of the labelled band centers
    /// Default: 1.0 (31.25 Hz, 62.5 Hz, ... 16 kHz)
    pub label_octave_offset: f64,

    /// Octave offset of the shelf corners, before doubling
    /// Default: 0.65
    pub corner_octave_offset: f64,

    /// Shelf slope S of every section
    /// Default: 1.0
    pub shelf_slope: f64,

    /// Points sampled per response curve
    /// Default: 128
    pub response_points: usize,

    /// Lowest frequency on the plotted axis (Hz)
    /// Default: 20
    pub axis_min_hz: f64,

    /// Highest frequency on the plotted axis (Hz)
    /// Default: 20000
    pub axis_max_hz: f64,

    /// Built-in preset applied at startup
    /// Default: none (all bands at 0 dB)
    pub preset: Option<String>,
}

impl Default for EqualizerConfig {
    fn default() -> Self {
        Self {
            band_count: BANDS_NUM,
            sample_rate_hz: SAMPLE_RATE,
            min_db: MIN_DB,
            max_db: MAX_DB,
            base_frequency_hz: BASE_FREQUENCY_HZ,
            label_octave_offset: LABEL_OCTAVE_OFFSET,
            corner_octave_offset: CORNER_OCTAVE_OFFSET,
            shelf_slope: SHELF_SLOPE,
            response_points: RESPONSE_POINTS,
            axis_min_hz: 20.0,
            axis_max_hz: 20000.0,
            preset: None,
        }
    }
}

fn positive(name: &str, value: f64) -> EqResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EqError::ConfigError(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

impl EqualizerConfig {
    /// Check that every value is usable by the response model
    pub fn validate(&self) -> EqResult<()> {
        if self.band_count == 0 {
            return Err(EqError::ConfigError("band_count must be at least 1".into()));
        }
        positive("sample_rate_hz", self.sample_rate_hz)?;
        positive("base_frequency_hz", self.base_frequency_hz)?;
        positive("shelf_slope", self.shelf_slope)?;
        positive("axis_min_hz", self.axis_min_hz)?;

        if !(self.min_db.is_finite() && self.max_db.is_finite() && self.min_db < self.max_db) {
            return Err(EqError::ConfigError(format!(
                "gain range [{}, {}] dB is empty or not finite",
                self.min_db, self.max_db
            )));
        }
        if !(self.label_octave_offset.is_finite() && self.corner_octave_offset.is_finite()) {
            return Err(EqError::ConfigError("octave offsets must be finite".into()));
        }
        if self.response_points < 2 {
            return Err(EqError::ConfigError(
                "response_points must be at least 2".into(),
            ));
        }
        if !(self.axis_max_hz.is_finite() && self.axis_max_hz > self.axis_min_hz) {
            return Err(EqError::ConfigError(format!(
                "frequency axis [{}, {}] Hz is empty",
                self.axis_min_hz, self.axis_max_hz
            )));
        }

        // N bands make N-1 shelves; the highest corner must stay below Nyquist
        if self.band_count >= 2 {
            let highest = self.layout().corner_frequency(self.band_count - 2);
            let nyquist = self.sample_rate_hz / 2.0;
            if highest >= nyquist {
                return Err(EqError::ConfigError(format!(
                    "{} bands put the top shelf at {:.0} Hz, above Nyquist ({:.0} Hz)",
                    self.band_count, highest, nyquist
                )));
            }
        }

        if let Some(name) = &self.preset {
            if presets::preset(name).is_none() {
                return Err(EqError::UnknownPreset(name.clone()));
            }
        }
        Ok(())
    }

    pub fn layout(&self) -> BandLayout {
        BandLayout {
            base_frequency_hz: self.base_frequency_hz,
            label_octave_offset: self.label_octave_offset,
            corner_octave_offset: self.corner_octave_offset,
            shelf_slope: self.shelf_slope,
        }
    }

    pub fn frequency_axis(&self) -> FrequencyAxis {
        FrequencyAxis::new(self.axis_min_hz, self.axis_max_hz)
    }

    pub fn decibel_axis(&self) -> DecibelAxis {
        DecibelAxis::new(self.min_db, self.max_db)
    }
}
