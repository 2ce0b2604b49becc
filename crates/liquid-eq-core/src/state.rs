//! Band gain state owned by the equalizer UI
//!
//! All mutators clamp into the configured decibel range instead of rejecting
//! out-of-range values. Only band indices and NaN are errors.

use crate::config::EqualizerConfig;
use crate::error::{EqError, EqResult};
use crate::presets;
use crate::types::{BANDS_NUM, MAX_DB, MIN_DB};

/// Current gain of every band plus the last edit
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizerState {
    levels: Vec<f64>,
    min_db: f64,
    max_db: f64,
    /// Band touched by the most recent edit
    selected_band: Option<usize>,
    /// Whether the most recent edit came from direct user interaction
    manual: bool,
}

impl Default for EqualizerState {
    fn default() -> Self {
        Self {
            levels: vec![0.0; BANDS_NUM],
            min_db: MIN_DB,
            max_db: MAX_DB,
            selected_band: None,
            manual: false,
        }
    }
}

impl EqualizerState {
    /// Create a state with every band at 0 dB
    ///
    /// If 0 dB lies outside the range, bands start at the nearest bound.
    ///
    /// # Arguments
    /// * `band_count` - Number of gain control points
    /// * `min_db` - Lowest allowed gain
    /// * `max_db` - Highest allowed gain, strictly above `min_db`
    ///
    /// # Errors
    /// `InvalidParameter` if a bound is not finite or `min_db >= max_db`.
    ///
    /// # Example
    /// ```
    /// use liquid_eq_core::EqualizerState;
    ///
    /// let state = EqualizerState::new(5, 3.0, 9.0).unwrap();
    /// assert_eq!(state.bands(), &[3.0; 5]);
    /// assert!(EqualizerState::new(5, 9.0, 3.0).is_err());
    /// ```
    pub fn new(band_count: usize, min_db: f64, max_db: f64) -> EqResult<Self> {
        if !(min_db.is_finite() && max_db.is_finite()) {
            return Err(EqError::invalid(
                "gain_range",
                format!("bounds must be finite, got {} to {}", min_db, max_db),
            ));
        }
        if min_db >= max_db {
            return Err(EqError::invalid(
                "gain_range",
                format!("min {} dB must be below max {} dB", min_db, max_db),
            ));
        }
        Ok(Self {
            levels: vec![0.0_f64.clamp(min_db, max_db); band_count],
            min_db,
            max_db,
            selected_band: None,
            manual: false,
        })
    }

    /// Build from a config, applying its preset if one is named
    pub fn from_config(config: &EqualizerConfig) -> EqResult<Self> {
        config.validate()?;
        let mut state = Self::new(config.band_count, config.min_db, config.max_db)?;
        if let Some(name) = &config.preset {
            state.apply_preset(name)?;
        }
        Ok(state)
    }

    pub fn band_count(&self) -> usize {
        self.levels.len()
    }

    /// Allowed gain range (min, max) in dB
    pub fn range(&self) -> (f64, f64) {
        (self.min_db, self.max_db)
    }

    pub fn selected_band(&self) -> Option<usize> {
        self.selected_band
    }

    pub fn is_manual(&self) -> bool {
        self.manual
    }

    fn check_index(&self, index: usize) -> EqResult<()> {
        if index >= self.levels.len() {
            return Err(EqError::BandIndexOutOfRange {
                index,
                count: self.levels.len(),
            });
        }
        Ok(())
    }

    fn clamp(&self, value: f64) -> EqResult<f64> {
        if value.is_nan() {
            return Err(EqError::invalid("gain_db", "NaN is not a gain"));
        }
        let clamped = value.clamp(self.min_db, self.max_db);
        if clamped != value {
            log::debug!("clamped gain {} dB to {} dB", value, clamped);
        }
        Ok(clamped)
    }

    /// Gain of one band
    pub fn band(&self, index: usize) -> EqResult<f64> {
        self.check_index(index)?;
        Ok(self.levels[index])
    }

    /// Gains of all bands, lowest first
    pub fn bands(&self) -> &[f64] {
        &self.levels
    }

    /// Owned copy of all gains
    pub fn get_bands(&self) -> Vec<f64> {
        self.levels.clone()
    }

    /// Set one band, returning the stored gain
    ///
    /// Out-of-range values are clamped, not rejected. The band becomes the
    /// selected band and the edit is marked non-manual.
    ///
    /// # Arguments
    /// * `index` - Band index, lowest band is 0
    /// * `value` - Requested gain in dB (±inf clamps to the bound)
    ///
    /// # Errors
    /// `BandIndexOutOfRange` for a bad index, `InvalidParameter` for NaN.
    ///
    /// # Example
    /// ```
    /// use liquid_eq_core::EqualizerState;
    ///
    /// let mut state = EqualizerState::default();
    /// assert_eq!(state.set_band(2, 40.0).unwrap(), 12.0);
    /// assert!(state.set_band(10, 1.0).is_err());
    /// ```
    pub fn set_band(&mut self, index: usize, value: f64) -> EqResult<f64> {
        self.write_band(index, value, false)
    }

    /// Step one band by `delta` dB as a manual edit (keyboard arrows)
    pub fn nudge_band(&mut self, index: usize, delta: f64) -> EqResult<f64> {
        let current = self.band(index)?;
        self.write_band(index, current + delta, true)
    }

    fn write_band(&mut self, index: usize, value: f64, manual: bool) -> EqResult<f64> {
        self.check_index(index)?;
        let value = self.clamp(value)?;
        self.levels[index] = value;
        self.selected_band = Some(index);
        self.manual = manual;
        Ok(value)
    }

    /// Set bands from the lowest up; extra values are ignored
    ///
    /// Returns how many bands were written. Nothing is written if any of the
    /// used values is NaN.
    pub fn set_bands(&mut self, values: &[f64]) -> EqResult<usize> {
        let count = values.len().min(self.levels.len());
        if values.len() > self.levels.len() {
            log::warn!(
                "set_bands: {} values for {} bands, ignoring the rest",
                values.len(),
                self.levels.len()
            );
        }
        let clamped = values[..count]
            .iter()
            .map(|&v| self.clamp(v))
            .collect::<EqResult<Vec<_>>>()?;
        self.levels[..count].copy_from_slice(&clamped);
        self.manual = false;
        Ok(count)
    }

    /// Load a built-in preset
    pub fn apply_preset(&mut self, name: &str) -> EqResult<()> {
        let gains = presets::preset(name).ok_or_else(|| EqError::UnknownPreset(name.to_string()))?;
        let written = self.set_bands(gains)?;
        log::info!("applied preset '{}' to {} bands", name, written);
        Ok(())
    }

    /// Every band back to 0 dB, selection cleared
    pub fn reset(&mut self) {
        let zero = 0.0_f64.clamp(self.min_db, self.max_db);
        self.levels.iter_mut().for_each(|level| *level = zero);
        self.selected_band = None;
        self.manual = false;
    }
}
