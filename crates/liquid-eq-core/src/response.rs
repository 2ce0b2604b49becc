//! Composite frequency response of the band chain
//!
//! The curve is not a sum of per-band bells. Each adjacent pair of band
//! gains is joined by a high shelf that steps from one level to the next,
//! and the chain as a whole is offset by the first band's gain:
//!
//! ```text
//! |H(f)| = 10^(g[0]/20) * prod_i |Shelf(g[i+1] - g[i], corner(i))(f)|
//! ```
//!
//! N gain control points therefore produce N-1 shelf sections.

use serde::{Deserialize, Serialize};

use crate::axis::FrequencyAxis;
use crate::error::{EqError, EqResult};
use crate::filter::{unit_circle_point, FilterDesign, ShelfBiquad};
use crate::types::{
    db_to_linear, linear_to_db, BASE_FREQUENCY_HZ, CORNER_OCTAVE_OFFSET, LABEL_OCTAVE_OFFSET,
    SHELF_SLOPE,
};

/// Octave placement of bands and shelf corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandLayout {
    pub base_frequency_hz: f64,
    pub label_octave_offset: f64,
    pub corner_octave_offset: f64,
    pub shelf_slope: f64,
}

impl Default for BandLayout {
    fn default() -> Self {
        Self {
            base_frequency_hz: BASE_FREQUENCY_HZ,
            label_octave_offset: LABEL_OCTAVE_OFFSET,
            corner_octave_offset: CORNER_OCTAVE_OFFSET,
            shelf_slope: SHELF_SLOPE,
        }
    }
}

impl BandLayout {
    /// Labelled center frequency of a band (31.25 Hz, 62.5 Hz, ... by default)
    pub fn center_frequency(&self, index: usize) -> f64 {
        self.base_frequency_hz * 2.0_f64.powf(index as f64 + self.label_octave_offset)
    }

    /// Corner frequency of the shelf leaving band `index`
    pub fn corner_frequency(&self, index: usize) -> f64 {
        self.base_frequency_hz * 2.0_f64.powf(index as f64 + self.corner_octave_offset) * 2.0
    }
}

/// One sampled point of a response curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySamplePoint {
    pub frequency_hz: f64,
    pub gain_db: f64,
}

/// Builds the shelf chain for a gain vector and samples its response
///
/// Sections are cached between calls and refreshed from the gains every time,
/// so the output only ever depends on the arguments.
#[derive(Debug, Clone, Default)]
pub struct ResponseComposer {
    layout: BandLayout,
    sections: Vec<ShelfBiquad>,
}

impl ResponseComposer {
    pub fn new(layout: BandLayout) -> Self {
        Self {
            layout,
            sections: Vec::new(),
        }
    }

    pub fn layout(&self) -> &BandLayout {
        &self.layout
    }

    /// Sections built by the last successful [`Self::refresh`]
    pub fn sections(&self) -> &[ShelfBiquad] {
        &self.sections
    }

    /// Rebuild every section from the gain vector
    ///
    /// The cached sections are replaced only if every section designs cleanly.
    pub fn refresh(&mut self, gains: &[f64], sample_rate_hz: f64) -> EqResult<()> {
        // Checked here as well as per section: a single gain builds no sections
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            return Err(EqError::invalid(
                "sample_rate_hz",
                format!("must be positive, got {}", sample_rate_hz),
            ));
        }
        if gains.is_empty() {
            return Err(EqError::invalid("gains", "at least one band gain is required"));
        }
        if let Some(index) = gains.iter().position(|g| !g.is_finite()) {
            return Err(EqError::invalid(
                "gains",
                format!("gain of band {} is not finite", index),
            ));
        }

        let section_count = gains.len() - 1;
        let mut sections = vec![ShelfBiquad::new(); section_count];
        for (i, section) in sections.iter_mut().enumerate() {
            let design = FilterDesign::high_shelf(
                gains[i + 1] - gains[i],
                self.layout.corner_frequency(i),
                sample_rate_hz,
                self.layout.shelf_slope,
            );
            section.refresh_filter(i, &design)?;
        }
        self.sections = sections;
        Ok(())
    }

    /// Decibel response at each sample frequency, in input order
    ///
    /// Sections are rebuilt from `gains` first, so the result depends only on
    /// the arguments and the layout.
    ///
    /// # Arguments
    /// * `gains` - Band gains in dB, lowest band first (N gains give N-1 shelves)
    /// * `sample_frequencies` - Frequencies to evaluate, in Hz
    /// * `sample_rate_hz` - Sample rate the shelves are designed for
    ///
    /// # Errors
    /// `InvalidParameter` for empty or non-finite gains, non-finite
    /// frequencies, a non-positive sample rate, or a shelf corner at or
    /// above Nyquist.
    ///
    /// # Example
    /// ```
    /// use liquid_eq_core::{ResponseComposer, SAMPLE_RATE};
    ///
    /// let mut composer = ResponseComposer::default();
    /// let db = composer
    ///     .compute_response(&[0.0, 6.0, 0.0, 0.0], &[1.0, 62.5, 1000.0], SAMPLE_RATE)
    ///     .unwrap();
    /// assert!(db[0].abs() < 0.01);
    /// assert!(db[1] > 3.0 && db[1] < 6.0);
    /// assert!(db[2].abs() < 0.01);
    /// ```
    pub fn compute_response(
        &mut self,
        gains: &[f64],
        sample_frequencies: &[f64],
        sample_rate_hz: f64,
    ) -> EqResult<Vec<f64>> {
        if let Some(f) = sample_frequencies.iter().find(|f| !f.is_finite()) {
            return Err(EqError::invalid(
                "sample_frequencies",
                format!("{} is not a finite frequency", f),
            ));
        }
        self.refresh(gains, sample_rate_hz)?;

        log::debug!(
            "compute_response: {} sections, {} points at {} Hz",
            self.sections.len(),
            sample_frequencies.len(),
            sample_rate_hz
        );

        let gain = db_to_linear(gains[0]);
        Ok(sample_frequencies
            .iter()
            .map(|&frequency| {
                let z = unit_circle_point(frequency, sample_rate_hz);
                let magnitude = self
                    .sections
                    .iter()
                    .fold(gain, |acc, section| acc * section.evaluate_transfer(z).norm());
                linear_to_db(magnitude)
            })
            .collect())
    }

    /// Response sampled at `points` log-spaced frequencies across `axis`
    pub fn compute_curve(
        &mut self,
        gains: &[f64],
        axis: &FrequencyAxis,
        points: usize,
        sample_rate_hz: f64,
    ) -> EqResult<Vec<FrequencySamplePoint>> {
        let frequencies = axis.sample_frequencies(points);
        let decibels = self.compute_response(gains, &frequencies, sample_rate_hz)?;
        Ok(frequencies
            .into_iter()
            .zip(decibels)
            .map(|(frequency_hz, gain_db)| FrequencySamplePoint {
                frequency_hz,
                gain_db,
            })
            .collect())
    }
}

/// One-shot response with the default band layout
///
/// Same as [`ResponseComposer::compute_response`] on a fresh composer.
///
/// # Example
/// ```
/// use liquid_eq_core::{compute_response, SAMPLE_RATE};
///
/// let db = compute_response(&[-4.0; 10], &[20.0, 15_000.0], SAMPLE_RATE).unwrap();
/// assert!(db.iter().all(|d| (d + 4.0).abs() < 1e-9));
/// ```
pub fn compute_response(
    gains: &[f64],
    sample_frequencies: &[f64],
    sample_rate_hz: f64,
) -> EqResult<Vec<f64>> {
    ResponseComposer::default().compute_response(gains, sample_frequencies, sample_rate_hz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BANDS_NUM, SAMPLE_RATE};

    #[test]
    fn test_center_frequencies_increase() {
        let layout = BandLayout::default();
        assert!((layout.center_frequency(0) - 31.25).abs() < 1e-12);
        assert!((layout.center_frequency(9) - 16_000.0).abs() < 1e-9);
        for i in 0..BANDS_NUM - 1 {
            assert!(layout.center_frequency(i + 1) > layout.center_frequency(i));
            assert!(layout.corner_frequency(i + 1) > layout.corner_frequency(i));
        }
    }

    #[test]
    fn test_corner_offset_from_label() {
        let layout = BandLayout::default();
        // 15.625 * 2^0.65 * 2
        assert!((layout.corner_frequency(0) - 49.0365).abs() < 1e-3);
        // Corner of band i sits between label i+0.65 and i+1.65 octaves
        assert!(layout.corner_frequency(3) > layout.center_frequency(3));
        assert!(layout.corner_frequency(3) < layout.center_frequency(4));
    }

    #[test]
    fn test_flat_gains_give_flat_curve() {
        let freqs: Vec<f64> = (0..64).map(|i| 20.0 * 1.115_f64.powi(i)).collect();
        let response = compute_response(&[0.0; BANDS_NUM], &freqs, SAMPLE_RATE).unwrap();
        assert_eq!(response.len(), freqs.len());
        for db in response {
            assert!(db.abs() < 1e-9);
        }
    }

    #[test]
    fn test_equal_gains_offset_whole_curve() {
        let response =
            compute_response(&[-4.0; BANDS_NUM], &[20.0, 1000.0, 15_000.0], SAMPLE_RATE).unwrap();
        for db in response {
            assert!((db + 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_band_boost_example() {
        let gains = [0.0, 6.0, 0.0, 0.0];
        let freqs = [1.0, 62.5, 1000.0, 20_000.0];
        let mut composer = ResponseComposer::default();
        let response = composer.compute_response(&gains, &freqs, SAMPLE_RATE).unwrap();

        assert_eq!(composer.sections().len(), 3);
        assert!(response[0].abs() < 0.01, "low end {}", response[0]);
        assert!(response[1] > 3.0, "boost region {}", response[1]);
        assert!(response[1] < 6.0);
        assert!(response[2].abs() < 0.01, "1 kHz {}", response[2]);
        assert!(response[3].abs() < 0.01, "20 kHz {}", response[3]);
    }

    #[test]
    fn test_first_band_sets_low_end_level() {
        let mut gains = [0.0; BANDS_NUM];
        gains[0] = 12.0;
        let response = compute_response(&gains, &[20.0, 1000.0], SAMPLE_RATE).unwrap();
        assert!(response[0] > 11.0);
        assert!(response[1].abs() < 0.01);
    }

    #[test]
    fn test_last_band_lifts_top_end() {
        let mut gains = [0.0; BANDS_NUM];
        gains[BANDS_NUM - 1] = 12.0;
        let response = compute_response(&gains, &[20.0, 1000.0, 20_000.0], SAMPLE_RATE).unwrap();
        assert!(response[0].abs() < 0.01);
        assert!(response[1].abs() < 0.01);
        assert!((response[2] - 12.0).abs() < 0.1);
    }

    #[test]
    fn test_preserves_input_order() {
        let gains = [0.0, 6.0, 0.0, 0.0];
        let forward = compute_response(&gains, &[62.5, 1000.0], SAMPLE_RATE).unwrap();
        let reverse = compute_response(&gains, &[1000.0, 62.5], SAMPLE_RATE).unwrap();
        assert_eq!(forward[0], reverse[1]);
        assert_eq!(forward[1], reverse[0]);
    }

    #[test]
    fn test_single_gain_has_no_sections() {
        let mut composer = ResponseComposer::default();
        let response = composer
            .compute_response(&[3.0], &[100.0, 10_000.0], SAMPLE_RATE)
            .unwrap();
        assert!(composer.sections().is_empty());
        assert!(response.iter().all(|db| (db - 3.0).abs() < 1e-9));
    }

    #[test]
    fn test_sections_shrink_with_gain_count() {
        let mut composer = ResponseComposer::default();
        composer.refresh(&[0.0; BANDS_NUM], SAMPLE_RATE).unwrap();
        assert_eq!(composer.sections().len(), BANDS_NUM - 1);
        composer.refresh(&[0.0, 1.0], SAMPLE_RATE).unwrap();
        assert_eq!(composer.sections().len(), 1);
        assert_eq!(composer.sections()[0].band_index(), 0);
    }

    #[test]
    fn test_rejects_empty_and_non_finite_input() {
        assert!(compute_response(&[], &[100.0], SAMPLE_RATE).is_err());
        assert!(compute_response(&[0.0, f64::NAN], &[100.0], SAMPLE_RATE).is_err());
        assert!(compute_response(&[0.0, 1.0], &[f64::INFINITY], SAMPLE_RATE).is_err());
    }

    #[test]
    fn test_rejects_corner_above_nyquist() {
        // The 10th section's corner (~25.1 kHz) lies above 22.05 kHz
        let err = compute_response(&[0.0; BANDS_NUM + 1], &[100.0], SAMPLE_RATE).unwrap_err();
        assert!(matches!(err, EqError::InvalidParameter { name: "frequency_hz", .. }));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_sections() {
        let mut composer = ResponseComposer::default();
        composer.refresh(&[0.0, 6.0, 0.0], SAMPLE_RATE).unwrap();
        assert!(composer.refresh(&[0.0; BANDS_NUM + 1], SAMPLE_RATE).is_err());
        assert_eq!(composer.sections().len(), 2);
    }

    #[test]
    fn test_compute_curve_spans_axis() {
        let axis = FrequencyAxis::new(20.0, 20_000.0);
        let mut composer = ResponseComposer::default();
        let curve = composer
            .compute_curve(&[0.0; BANDS_NUM], &axis, 128, SAMPLE_RATE)
            .unwrap();
        assert_eq!(curve.len(), 128);
        assert!((curve[0].frequency_hz - 20.0).abs() < 1e-9);
        assert!((curve[127].frequency_hz - 20_000.0).abs() < 1e-6);
        assert!(curve.iter().all(|p| p.gain_db.abs() < 1e-9));
    }

    #[test]
    fn test_rejects_bad_sample_rate_without_sections() {
        // One gain builds no sections, so nothing downstream would catch these
        for rate in [0.0, -44100.0, f64::NAN, f64::INFINITY] {
            let err = compute_response(&[3.0], &[100.0], rate).unwrap_err();
            assert!(
                matches!(err, EqError::InvalidParameter { name: "sample_rate_hz", .. }),
                "rate {} gave {:?}",
                rate,
                err
            );
        }
        assert!(compute_response(&[0.0; BANDS_NUM], &[100.0], 0.0).is_err());
    }

    #[test]
    fn test_bad_sample_rate_keeps_previous_sections() {
        let mut composer = ResponseComposer::default();
        composer.refresh(&[0.0, 6.0, 0.0], SAMPLE_RATE).unwrap();
        assert!(composer.refresh(&[1.0], 0.0).is_err());
        assert_eq!(composer.sections().len(), 2);
    }
}
