//! Second-order shelving sections and their transfer functions
//!
//! Coefficients follow the audio-EQ-cookbook designs. Sections are never
//! run over audio here; they only answer "what does this filter do at
//! frequency f", evaluated on the unit circle.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{EqError, EqResult};

/// Filter shape of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Boost/cut everything above the corner
    HighShelf,
}

/// Transition steepness of a section
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resonance {
    /// Quality factor (1/sqrt(2) matches slope 1.0)
    Q(f64),
    /// Shelf slope S (1.0 = steepest monotonic shelf)
    Slope(f64),
}

impl Resonance {
    fn value(self) -> f64 {
        match self {
            Self::Q(v) | Self::Slope(v) => v,
        }
    }
}

/// Everything needed to derive a section's coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDesign {
    pub filter_type: FilterType,
    /// Gain this section contributes (dB); may exceed the band range
    pub gain_db: f64,
    pub frequency_hz: f64,
    pub sample_rate_hz: f64,
    pub resonance: Resonance,
}

impl FilterDesign {
    /// High shelf parameterized by slope, the shape used for band transitions
    pub fn high_shelf(gain_db: f64, frequency_hz: f64, sample_rate_hz: f64, slope: f64) -> Self {
        Self {
            filter_type: FilterType::HighShelf,
            gain_db,
            frequency_hz,
            sample_rate_hz,
            resonance: Resonance::Slope(slope),
        }
    }

    /// Reject inputs the cookbook equations are undefined for
    pub fn validate(&self) -> EqResult<()> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(EqError::invalid(
                "sample_rate_hz",
                format!("must be positive, got {}", self.sample_rate_hz),
            ));
        }
        let nyquist = self.sample_rate_hz / 2.0;
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 || self.frequency_hz >= nyquist {
            return Err(EqError::invalid(
                "frequency_hz",
                format!(
                    "{} Hz is outside (0, {} Hz) for sample rate {} Hz",
                    self.frequency_hz, nyquist, self.sample_rate_hz
                ),
            ));
        }
        if !self.gain_db.is_finite() {
            return Err(EqError::invalid("gain_db", "must be finite"));
        }
        let resonance = self.resonance.value();
        if !resonance.is_finite() || resonance <= 0.0 {
            return Err(EqError::invalid(
                "resonance",
                format!("must be positive, got {}", resonance),
            ));
        }
        Ok(())
    }

    /// Bandwidth term alpha for the given omega
    fn alpha(&self, big_a: f64, sin_w0: f64) -> EqResult<f64> {
        match self.resonance {
            Resonance::Q(q) => Ok(sin_w0 / (2.0 * q)),
            Resonance::Slope(s) => {
                let radicand = (big_a + 1.0 / big_a) * (1.0 / s - 1.0) + 2.0;
                if radicand < 0.0 {
                    return Err(EqError::invalid(
                        "resonance",
                        format!("slope {} too steep for {} dB", s, self.gain_db),
                    ));
                }
                Ok(sin_w0 / 2.0 * radicand.sqrt())
            }
        }
    }
}

/// Normalized biquad coefficients (a0 = 1)
///
/// ```text
/// H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Pass-through coefficients
    pub const fn unity() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }

    /// Derive coefficients from a validated design
    pub fn design(design: &FilterDesign) -> EqResult<Self> {
        design.validate()?;

        let big_a = 10.0_f64.powf(design.gain_db / 40.0);
        let w0 = 2.0 * PI * design.frequency_hz / design.sample_rate_hz;
        let cos_w0 = w0.cos();
        let sin_w0 = w0.sin();
        let alpha = design.alpha(big_a, sin_w0)?;

        let (b0, b1, b2, a0, a1, a2) = match design.filter_type {
            FilterType::HighShelf => {
                let two_sqrt_a_alpha = 2.0 * big_a.sqrt() * alpha;
                (
                    big_a * ((big_a + 1.0) + (big_a - 1.0) * cos_w0 + two_sqrt_a_alpha),
                    -2.0 * big_a * ((big_a - 1.0) + (big_a + 1.0) * cos_w0),
                    big_a * ((big_a + 1.0) + (big_a - 1.0) * cos_w0 - two_sqrt_a_alpha),
                    (big_a + 1.0) - (big_a - 1.0) * cos_w0 + two_sqrt_a_alpha,
                    2.0 * ((big_a - 1.0) - (big_a + 1.0) * cos_w0),
                    (big_a + 1.0) - (big_a - 1.0) * cos_w0 - two_sqrt_a_alpha,
                )
            }
        };

        Ok(Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        })
    }

    /// Evaluate H(z)
    #[inline]
    pub fn transfer(&self, z: Complex64) -> Complex64 {
        let z_inv = z.inv();
        let z_inv_2 = z_inv * z_inv;
        let numerator = self.b0 + z_inv * self.b1 + z_inv_2 * self.b2;
        let denominator = 1.0 + z_inv * self.a1 + z_inv_2 * self.a2;
        numerator / denominator
    }
}

impl Default for BiquadCoeffs {
    fn default() -> Self {
        Self::unity()
    }
}

/// Point on the unit circle for a frequency
#[inline]
pub fn unit_circle_point(frequency_hz: f64, sample_rate_hz: f64) -> Complex64 {
    let omega = 2.0 * PI * frequency_hz / sample_rate_hz;
    Complex64::from_polar(1.0, omega)
}

/// One equalizer section, owned by the composer and refreshed in place
#[derive(Debug, Clone, Default)]
pub struct ShelfBiquad {
    band_index: usize,
    coeffs: BiquadCoeffs,
}

impl ShelfBiquad {
    /// Pass-through section
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute coefficients for `band_index`
    ///
    /// On error the previous coefficients and band index stay in place.
    /// Refreshing twice with the same design gives identical coefficients.
    ///
    /// # Arguments
    /// * `band_index` - Band the section leaves from (section i joins bands i and i+1)
    /// * `design` - Shape, gain, corner, sample rate and resonance
    ///
    /// # Errors
    /// `InvalidParameter` if the corner is not inside (0, Nyquist), the sample
    /// rate or resonance is not positive, the gain is not finite, or the slope
    /// is too steep for the gain.
    ///
    /// # Example
    /// ```
    /// use liquid_eq_core::{FilterDesign, ShelfBiquad};
    ///
    /// let mut section = ShelfBiquad::new();
    /// section
    ///     .refresh_filter(0, &FilterDesign::high_shelf(12.0, 1000.0, 44100.0, 1.0))
    ///     .unwrap();
    /// // A 12 dB shelf is halfway up at its corner
    /// let db = 20.0 * section.magnitude_at(1000.0, 44100.0).log10();
    /// assert!((db - 6.0).abs() < 0.05);
    /// ```
    pub fn refresh_filter(&mut self, band_index: usize, design: &FilterDesign) -> EqResult<()> {
        let coeffs = BiquadCoeffs::design(design)?;
        log::trace!(
            "refresh_filter: band {} {:?} {:.2} dB @ {:.1} Hz -> {:?}",
            band_index,
            design.filter_type,
            design.gain_db,
            design.frequency_hz,
            coeffs
        );
        self.band_index = band_index;
        self.coeffs = coeffs;
        Ok(())
    }

    /// Complex response H(z) of the current coefficients
    #[inline]
    pub fn evaluate_transfer(&self, z: Complex64) -> Complex64 {
        self.coeffs.transfer(z)
    }

    /// Linear magnitude |H(e^jw)| at a frequency
    pub fn magnitude_at(&self, frequency_hz: f64, sample_rate_hz: f64) -> f64 {
        self.evaluate_transfer(unit_circle_point(frequency_hz, sample_rate_hz))
            .norm()
    }

    /// Band this section was last refreshed for
    pub fn band_index(&self) -> usize {
        self.band_index
    }

    pub fn coeffs(&self) -> &BiquadCoeffs {
        &self.coeffs
    }
}
