//! Normalized axis mappings for plotting the curve
//!
//! Positions are in [0, 1]. The frequency axis is logarithmic, the decibel
//! axis linear with the maximum at the top (position 0).

/// Logarithmic frequency axis between two bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyAxis {
    pub min_hz: f64,
    pub max_hz: f64,
}

impl FrequencyAxis {
    pub fn new(min_hz: f64, max_hz: f64) -> Self {
        Self { min_hz, max_hz }
    }

    fn log_span(&self) -> (f64, f64) {
        let log_min = self.min_hz.ln();
        (log_min, self.max_hz.ln() - log_min)
    }

    /// Position of a frequency on the axis
    pub fn project(&self, frequency_hz: f64) -> f64 {
        let (log_min, span) = self.log_span();
        (frequency_hz.ln() - log_min) / span
    }

    /// Frequency at a position on the axis
    pub fn unproject(&self, position: f64) -> f64 {
        let (log_min, span) = self.log_span();
        (log_min + position * span).exp()
    }

    /// `count` frequencies evenly spaced in position, both bounds included
    pub fn sample_frequencies(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min_hz],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| self.unproject(i as f64 / last))
                    .collect()
            }
        }
    }
}

/// Upper bound on the levels [`DecibelAxis::grid_lines`] produces
pub const MAX_GRID_LINES: usize = 1024;

/// Linear decibel axis, `max_db` at position 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecibelAxis {
    pub min_db: f64,
    pub max_db: f64,
}

impl DecibelAxis {
    pub fn new(min_db: f64, max_db: f64) -> Self {
        Self { min_db, max_db }
    }

    /// Position of a decibel value (unclamped, curves may overshoot)
    pub fn project(&self, db: f64) -> f64 {
        (self.max_db - db) / (self.max_db - self.min_db)
    }

    /// Decibel value at a position, clamped into the axis range
    pub fn unproject(&self, position: f64) -> f64 {
        (self.max_db - position * (self.max_db - self.min_db)).clamp(self.min_db, self.max_db)
    }

    /// Horizontal grid levels strictly inside the range, `step` dB apart
    ///
    /// Levels are `min_db + k * step` for k = 1, 2, ... while below `max_db`.
    /// Returns nothing for a non-positive step, or when the step is so fine
    /// that more than [`MAX_GRID_LINES`] levels would be needed.
    ///
    /// # Example
    /// ```
    /// use liquid_eq_core::DecibelAxis;
    ///
    /// let axis = DecibelAxis::new(-12.0, 12.0);
    /// assert_eq!(axis.grid_lines(6.0), vec![-6.0, 0.0, 6.0]);
    /// ```
    pub fn grid_lines(&self, step: f64) -> Vec<f64> {
        let divisions = (self.max_db - self.min_db) / step;
        if !(step > 0.0 && divisions.is_finite()) {
            return Vec::new();
        }
        let count = (divisions.ceil() as usize).saturating_sub(1);
        if count > MAX_GRID_LINES {
            log::debug!("grid_lines: step {} dB needs {} lines, skipping grid", step, count);
            return Vec::new();
        }
        (1..=count).map(|k| self.min_db + k as f64 * step).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_axis_roundtrip_points() {
        let axis = FrequencyAxis::new(20.0, 20_000.0);
        assert!(axis.project(20.0).abs() < 1e-12);
        assert!((axis.project(20_000.0) - 1.0).abs() < 1e-12);
        // 632.45 Hz is the geometric middle
        assert!((axis.unproject(0.5) - (20.0_f64 * 20_000.0).sqrt()).abs() < 1e-9);
        assert!((axis.unproject(axis.project(1234.0)) - 1234.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_frequencies_are_log_spaced() {
        let axis = FrequencyAxis::new(20.0, 20_000.0);
        let freqs = axis.sample_frequencies(4);
        let expected = [20.0, 200.0, 2000.0, 20_000.0];
        for (f, e) in freqs.iter().zip(expected) {
            assert!((f - e).abs() / e < 1e-12, "{} vs {}", f, e);
        }
        assert!(axis.sample_frequencies(0).is_empty());
        assert_eq!(axis.sample_frequencies(1), vec![20.0]);
    }

    #[test]
    fn test_decibel_axis_orientation() {
        let axis = DecibelAxis::new(-12.0, 12.0);
        assert_eq!(axis.project(12.0), 0.0);
        assert_eq!(axis.project(-12.0), 1.0);
        assert_eq!(axis.project(0.0), 0.5);
        assert_eq!(axis.unproject(0.25), 6.0);
    }

    #[test]
    fn test_decibel_unproject_clamps() {
        let axis = DecibelAxis::new(-12.0, 12.0);
        assert_eq!(axis.unproject(-0.5), 12.0);
        assert_eq!(axis.unproject(1.5), -12.0);
    }

    #[test]
    fn test_grid_lines() {
        let axis = DecibelAxis::new(-12.0, 12.0);
        assert_eq!(
            axis.grid_lines(3.0),
            vec![-9.0, -6.0, -3.0, 0.0, 3.0, 6.0, 9.0]
        );
        assert!(axis.grid_lines(0.0).is_empty());
        assert!(axis.grid_lines(-3.0).is_empty());
        assert!(axis.grid_lines(f64::NAN).is_empty());
        assert!(axis.grid_lines(30.0).is_empty());
    }

    #[test]
    fn test_grid_lines_uneven_step_stays_inside() {
        let axis = DecibelAxis::new(-12.0, 12.0);
        assert_eq!(axis.grid_lines(5.0), vec![-7.0, -2.0, 3.0, 8.0]);
        assert_eq!(axis.grid_lines(24.0), Vec::<f64>::new());
    }

    #[test]
    fn test_grid_lines_step_below_resolution_terminates() {
        let axis = DecibelAxis::new(-12.0, 12.0);
        // -12.0 + 1e-20 == -12.0, so stepping by accumulation never advances
        assert!(axis.grid_lines(1e-20).is_empty());
        assert!(axis.grid_lines(f64::MIN_POSITIVE).is_empty());
        assert_eq!(axis.grid_lines(24.0 / 1000.0).len(), 999);
    }
}
