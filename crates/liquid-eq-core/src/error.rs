//! Error types for equalizer state and filter design

use thiserror::Error;

/// Errors that can occur while editing bands or designing filters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EqError {
    /// Band index does not address an existing band
    #[error("Band index {index} out of range (band count {count})")]
    BandIndexOutOfRange { index: usize, count: usize },

    /// A numeric input is outside the range the filter math is defined for
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// No built-in preset with this name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EqError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for equalizer operations
pub type EqResult<T> = Result<T, EqError>;
