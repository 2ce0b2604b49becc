//! Equalizer configuration
//!
//! - Generic YAML config loading/saving
//! - Default config location
//! - [`EqualizerConfig`]: band layout, gain range and sampling parameters
//!
//! # Usage
//!
//! ```ignore
//! use liquid_eq_core::config::{default_config_path, load_config, EqualizerConfig};
//!
//! let config: EqualizerConfig = load_config(&default_config_path("liquid-eq.yaml"));
//! config.validate()?;
//! ```

mod equalizer;
mod io;
mod paths;

pub use equalizer::EqualizerConfig;
pub use io::{load_config, save_config};
pub use paths::{default_config_dir, default_config_path};
