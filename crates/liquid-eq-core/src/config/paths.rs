//! Standard locations for liquid-eq configuration files

use std::path::PathBuf;

/// Directory holding liquid-eq configuration
///
/// Returns: `<platform config dir>/liquid-eq`, or `./liquid-eq` when the
/// platform has no config directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("liquid-eq")
}

/// Default path of a config file inside [`default_config_dir`]
pub fn default_config_path(filename: &str) -> PathBuf {
    default_config_dir().join(filename)
}
