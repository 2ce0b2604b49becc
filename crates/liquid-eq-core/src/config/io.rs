//! YAML config loading and saving for any serde config type

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Read and parse a YAML file; `Ok(None)` when it doesn't exist
fn read_config<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(Some(config))
}

/// Load configuration from a YAML file
///
/// A missing file yields `T::default()`. An unreadable or malformed file is
/// logged as a warning and also yields `T::default()`, so a broken config
/// never prevents startup.
///
/// # Type Parameters
/// * `T` - Configuration type implementing `DeserializeOwned` and `Default`
///
/// # Arguments
/// * `path` - Path to the YAML configuration file
///
/// # Example
///
/// ```ignore
/// let config: EqualizerConfig = load_config(&default_config_path("liquid-eq.yaml"));
/// ```
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match read_config(path) {
        Ok(Some(config)) => {
            log::info!("load_config: loaded {:?}", path);
            config
        }
        Ok(None) => {
            log::info!("load_config: {:?} not found, using defaults", path);
            T::default()
        }
        Err(e) => {
            log::warn!("load_config: {:#}, using defaults", e);
            T::default()
        }
    }
}

/// Write configuration as YAML, creating parent directories as needed
///
/// # Arguments
/// * `config` - Configuration to serialize
/// * `path` - Destination file, overwritten if it exists
///
/// # Example
///
/// ```ignore
/// save_config(&EqualizerConfig::default(), Path::new("liquid-eq.yaml"))?;
/// ```
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EqualizerConfig;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let config: EqualizerConfig = load_config(Path::new("/nonexistent/liquid-eq.yaml"));
        assert_eq!(config, EqualizerConfig::default());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("liquid-eq.yaml");

        let config = EqualizerConfig {
            sample_rate_hz: 48000.0,
            preset: Some("jazz".to_string()),
            ..Default::default()
        };
        save_config(&config, &path).unwrap();

        let loaded: EqualizerConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "band_count: [not, a, number]\n").unwrap();

        let loaded: EqualizerConfig = load_config(&path);
        assert_eq!(loaded, EqualizerConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.yaml");
        std::fs::write(&path, "max_db: 6.0\nmin_db: -6.0\n").unwrap();

        let loaded: EqualizerConfig = load_config(&path);
        assert_eq!(loaded.max_db, 6.0);
        assert_eq!(loaded.min_db, -6.0);
        assert_eq!(loaded.band_count, EqualizerConfig::default().band_count);
    }
}
