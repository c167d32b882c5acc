//! YAML load/save helpers

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Read and parse a YAML file, failing on any I/O or parse error
///
/// Use this when the caller wants to report the failure itself (content
/// overrides, explicit `--config` paths).
pub fn read_yaml<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse {:?}", path))
}

/// Load configuration from a YAML file
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults; the site should still come up.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return T::default();
    }

    match read_yaml(path) {
        Ok(config) => {
            log::info!("load_config: Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            log::warn!("load_config: {:#}, using defaults", e);
            T::default()
        }
    }
}

/// Serialize `value` and write it to `path`, creating missing directories
fn write_yaml<T>(value: &T, path: &Path) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let yaml = serde_yaml::to_string(value).with_context(|| format!("Failed to serialize {:?}", path))?;
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {:?}", path))
}

/// Save configuration to a YAML file
///
/// Unlike loading, saving reports every failure to the caller.
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    write_yaml(config, path)?;
    log::info!("save_config: Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportConfig;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let config: TransportConfig = load_config(Path::new("/nonexistent/grantline/site.yaml"));
        assert_eq!(config, TransportConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transport.yaml");

        let config = TransportConfig {
            duration_secs: 30.0,
            tick_interval_ms: 250,
            step_secs: 0.25,
        };
        save_config(&config, &path).unwrap();

        let loaded: TransportConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_yaml_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "duration_secs: [not, a, number").unwrap();

        let loaded: TransportConfig = load_config(&path);
        assert_eq!(loaded, TransportConfig::default());
        assert!(read_yaml::<TransportConfig>(&path).is_err());
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = save_config(&TransportConfig::default(), &blocker.join("site.yaml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create"));
    }
}
