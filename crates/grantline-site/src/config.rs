//! Site configuration
//!
//! Stored as YAML; default location: `<config dir>/grantline/site.yaml`.
//!
//! ```yaml
//! transport:
//!   duration_secs: 45.0
//!   tick_interval_ms: 500
//!   step_secs: 0.5
//! reveal:
//!   duration_ms: 800
//!   easing: ease-out-cubic
//! window:
//!   width: 1280
//!   height: 860
//! content_path: /home/me/grantline/content.yaml
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use grantline_core::config::{default_config_path as core_config_path, save_config};
use grantline_core::reveal::RevealConfig;
use grantline_core::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// File name of the site configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "site.yaml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Demo player timing
    pub transport: TransportConfig,
    /// Scroll reveal animation settings
    pub reveal: RevealConfig,
    /// Initial window size
    pub window: WindowConfig,
    /// Optional YAML file replacing the built-in page copy
    pub content_path: Option<PathBuf>,
}

/// Window configuration section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl WindowConfig {
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width.max(320.0), self.height.max(240.0))
    }
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    core_config_path(CONFIG_FILE_NAME)
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    /// `--config <path>`
    pub config_path: Option<PathBuf>,
    /// `--write-default-config`
    pub write_default_config: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().ok_or_else(|| anyhow!("--config expects a path"))?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                "--write-default-config" => parsed.write_default_config = true,
                other => log::warn!("Ignoring unknown argument: {}", other),
            }
        }
        Ok(parsed)
    }

    pub fn resolved_config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(default_config_path)
    }
}

/// Write the default configuration, for users who want a file to edit
pub fn write_default_config(path: &Path) -> Result<()> {
    save_config(&SiteConfig::default(), path)?;
    log::info!("Wrote default configuration to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grantline_core::config::load_config;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.transport.duration_secs, 45.0);
        assert_eq!(config.transport.tick_interval_ms, 500);
        assert_eq!(config.reveal.duration_ms, 800);
        assert_eq!(config.window.width, 1280.0);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: SiteConfig = load_from_str("window:\n  width: 1024\n");
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 860.0);
        assert_eq!(config.transport, TransportConfig::default());
    }

    #[test]
    fn test_write_default_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        write_default_config(&path).unwrap();
        let loaded: SiteConfig = load_config(&path);
        assert_eq!(loaded, SiteConfig::default());
    }

    #[test]
    fn test_cli_args() {
        let args = CliArgs::parse(["--config", "/tmp/site.yaml", "--write-default-config"]).unwrap();
        assert_eq!(args.config_path, Some(PathBuf::from("/tmp/site.yaml")));
        assert!(args.write_default_config);
        assert!(CliArgs::parse(["--config"]).is_err());
        assert_eq!(CliArgs::parse(Vec::<String>::new()).unwrap(), CliArgs::default());
    }

    fn load_from_str(yaml: &str) -> SiteConfig {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, yaml).unwrap();
        load_config(&path)
    }
}
