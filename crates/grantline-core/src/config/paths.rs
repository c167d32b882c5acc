//! Standard locations for Grantline configuration files

use std::path::PathBuf;

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "grantline";

/// Get the Grantline config directory
///
/// Returns: `~/.config/grantline` on Linux, the platform equivalent elsewhere,
/// falling back to `./grantline`.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(APP_DIR_NAME)
}

/// Get the default path of a config file (e.g. "site.yaml")
pub fn default_config_path(filename: &str) -> PathBuf {
    config_dir().join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_name() {
        assert!(config_dir().ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_config_path_includes_filename() {
        let path = default_config_path("site.yaml");
        assert!(path.ends_with("grantline/site.yaml"));
    }
}
