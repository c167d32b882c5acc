//! Configuration I/O shared by the Grantline binaries
//!
//! Every configuration type is YAML with `#[serde(default)]`, so partial files
//! are fine and a missing file simply means "use defaults".
//!
//! ```ignore
//! use grantline_core::config::{default_config_path, load_config, save_config};
//!
//! let path = default_config_path("site.yaml");
//! let config: SiteConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;

pub use io::{load_config, read_yaml, save_config};
pub use paths::{config_dir, default_config_path, APP_DIR_NAME};
