//! Grantline Site - the GrantStudios landing page as an iced application
//!
//! - [`ui`]: page sections, component state and message handlers
//! - [`config`]: `site.yaml` and command line flags

pub mod config;
pub mod ui;
