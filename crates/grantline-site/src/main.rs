//! GrantStudios landing page
//!
//! ## Command line flags
//!
//! - `--config <path>`: read configuration from `path` instead of the default
//!   location
//! - `--write-default-config`: write the default configuration to that path
//!   and exit

use grantline_core::config::load_config;
use grantline_core::content::SiteContent;
use grantline_site::config::{self, CliArgs, SiteConfig};
use grantline_site::ui::{Message, SiteApp};
use iced::Task;

fn main() -> anyhow::Result<()> {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config_path = args.resolved_config_path();

    if args.write_default_config {
        return config::write_default_config(&config_path);
    }

    let site_config: SiteConfig = load_config(&config_path);
    let content = SiteContent::load(site_config.content_path.as_deref());
    let window_size = site_config.window.size();
    log::info!("grantline-site starting up ({})", content.company.name);

    iced::application(
        move || -> (SiteApp, Task<Message>) { SiteApp::new(site_config.clone(), content.clone()) },
        SiteApp::update,
        SiteApp::view,
    )
    .subscription(SiteApp::subscription)
    .theme(SiteApp::theme)
    .title(SiteApp::title)
    .window_size(window_size)
    .run()?;

    log::info!("grantline-site stopped");
    Ok(())
}
