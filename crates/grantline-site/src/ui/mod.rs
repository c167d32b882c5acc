//! User interface of the landing page

pub mod app;
pub mod handlers;
pub mod message;
pub mod reveal;
pub mod sections;
pub mod state;

pub use app::SiteApp;
pub use message::Message;
