//! Message handlers organized by page component
//!
//! Each sub-module provides handler methods on `SiteApp`.

pub mod faq;
pub mod legal;
pub mod navigation;
pub mod page;
pub mod player;

pub use navigation::scroll_page_to;
