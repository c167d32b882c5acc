//! Page state, one struct per component that owns a UI flag

pub mod demo;
pub mod faq;
pub mod legal;
pub mod nav;
pub mod reveals;

pub use demo::DemoState;
pub use faq::FaqState;
pub use legal::{LegalModal, LegalState};
pub use nav::{NavState, ScrollAnimation, COMPACT_WIDTH, SMOOTH_SCROLL_DURATION};
pub use reveals::PageReveals;
