//! Privacy / terms modal state

use grantline_core::content::{LegalDocument, SiteContent};

/// Which legal document a modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalModal {
    Privacy,
    Terms,
}

impl LegalModal {
    pub fn document(self, content: &SiteContent) -> &LegalDocument {
        match self {
            LegalModal::Privacy => &content.privacy,
            LegalModal::Terms => &content.terms,
        }
    }
}

/// Open legal modal, if any
///
/// While a modal is open the page behind it does not scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalState {
    open: Option<LegalModal>,
}

impl LegalState {
    /// Opening a second modal replaces the first
    pub fn open(&mut self, modal: LegalModal) {
        self.open = Some(modal);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn current(&self) -> Option<LegalModal> {
        self.open
    }

    pub fn blocks_page_scroll(&self) -> bool {
        self.open.is_some()
    }
}
