//! Page sections and their anchors

use serde::{Deserialize, Serialize};

/// Sections of the landing page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Problem,
    Demo,
    Features,
    Pricing,
    Faq,
    Footer,
}

impl SectionId {
    /// Number of sections on the page
    pub const COUNT: usize = 7;

    /// All sections in page order
    pub const ALL: [SectionId; Self::COUNT] = [
        SectionId::Hero,
        SectionId::Problem,
        SectionId::Demo,
        SectionId::Features,
        SectionId::Pricing,
        SectionId::Faq,
        SectionId::Footer,
    ];

    /// Anchor name without the leading `#`
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Problem => "problem",
            SectionId::Demo => "demo",
            SectionId::Features => "features",
            SectionId::Pricing => "pricing",
            SectionId::Faq => "faq",
            SectionId::Footer => "footer",
        }
    }

    /// Resolve an in-page href such as `#demo`
    ///
    /// Returns `None` for external links, bare `#`, and unknown anchors.
    pub fn from_href(href: &str) -> Option<SectionId> {
        let anchor = href.strip_prefix('#')?;
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }

    /// Position in page order
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_href() {
        assert_eq!(SectionId::from_href("#demo"), Some(SectionId::Demo));
        assert_eq!(SectionId::from_href("#faq"), Some(SectionId::Faq));
        assert_eq!(SectionId::from_href("#"), None);
        assert_eq!(SectionId::from_href("#contact"), None);
        assert_eq!(SectionId::from_href("demo"), None);
        assert_eq!(SectionId::from_href("https://example.com/#demo"), None);
    }

    #[test]
    fn test_page_order() {
        for (idx, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), idx);
        }
    }
}
