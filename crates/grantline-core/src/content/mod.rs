//! Page content for the Grantline landing page
//!
//! All copy shown on the page lives here as typed data. The built-in
//! GrantStudios content is the `Default`; a YAML file can override any
//! top-level block (see [`SiteContent::load`]).

mod builtin;
mod section;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub use section::SectionId;

/// Errors found while validating page content
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// A navigation link points at an anchor that has no section
    #[error("Nav link '{name}' points at unknown anchor '{href}'")]
    UnknownAnchor { name: String, href: String },

    /// A list the page layout depends on is empty
    #[error("Content block '{0}' must not be empty")]
    Empty(&'static str),
}

/// Company and contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Company {
    /// Jurisdiction used in the terms: the part of the location after the
    /// first comma, or "Ghana" when there is none
    pub fn jurisdiction(&self) -> &str {
        self.location
            .split(',')
            .nth(1)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .unwrap_or("Ghana")
    }

    /// Substitute `{company}`, `{email}`, `{phone}`, `{location}` and
    /// `{jurisdiction}` placeholders
    pub fn render(&self, text: &str) -> String {
        text.replace("{company}", &self.name)
            .replace("{email}", &self.email)
            .replace("{phone}", &self.phone)
            .replace("{location}", &self.location)
            .replace("{jurisdiction}", self.jurisdiction())
    }

    /// Footer copyright line
    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.name)
    }
}

/// A labelled link (navigation entries, calls to action)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    /// Section this link scrolls to, if it is an in-page anchor
    pub fn target(&self) -> Option<SectionId> {
        SectionId::from_href(&self.href)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub headline: String,
    /// Second headline line, rendered in the accent color
    pub headline_accent: String,
    pub subheading: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

/// A large figure with a caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemContent {
    pub headline: String,
    pub body: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoContent {
    pub headline: String,
    pub body: String,
    pub bullets: Vec<String>,
    pub player_title: String,
    pub player_subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub eyebrow: String,
    pub headline: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingContent {
    pub badge: String,
    pub plan_name: String,
    pub price: String,
    pub period: String,
    /// What the plan includes; the first entry is highlighted
    pub inclusions: Vec<String>,
    pub cta: String,
    pub guarantee: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqContent {
    pub eyebrow: String,
    pub headline: String,
    pub entries: Vec<FaqEntry>,
}

/// Bullet inside a legal section, optionally with a bold label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalItem {
    #[serde(default)]
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSection {
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub items: Vec<LegalItem>,
}

/// A legal text shown in a modal (privacy policy, terms of service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub title: String,
    pub sections: Vec<LegalSection>,
}

/// Everything the page displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub company: Company,
    pub nav_links: Vec<Link>,
    /// "Book Strategy Call" button at the end of the navigation
    pub nav_cta: Link,
    pub social: SocialLinks,
    pub hero: HeroContent,
    pub problem: ProblemContent,
    pub demo: DemoContent,
    pub features: FeaturesContent,
    pub pricing: PricingContent,
    pub faq: FaqContent,
    pub privacy: LegalDocument,
    pub terms: LegalDocument,
}

impl Default for SiteContent {
    fn default() -> Self {
        builtin::grantstudios()
    }
}

impl SiteContent {
    /// Check the invariants the page layout relies on
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.nav_links.is_empty() {
            return Err(ContentError::Empty("nav_links"));
        }
        for link in &self.nav_links {
            if link.target().is_none() {
                return Err(ContentError::UnknownAnchor {
                    name: link.label.clone(),
                    href: link.href.clone(),
                });
            }
        }
        if self.problem.stats.is_empty() {
            return Err(ContentError::Empty("problem.stats"));
        }
        if self.features.items.is_empty() {
            return Err(ContentError::Empty("features.items"));
        }
        if self.faq.entries.is_empty() {
            return Err(ContentError::Empty("faq.entries"));
        }
        Ok(())
    }

    /// Load content, preferring a YAML override when one is given
    ///
    /// An unreadable or invalid override is logged and the built-in content
    /// is used instead.
    pub fn load(override_path: Option<&Path>) -> SiteContent {
        let Some(path) = override_path else {
            return SiteContent::default();
        };

        log::info!("SiteContent: Loading override from {:?}", path);
        let content: SiteContent = match crate::config::read_yaml(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("SiteContent: {:#}, using built-in content", e);
                return SiteContent::default();
            }
        };

        match content.validate() {
            Ok(()) => content,
            Err(e) => {
                log::warn!("SiteContent: Invalid override ({}), using built-in content", e);
                SiteContent::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        let content = SiteContent::default();
        assert_eq!(content.validate(), Ok(()));
        assert_eq!(content.company.name, "GrantStudios");
        assert_eq!(content.nav_links.len(), 4);
        assert_eq!(content.faq.entries.len(), 4);
        assert_eq!(content.features.items.len(), 3);
        assert_eq!(content.pricing.inclusions.len(), 5);
    }

    #[test]
    fn test_nav_targets() {
        let content = SiteContent::default();
        let targets: Vec<_> = content.nav_links.iter().filter_map(Link::target).collect();
        assert_eq!(
            targets,
            vec![SectionId::Features, SectionId::Demo, SectionId::Pricing, SectionId::Faq]
        );
        // The call-to-action has no section behind it
        assert_eq!(content.nav_cta.target(), None);
    }

    #[test]
    fn test_unknown_anchor_rejected() {
        let mut content = SiteContent::default();
        content.nav_links.push(Link {
            label: "Blog".to_string(),
            href: "#blog".to_string(),
        });
        assert_eq!(
            content.validate(),
            Err(ContentError::UnknownAnchor {
                name: "Blog".to_string(),
                href: "#blog".to_string()
            })
        );
    }

    #[test]
    fn test_empty_faq_rejected() {
        let mut content = SiteContent::default();
        content.faq.entries.clear();
        assert_eq!(content.validate(), Err(ContentError::Empty("faq.entries")));
    }

    #[test]
    fn test_jurisdiction() {
        let mut company = SiteContent::default().company;
        assert_eq!(company.jurisdiction(), "Greater Accra");
        company.location = "Tema".to_string();
        assert_eq!(company.jurisdiction(), "Ghana");
        company.location = "Tema, ".to_string();
        assert_eq!(company.jurisdiction(), "Ghana");
    }

    #[test]
    fn test_render_placeholders() {
        let company = SiteContent::default().company;
        let rendered = company.render("Contact {company} at {email} ({jurisdiction})");
        assert_eq!(
            rendered,
            "Contact GrantStudios at carlgrantacquah@gmail.com (Greater Accra)"
        );
    }

    #[test]
    fn test_legal_texts_have_no_unrendered_placeholders() {
        let content = SiteContent::default();
        for doc in [&content.privacy, &content.terms] {
            for section in &doc.sections {
                let body = content.company.render(&section.body);
                assert!(!body.contains('{'), "unrendered placeholder in {:?}", section.heading);
            }
        }
        assert_eq!(content.privacy.sections.len(), 5);
        assert_eq!(content.terms.sections.len(), 7);
    }

    #[test]
    fn test_copyright_line() {
        let company = SiteContent::default().company;
        assert_eq!(
            company.copyright_line(2026),
            "© 2026 GrantStudios. All rights reserved."
        );
    }

    #[test]
    fn test_partial_override_keeps_builtin_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.yaml");
        std::fs::write(
            &path,
            "pricing:\n  badge: New\n  plan_name: Starter\n  price: \"$99\"\n  period: /mo\n  inclusions: [\"24/7 Call Answering\"]\n  cta: Try it\n  guarantee: Cancel anytime.\n",
        )
        .unwrap();

        let content = SiteContent::load(Some(&path));
        assert_eq!(content.pricing.plan_name, "Starter");
        assert_eq!(content.faq, SiteContent::default().faq);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.yaml");
        std::fs::write(&path, "nav_links:\n  - label: Blog\n    href: \"#blog\"\n").unwrap();

        let content = SiteContent::load(Some(&path));
        assert_eq!(content, SiteContent::default());
    }
}
