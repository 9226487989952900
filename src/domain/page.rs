//! The rendered page: an ordered tree of sections built from a [`Portfolio`].
//!
//! [`Portfolio`]: crate::domain::model::Portfolio

use serde::Serialize;

pub const MAILTO_PREFIX: &str = "mailto:";

/// Stable in-page anchors. Navigation targets these literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Top,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Top,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// `mailto:` links stay in the current browsing context.
    SameContext,
    /// Everything else opens a new context without a referrer.
    NewContext,
}

impl LinkTarget {
    pub fn for_href(href: &str) -> Self {
        if href.starts_with(MAILTO_PREFIX) {
            LinkTarget::SameContext
        } else {
            LinkTarget::NewContext
        }
    }

    pub fn target_attr(self) -> &'static str {
        match self {
            LinkTarget::SameContext => "_self",
            LinkTarget::NewContext => "_blank",
        }
    }

    pub fn rel_attr(self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewContext => Some("noreferrer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLink {
    pub label: String,
    pub href: String,
    pub target: LinkTarget,
}

impl RenderedLink {
    pub fn external(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            target: LinkTarget::for_href(href),
        }
    }
}

/// A plain same-page or same-site link (navigation, call to action).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub brand: NavLink,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

impl Page {
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: SectionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Hero(Hero),
    Skills { skills: Vec<String> },
    Experience { entries: Vec<ExperienceCard> },
    Projects { cards: Vec<ProjectCard> },
    Contact(ContactPanel),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub role: String,
    pub headline: String,
    pub summary: String,
    pub calls_to_action: Vec<NavLink>,
    pub links: Vec<RenderedLink>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceCard {
    pub key: String,
    pub title: String,
    pub company: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub summary: String,
}

impl ExperienceCard {
    pub fn heading(&self) -> String {
        format!("{} · {}", self.title, self.company)
    }

    pub fn meta(&self) -> String {
        format!("{} — {} · {}", self.start, self.end, self.location)
    }
}

/// Optional parts are `Some` only when they have something to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub key: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<RenderedLink>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPanel {
    pub email: String,
    pub email_href: String,
    pub location: String,
    /// Where the content document lives, shown as an editing hint.
    pub content_path: String,
    pub resume_href: String,
    /// Where the resume asset is expected on disk.
    pub resume_asset_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub name: String,
    pub year: i32,
    pub back_to_top: NavLink,
}

impl Footer {
    pub fn caption(&self) -> String {
        format!("{} · {}", self.name, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_links_stay_in_context() {
        let target = LinkTarget::for_href("mailto:ada@example.com");
        assert_eq!(target, LinkTarget::SameContext);
        assert_eq!(target.target_attr(), "_self");
        assert_eq!(target.rel_attr(), None);
    }

    #[test]
    fn test_other_links_open_new_context() {
        for href in ["https://github.com/ada", "http://x.dev", "/resume.pdf", "MAILTO:ada@x"] {
            let target = LinkTarget::for_href(href);
            assert_eq!(target, LinkTarget::NewContext, "href {}", href);
            assert_eq!(target.target_attr(), "_blank");
            assert_eq!(target.rel_attr(), Some("noreferrer"));
        }
    }

    #[test]
    fn test_section_anchors_are_stable() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        assert_eq!(anchors, vec!["top", "about", "experience", "projects", "contact"]);
        assert_eq!(SectionId::Projects.href(), "#projects");
    }
}
