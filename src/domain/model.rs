use serde::{Deserialize, Serialize};

/// Root of the content document. Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub headline: String,
    pub summary: String,
    pub about: String,
    pub location: String,
    pub email: String,
    pub contact_blurb: String,
    pub highlights: Vec<String>,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// Project links share the social link shape.
pub type ProjectLink = SocialLink;

/// `start` and `end` are display strings, never parsed as dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub summary: String,
}

impl ExperienceEntry {
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.title, self.company, self.start)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
}

impl ProjectEntry {
    /// `name-year`, with an empty year when none is given.
    pub fn key(&self) -> String {
        format!("{}-{}", self.name, self.year.as_deref().unwrap_or(""))
    }

    /// Year worth rendering: `None` when absent or empty.
    pub fn present_year(&self) -> Option<&str> {
        self.year.as_deref().filter(|year| !year.is_empty())
    }

    /// Tags worth rendering: `None` when absent or empty.
    pub fn present_tags(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|tags| !tags.is_empty())
    }

    pub fn present_links(&self) -> Option<&[ProjectLink]> {
        self.links.as_deref().filter(|links| !links.is_empty())
    }
}

impl Portfolio {
    /// Parse a content document. Any missing required field or shape mismatch
    /// surfaces as a `serde_json::Error` with line and column.
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
