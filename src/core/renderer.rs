//! Maps a [`Portfolio`] onto the five page sections.
//!
//! Rendering is a single synchronous pass over borrowed content. The footer
//! year is passed in by the caller so identical inputs give identical pages.

use crate::config::DEFAULT_CONTENT_PATH;
use crate::domain::model::{ExperienceEntry, Portfolio, ProjectEntry, SocialLink};
use crate::domain::page::{
    ContactPanel, ExperienceCard, Footer, Hero, NavLink, Page, ProjectCard, RenderedLink,
    Section, SectionBody, SectionId, MAILTO_PREFIX,
};

pub const DEFAULT_RESUME_HREF: &str = "/resume.pdf";
pub const DEFAULT_RESUME_ASSET_PATH: &str = "dist/resume.pdf";

const EXPERIENCE_DESCRIPTION: &str = "Recent roles and impact.";
const PROJECTS_DESCRIPTION: &str = "Selected work — shipped products, prototypes, and experiments.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Linked unconditionally; the asset is not checked for existence.
    pub resume_href: String,
    pub resume_asset_path: String,
    pub content_path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            resume_href: DEFAULT_RESUME_HREF.to_string(),
            resume_asset_path: DEFAULT_RESUME_ASSET_PATH.to_string(),
            content_path: DEFAULT_CONTENT_PATH.to_string(),
        }
    }
}

/// Section descriptions are omitted when blank.
fn description(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

pub fn render(portfolio: &Portfolio, options: &RenderOptions, year: i32) -> Page {
    let profile = &portfolio.profile;

    let sections = vec![
        hero_section(portfolio),
        Section {
            id: SectionId::About,
            title: Some("About".to_string()),
            description: description(&profile.about),
            body: SectionBody::Skills {
                skills: portfolio.skills.clone(),
            },
        },
        Section {
            id: SectionId::Experience,
            title: Some("Experience".to_string()),
            description: Some(EXPERIENCE_DESCRIPTION.to_string()),
            body: SectionBody::Experience {
                entries: portfolio.experience.iter().map(experience_card).collect(),
            },
        },
        Section {
            id: SectionId::Projects,
            title: Some("Projects".to_string()),
            description: Some(PROJECTS_DESCRIPTION.to_string()),
            body: SectionBody::Projects {
                cards: portfolio.projects.iter().map(project_card).collect(),
            },
        },
        Section {
            id: SectionId::Contact,
            title: Some("Contact".to_string()),
            description: description(&profile.contact_blurb),
            body: SectionBody::Contact(ContactPanel {
                email: profile.email.clone(),
                email_href: format!("{}{}", MAILTO_PREFIX, profile.email),
                location: profile.location.clone(),
                content_path: options.content_path.clone(),
                resume_href: options.resume_href.clone(),
                resume_asset_path: options.resume_asset_path.clone(),
            }),
        },
    ];

    Page {
        title: format!("{} · {}", profile.name, profile.role),
        brand: NavLink::new(&profile.name, SectionId::Top.href()),
        nav: vec![
            NavLink::new("About", SectionId::About.href()),
            NavLink::new("Experience", SectionId::Experience.href()),
            NavLink::new("Projects", SectionId::Projects.href()),
            NavLink::new("Contact", SectionId::Contact.href()),
        ],
        sections,
        footer: Footer {
            name: profile.name.clone(),
            year,
            back_to_top: NavLink::new("Back to top", SectionId::Top.href()),
        },
    }
}

fn hero_section(portfolio: &Portfolio) -> Section {
    let profile = &portfolio.profile;
    Section {
        id: SectionId::Top,
        title: None,
        description: None,
        body: SectionBody::Hero(Hero {
            role: profile.role.clone(),
            headline: profile.headline.clone(),
            summary: profile.summary.clone(),
            calls_to_action: vec![
                NavLink::new("View projects", SectionId::Projects.href()),
                NavLink::new("Get in touch", SectionId::Contact.href()),
            ],
            links: render_links(&profile.links),
            highlights: profile.highlights.clone(),
        }),
    }
}

fn render_links(links: &[SocialLink]) -> Vec<RenderedLink> {
    links
        .iter()
        .map(|link| RenderedLink::external(&link.label, &link.href))
        .collect()
}

fn experience_card(entry: &ExperienceEntry) -> ExperienceCard {
    ExperienceCard {
        key: entry.key(),
        title: entry.title.clone(),
        company: entry.company.clone(),
        start: entry.start.clone(),
        end: entry.end.clone(),
        location: entry.location.clone(),
        summary: entry.summary.clone(),
    }
}

fn project_card(entry: &ProjectEntry) -> ProjectCard {
    ProjectCard {
        key: entry.key(),
        name: entry.name.clone(),
        description: entry.description.clone(),
        year: entry.present_year().map(str::to_string),
        tags: entry.present_tags().map(<[String]>::to_vec),
        links: entry.present_links().map(render_links),
    }
}
