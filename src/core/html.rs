use crate::domain::page::{
    ContactPanel, ExperienceCard, Hero, NavLink, Page, ProjectCard, RenderedLink, Section,
    SectionBody,
};
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLESHEET: &str = "\
:root { color-scheme: dark; }
body { margin: 0; font-family: system-ui, sans-serif; background: #020617; color: #e2e8f0; line-height: 1.6; }
a { color: inherit; }
.wrap { max-width: 64rem; margin: 0 auto; padding: 0 1.25rem; }
.skip { position: absolute; left: -999px; }
.skip:focus { left: 1.25rem; top: 1.25rem; background: #0f172a; padding: 0.5rem 0.75rem; border-radius: 0.75rem; }
header { position: sticky; top: 0; border-bottom: 1px solid #1e293b; background: rgba(2, 6, 23, 0.7); backdrop-filter: blur(8px); }
header .wrap { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
nav a { padding: 0.5rem 0.75rem; border-radius: 0.75rem; text-decoration: none; color: #cbd5e1; }
section { padding: 2.5rem 0; scroll-margin-top: 5rem; }
.hero { display: grid; gap: 1rem; grid-template-columns: 1.35fr 0.65fr; }
.card { border: 1px solid #1e293b; border-radius: 1rem; background: rgba(15, 23, 42, 0.4); padding: 1rem; }
.grid { display: grid; gap: 0.75rem; }
.projects { grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
.chip { border: 1px solid #1e293b; border-radius: 999px; padding: 0.25rem 0.75rem; font-size: 0.875rem; }
.meta { color: #94a3b8; font-size: 0.75rem; }
.button { display: inline-flex; align-items: center; height: 2.5rem; padding: 0 1rem; border: 1px solid #1e293b; border-radius: 0.75rem; font-weight: 600; text-decoration: none; }
code { background: rgba(15, 23, 42, 0.6); border-radius: 0.25rem; padding: 0.1rem 0.25rem; }
.hint { color: #94a3b8; font-size: 0.75rem; }
footer { border-top: 1px solid #1e293b; padding: 1.5rem 0; color: #94a3b8; }
footer .wrap { display: flex; justify-content: space-between; align-items: center; }
@media (max-width: 48rem) { .hero { grid-template-columns: 1fr; } nav { display: none; } }
";

pub const META_DESCRIPTION: &str = "Personal portfolio — experience, projects, and contact.";

/// HTML serializer for a rendered [`Page`]. All text is escaped by maud.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format the page as a standalone document with embedded CSS.
    pub fn format(page: &Page) -> String {
        Self::render(page).into_string()
    }

    pub fn render(page: &Page) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    meta name="description" content=(META_DESCRIPTION);
                    title { (page.title) }
                    style { (PreEscaped(STYLESHEET)) }
                }
                body {
                    a class="skip" href="#main" { "Skip to content" }
                    header {
                        div class="wrap" {
                            a class="brand" href=(page.brand.href) {
                                span aria-hidden="true" { "◆" }
                                " "
                                strong { (page.brand.label) }
                            }
                            nav {
                                @for item in &page.nav {
                                    (nav_link(item, None))
                                }
                            }
                        }
                    }
                    main id="main" {
                        @for section in &page.sections {
                            (section_markup(section))
                        }
                    }
                    footer {
                        div class="wrap" {
                            p { (page.footer.caption()) }
                            (nav_link(&page.footer.back_to_top, Some("button")))
                        }
                    }
                }
            }
        }
    }
}

fn nav_link(link: &NavLink, class: Option<&str>) -> Markup {
    html! {
        a class=[class] href=(link.href) { (link.label) }
    }
}

fn rendered_link(link: &RenderedLink, class: &str) -> Markup {
    html! {
        a class=(class) href=(link.href) target=(link.target.target_attr()) rel=[link.target.rel_attr()] {
            (link.label)
        }
    }
}

fn section_markup(section: &Section) -> Markup {
    html! {
        section id=(section.id.anchor()) {
            div class="wrap" {
                @if let Some(title) = &section.title {
                    h2 { (title) }
                }
                @if let Some(description) = &section.description {
                    p class="lead" { (description) }
                }
                @match &section.body {
                    SectionBody::Hero(hero) => (hero_markup(hero)),
                    SectionBody::Skills { skills } => {
                        ul class="chips skills" {
                            @for skill in skills {
                                li class="chip" { (skill) }
                            }
                        }
                    }
                    SectionBody::Experience { entries } => {
                        div class="grid experience" {
                            @for entry in entries {
                                (experience_card(entry))
                            }
                        }
                    }
                    SectionBody::Projects { cards } => {
                        div class="grid projects" {
                            @for card in cards {
                                (project_card(card))
                            }
                        }
                    }
                    SectionBody::Contact(contact) => (contact_markup(contact)),
                }
            }
        }
    }
}

fn hero_markup(hero: &Hero) -> Markup {
    html! {
        div class="hero" {
            div class="card" {
                p class="meta" { (hero.role) }
                h1 { (hero.headline) }
                p { (hero.summary) }
                div class="actions" {
                    @for action in &hero.calls_to_action {
                        (nav_link(action, Some("button")))
                    }
                }
                ul class="chips profile-links" {
                    @for link in &hero.links {
                        li { (rendered_link(link, "chip")) }
                    }
                }
            }
            div class="card highlights" {
                h2 { "Highlights" }
                ul {
                    @for highlight in &hero.highlights {
                        li { (highlight) }
                    }
                }
            }
        }
    }
}

fn experience_card(entry: &ExperienceCard) -> Markup {
    html! {
        article class="card" data-key=(entry.key) {
            h3 { (entry.heading()) }
            p class="meta" { (entry.meta()) }
            p { (entry.summary) }
        }
    }
}

fn project_card(card: &ProjectCard) -> Markup {
    html! {
        article class="card" data-key=(card.key) {
            h3 { (card.name) }
            @if let Some(year) = &card.year {
                span class="meta year" { (year) }
            }
            p { (card.description) }
            @if let Some(tags) = &card.tags {
                ul class="chips tags" {
                    @for tag in tags {
                        li class="chip" { (tag) }
                    }
                }
            }
            @if let Some(links) = &card.links {
                div class="links" {
                    @for link in links {
                        (rendered_link(link, "button"))
                    }
                }
            }
        }
    }
}

fn contact_markup(contact: &ContactPanel) -> Markup {
    html! {
        div class="grid contact" {
            div class="card" {
                h3 { "Reach out" }
                p {
                    "Email: "
                    a href=(contact.email_href) { (contact.email) }
                }
                p { "Location: " (contact.location) }
                p class="hint" {
                    "Update content in "
                    code { (contact.content_path) }
                    "."
                }
            }
            div class="card" {
                h3 { "Resume" }
                p {
                    "Add a PDF at "
                    code { (contact.resume_asset_path) }
                    "."
                }
                a class="button" href=(contact.resume_href) { "Open resume" }
            }
        }
    }
}
