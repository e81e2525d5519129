//! Section markup.

use super::icons;
use crate::config::SiteConfig;
use crate::content::Project;
use crate::utils::html::{escape, escape_attr};
use crate::view::Section;
use std::fmt::Write;

/// Entrance delay of the first skill badge, in seconds.
const SKILL_DELAY_BASE: f64 = 0.6;
/// Extra delay per badge / project card, in seconds.
const STAGGER: f64 = 0.1;

fn delay(seconds: f64) -> String {
    format!("animation-delay:{seconds:.1}s")
}

pub fn hero(config: &SiteConfig) -> String {
    let site = &config.site;
    let mut html = format!(
        r#"<section id="{}" class="hero"><div id="hero-content" class="hero-content">"#,
        Section::Home.id()
    );

    let _ = write!(
        html,
        r#"<h1 class="hero-name reveal">{}</h1><p class="hero-nickname reveal" style="{}">{}</p><p class="hero-role reveal" style="{}">{}</p>"#,
        escape(&site.author),
        delay(0.2),
        escape(&site.nickname),
        delay(0.4),
        escape(&site.role),
    );

    html.push_str(r#"<div class="skills">"#);
    for (i, skill) in config.skills.iter().enumerate() {
        let _ = write!(
            html,
            r#"<div class="skill-badge" style="{}" title="{name}"><img src="{}" alt="{name}" width="48" height="48"></div>"#,
            delay(SKILL_DELAY_BASE + i as f64 * STAGGER),
            escape_attr(&skill.image),
            name = escape_attr(&skill.name),
        );
    }
    html.push_str("</div>");

    let cta_delay = SKILL_DELAY_BASE + config.skills.len() as f64 * STAGGER;
    let _ = write!(
        html,
        r##"<a href="#{id}" class="cta reveal" data-scroll-target="{id}" style="{}">{}</a>"##,
        delay(cta_delay),
        escape(&site.cta),
        id = Section::Contact.id(),
    );

    html.push_str("</div>");
    html.push_str(icons::CHEVRON_DOWN);
    html.push_str("</section>");
    html
}

pub fn about(config: &SiteConfig) -> String {
    let about = &config.about;
    let mut html = format!(
        r#"<section id="{}" class="section panel"><div class="container"><h2 class="section-title reveal">{}</h2><div class="about-body">"#,
        Section::About.id(),
        escape(&about.heading)
    );

    if !about.avatar.is_empty() {
        let _ = write!(
            html,
            r#"<img class="avatar reveal" src="{}" alt="{}" width="200" height="200">"#,
            escape_attr(&about.avatar),
            escape_attr(&config.site.author)
        );
    }

    html.push_str(r#"<div class="about-text reveal">"#);
    for paragraph in &about.paragraphs {
        let _ = write!(html, "<p>{}</p>", escape(paragraph));
    }
    html.push_str("</div></div></div></section>");
    html
}

pub fn projects(config: &SiteConfig) -> String {
    let mut html = format!(
        r#"<section id="{}" class="section"><div class="container"><h2 class="section-title reveal">{}</h2><div class="project-grid">"#,
        Section::Projects.id(),
        Section::Projects.label()
    );
    for (i, project) in config.projects.iter().enumerate() {
        html.push_str(&project_card(i, project));
    }
    html.push_str("</div></div></section>");
    html
}

fn project_card(index: usize, project: &Project) -> String {
    let mut html = format!(
        r#"<article class="project-card reveal" style="{}"><h3 class="project-title">{}</h3><div class="project-body">"#,
        delay(index as f64 * STAGGER),
        escape(&project.title)
    );

    let _ = write!(
        html,
        r#"<img class="project-image" src="{}" alt="{}" loading="lazy"><p class="project-description">{}</p>"#,
        escape_attr(&project.image),
        escape_attr(&project.title),
        escape(&project.description)
    );

    if !project.tags.is_empty() {
        html.push_str(r#"<div class="tags">"#);
        for tag in &project.tags {
            let _ = write!(html, r#"<span class="tag">{}</span>"#, escape(tag));
        }
        html.push_str("</div>");
    }

    match &project.url {
        Some(url) => {
            let _ = write!(
                html,
                r#"<a class="project-link" href="{}" target="_blank" rel="noopener noreferrer">View Project</a>"#,
                escape_attr(url)
            );
        }
        None => html.push_str(r#"<a class="project-link" aria-disabled="true">View Project</a>"#),
    }

    html.push_str("</div></article>");
    html
}

/// Contact card. The form has no action; submissions are not handled.
pub fn contact(config: &SiteConfig) -> String {
    let contact = &config.contact;
    let mut html = format!(
        r#"<section id="{}" class="section panel"><div class="container"><h2 class="section-title reveal">{}</h2>"#,
        Section::Contact.id(),
        escape(&contact.heading)
    );

    let _ = write!(
        html,
        r#"<div class="contact-card reveal"><h3>{}</h3><p class="contact-blurb">{}</p>"#,
        escape(&contact.title),
        escape(&contact.blurb)
    );

    html.push_str(concat!(
        r#"<form class="contact-form">"#,
        r#"<label for="contact-name">Name</label>"#,
        r#"<input id="contact-name" name="name" type="text" required>"#,
        r#"<label for="contact-email">Email</label>"#,
        r#"<input id="contact-email" name="email" type="email" required>"#,
        r#"<label for="contact-message">Message</label>"#,
        r#"<textarea id="contact-message" name="message" rows="4" required></textarea>"#,
    ));
    let _ = write!(
        html,
        r#"<button type="submit">{}</button></form></div></div></section>"#,
        escape(&contact.submit_label)
    );
    html
}

pub fn footer(config: &SiteConfig) -> String {
    let site = &config.site;
    let links = &site.links;
    let mut html = format!(
        r#"<footer class="site-footer"><div class="container"><p class="copyright">{}</p>"#,
        escape(&site.copyright_line())
    );

    if !links.is_empty() {
        html.push_str(r#"<div class="social">"#);
        let email = (!links.email.is_empty()).then(|| format!("mailto:{}", links.email));
        let entries = [
            ("GitHub", Some(links.github.as_str()), icons::GITHUB),
            ("LinkedIn", Some(links.linkedin.as_str()), icons::LINKEDIN),
            ("Email", email.as_deref(), icons::MAIL),
        ];
        for (label, href, icon) in entries {
            if let Some(href) = href.filter(|h| !h.is_empty()) {
                let _ = write!(
                    html,
                    r#"<a href="{}" aria-label="{label}" title="{label}">{icon}</a>"#,
                    escape_attr(href)
                );
            }
        }
        html.push_str("</div>");
    }

    html.push_str("</div></footer>");
    html
}
