//! Page rendering.
//!
//! Produces the complete `index.html`: head metadata, starfield container,
//! fixed navigation, the four sections and the footer. Every section carries
//! the id the active-section tracker queries, and every nav entry is a plain
//! anchor so the page scrolls correctly without the wasm runtime.
//!
//! # Module Structure
//!
//! | Module     | Purpose                                  |
//! |------------|------------------------------------------|
//! | `sections` | hero, about, projects, contact, footer   |
//! | `icons`    | inline SVG for the chevron and socials   |

mod icons;
mod sections;

use crate::config::SiteConfig;
use crate::embed::page::{BOOTSTRAP_JS, RuntimeVars};
use crate::starfield::{self, Star};
use crate::utils::html::{escape, escape_attr};
use crate::view::Section;
use std::fmt::Write;

/// Everything the page needs beyond the configuration.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub stars: &'a [Star],
    /// Stylesheet href, relative to the page.
    pub stylesheet: &'a str,
}

/// Render the full document.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let site = &ctx.config.site;
    let mut html = String::with_capacity(32 * 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="{}"><head>"#,
        escape_attr(&site.language)
    );
    html.push_str(&head(ctx));
    html.push_str("</head><body>");

    let _ = write!(
        html,
        r#"<div id="starfield" class="universe" aria-hidden="true">{}</div>"#,
        starfield::markup(ctx.stars)
    );
    html.push_str(&nav());

    html.push_str("<main>");
    html.push_str(&sections::hero(ctx.config));
    html.push_str(&sections::about(ctx.config));
    html.push_str(&sections::projects(ctx.config));
    html.push_str(&sections::contact(ctx.config));
    html.push_str("</main>");
    html.push_str(&sections::footer(ctx.config));

    let runtime = &ctx.config.build.runtime;
    if runtime.enable {
        let _ = write!(
            html,
            r#"<script type="module">{}</script>"#,
            BOOTSTRAP_JS.render(&RuntimeVars::new(&runtime.module))
        );
    }

    html.push_str("</body></html>");
    html
}

fn head(ctx: &PageContext<'_>) -> String {
    let site = &ctx.config.site;
    let mut head = String::new();

    head.push_str(r#"<meta charset="utf-8">"#);
    head.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    let _ = write!(head, "<title>{}</title>", escape(&site.title));
    if !site.description.is_empty() {
        let _ = write!(
            head,
            r#"<meta name="description" content="{}">"#,
            escape_attr(&site.description)
        );
    }
    let _ = write!(
        head,
        r#"<meta name="author" content="{}">"#,
        escape_attr(&site.author)
    );
    if let Some(url) = &site.url {
        let _ = write!(head, r#"<link rel="canonical" href="{}">"#, escape_attr(url));
    }
    let _ = write!(
        head,
        r#"<meta name="generator" content="starfolio {}">"#,
        env!("CARGO_PKG_VERSION")
    );
    let _ = write!(
        head,
        r#"<link rel="stylesheet" href="{}">"#,
        escape_attr(ctx.stylesheet)
    );
    head
}

/// Fixed header. `Home` starts highlighted; the runtime moves the highlight.
fn nav() -> String {
    let mut nav = String::from(
        r#"<header class="site-header reveal-down"><nav aria-label="Sections"><ul class="nav-list">"#,
    );
    for section in Section::ALL {
        let active = section == Section::Home;
        let _ = write!(
            nav,
            r##"<li><a href="#{id}" class="nav-link{class}" data-nav="{id}" data-scroll-target="{id}"{current}>{label}</a></li>"##,
            id = section.id(),
            class = if active { " active" } else { "" },
            current = if active { r#" aria-current="true""# } else { "" },
            label = section.label(),
        );
    }
    nav.push_str("</ul></nav></header>");
    nav
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::starfield::Starfield;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn render(config: &SiteConfig) -> String {
        let field = Starfield::generate(&mut StdRng::seed_from_u64(3));
        render_page(&PageContext {
            config,
            stars: field.stars(),
            stylesheet: "starfolio.0123abcd.css",
        })
    }

    #[test]
    fn test_document_shell() {
        let html = render(&SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Bui Tri Tinh · Portfolio</title>"));
        assert!(html.contains(r#"href="starfolio.0123abcd.css""#));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_hundred_stars() {
        let html = render(&SiteConfig::default());
        assert_eq!(html.matches(r#"class="star""#).count(), 100);
        assert!(html.contains(r#"id="starfield""#));
    }

    #[test]
    fn test_every_section_has_region_and_nav() {
        let html = render(&SiteConfig::default());
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"<section id="{}""#, section.id())));
            assert!(html.contains(&format!(r#"data-nav="{}""#, section.id())));
        }
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains(r##"<a href="#home" class="nav-link active""##));
    }

    #[test]
    fn test_runtime_script_only_when_enabled() {
        let html = render(&SiteConfig::default());
        assert!(!html.contains("<script"));

        let config = test_parse_config("[build.runtime]\nenable = true\nmodule = \"/pkg/app.js\"");
        let html = render(&config);
        assert!(html.contains(r#"<script type="module">"#));
        assert!(html.contains("/pkg/app.js"));
    }

    #[test]
    fn test_metadata_is_escaped() {
        let config = test_parse_config(
            "[site]\ntitle = \"<Me> & co\"\nurl = \"https://example.com/?a=1&b=2\"",
        );
        let html = render(&config);
        assert!(html.contains("<title>&lt;Me&gt; &amp; co</title>"));
        assert!(html.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
    }
}
