//! Static page content.
//!
//! Everything here is fixed at build time: read from `starfolio.toml` and
//! rendered verbatim. Defaults reproduce the sample portfolio written by
//! `starfolio init`.

mod defaults;

use serde::{Deserialize, Serialize};

/// A technology badge shown in the hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechSkill {
    pub name: String,
    /// Icon path or URL.
    pub image: String,
}

impl TechSkill {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// A project card in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    /// Target of the "View Project" link. The link is inert when unset.
    #[serde(default)]
    pub url: Option<String>,
}

/// `[about]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub heading: String,
    pub avatar: String,
    pub paragraphs: Vec<String>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            heading: "About Me".into(),
            avatar: "/avt.jpg".into(),
            paragraphs: defaults::about_paragraphs(),
        }
    }
}

/// `[contact]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub heading: String,
    pub title: String,
    pub blurb: String,
    pub submit_label: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            heading: "Get in Touch".into(),
            title: "Contact Me".into(),
            blurb: "Feel free to reach out for collaborations or just a friendly hello".into(),
            submit_label: "Send Message".into(),
        }
    }
}

/// `[site.links]` footer links. Empty entries are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    /// Plain address; rendered as a `mailto:` link.
    pub email: String,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.github.is_empty() && self.linkedin.is_empty() && self.email.is_empty()
    }
}

pub fn default_skills() -> Vec<TechSkill> {
    defaults::skills()
}

pub fn default_projects() -> Vec<Project> {
    defaults::projects()
}
