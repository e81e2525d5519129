//! `[site]` configuration.
//!
//! Identity shown in the hero, page metadata and footer links.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Bui Tri Tinh · Portfolio"
//! author = "Bui Tri Tinh"
//! nickname = "Call me by Carson"
//! role = "💻 Full-Stack Developer"
//! url = "https://example.com"
//!
//! [site.links]
//! github = "https://github.com/example"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::content::SocialLinks;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Browser tab title.
    pub title: String,
    /// Name shown in the hero.
    pub author: String,
    /// Line under the name.
    pub nickname: String,
    /// Role line under the nickname.
    pub role: String,
    /// Meta description.
    pub description: String,
    /// Canonical URL of the deployed page.
    pub url: Option<String>,
    /// `lang` attribute of the document.
    pub language: String,
    /// Footer notice. Derived from `author` when empty.
    pub copyright: String,
    /// Label of the hero button that scrolls to the contact form.
    pub cta: String,
    pub links: SocialLinks,
}

pub struct SiteFields {
    pub title: FieldPath,
    pub author: FieldPath,
    pub url: FieldPath,
    pub language: FieldPath,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Bui Tri Tinh · Portfolio".into(),
            author: "Bui Tri Tinh".into(),
            nickname: "Call me by Carson".into(),
            role: "💻 Full-Stack Developer".into(),
            description: "Personal portfolio of a full-stack web developer.".into(),
            url: None,
            language: "en".into(),
            copyright: String::new(),
            cta: "Liên hệ ngay".into(),
            links: SocialLinks::default(),
        }
    }
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("site.title"),
        author: FieldPath::new("site.author"),
        url: FieldPath::new("site.url"),
        language: FieldPath::new("site.language"),
    };

    /// Footer copyright line.
    pub fn copyright_line(&self) -> String {
        if self.copyright.is_empty() {
            format!("© {}. All rights reserved.", self.author)
        } else {
            self.copyright.clone()
        }
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title`, `author` and `language` must not be empty
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "title must not be empty");
        }
        if self.author.trim().is_empty() {
            diag.error(Self::FIELDS.author, "author must not be empty");
        }
        if self.language.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.language,
                "language must not be empty",
                "use a BCP 47 code such as \"en\" or \"vi\"",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}
