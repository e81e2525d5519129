//! Page sections and their viewport geometry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named page region that can be navigated to.
///
/// The variant order is the declaration order used by the active-section
/// scan: earlier sections win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// All sections in declaration order.
    pub const ALL: [Section; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// Element id of the section's region on the page.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown section name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}` (expected home, about, projects or contact)")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a region relative to the viewport top, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Rect of a region of `height` starting `top` pixels below the viewport top.
    pub fn with_height(top: f64, height: f64) -> Self {
        Self::new(top, top + height)
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether the horizontal line at `y` falls within this rect (inclusive).
    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "projects", "contact"]);
        assert!(Section::Home < Section::Contact);
    }

    #[test]
    fn test_parse_section() {
        assert_eq!("projects".parse::<Section>(), Ok(Section::Projects));
        assert_eq!(" About ".parse::<Section>(), Ok(Section::About));
        assert!("blog".parse::<Section>().is_err());
    }

    #[test]
    fn test_rect_spans_inclusive() {
        let rect = Rect::new(100.0, 200.0);
        assert!(rect.spans(100.0));
        assert!(rect.spans(200.0));
        assert!(!rect.spans(99.9));
        assert!(!rect.spans(200.1));
        assert_eq!(Rect::with_height(-50.0, 850.0), Rect::new(-50.0, 800.0));
    }
}
