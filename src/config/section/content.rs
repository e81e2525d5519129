//! Validation of the content sections (`[about]`, `[[skills]]`,
//! `[[projects]]`, `[contact]`).

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::content::{Project, TechSkill};
use std::collections::HashSet;

const SKILLS: FieldPath = FieldPath::new("skills");
const PROJECTS: FieldPath = FieldPath::new("projects");

/// # Checks
/// - every skill has a name and an image; names are unique
/// - every project has a title
/// - empty lists only warn
pub fn validate_content(skills: &[TechSkill], projects: &[Project], diag: &mut ConfigDiagnostics) {
    if skills.is_empty() {
        diag.warn(SKILLS, "no skills configured, the hero badge row will be empty");
    }
    if projects.is_empty() {
        diag.warn(PROJECTS, "no projects configured, the gallery will be empty");
    }

    let mut seen = HashSet::new();
    for (i, skill) in skills.iter().enumerate() {
        if skill.name.trim().is_empty() {
            diag.error(SKILLS, format!("skill #{} has an empty name", i + 1));
        } else if !seen.insert(skill.name.as_str()) {
            diag.error_with_hint(
                SKILLS,
                format!("duplicate skill `{}`", skill.name),
                "each badge must have a distinct name",
            );
        }
        if skill.image.trim().is_empty() {
            diag.error(SKILLS, format!("skill `{}` has no image", skill.name));
        }
    }

    for (i, project) in projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            diag.error(PROJECTS, format!("project #{} has an empty title", i + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{default_projects, default_skills};

    #[test]
    fn test_defaults_validate() {
        let mut diag = ConfigDiagnostics::new();
        validate_content(&default_skills(), &default_projects(), &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_duplicate_skill() {
        let skills = vec![
            TechSkill::new("Rust", "/rust.svg"),
            TechSkill::new("Rust", "/rust2.svg"),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_content(&skills, &default_projects(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate"));
    }

    #[test]
    fn test_configured_lists_replace_defaults() {
        let config = test_parse_config(
            r#"
[[skills]]
name = "Rust"
image = "/rust.svg"

[[projects]]
title = "starfolio"
description = "This page."
tags = ["Rust", "wasm"]
image = "/starfolio.png"
url = "https://example.com/starfolio"
"#,
        );
        assert_eq!(config.skills, vec![TechSkill::new("Rust", "/rust.svg")]);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].tags, vec!["Rust", "wasm"]);
    }

    #[test]
    fn test_empty_lists_warn() {
        let mut diag = ConfigDiagnostics::new();
        validate_content(&[], &[], &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 2);
    }
}
