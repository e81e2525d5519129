//! Project initialization.
//!
//! Creates a new portfolio project with a commented default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration and ignore file generation

mod config;
mod structure;
mod validate;

use crate::config::SiteConfig;
use anyhow::Result;

pub use validate::InitMode;

/// Create a new project at the config root.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write `starfolio.toml` and `.gitignore`
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, mode)?;
    structure::create_structure(root)?;

    config::write_config(root)?;
    let output_dir = site_config.root_relative(&site_config.build.output);
    config::write_ignore_files(root, &output_dir)?;

    log!("init"; "created {}", root.display());
    log!("init"; "next: add your avatar and icons to assets/, then run `starfolio build`");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_site_in_new_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        let root = temp.path().join("portfolio");
        config.set_root(&root);
        config.build.output = root.join("public");

        new_site(&config, true, false).unwrap();

        assert!(root.join("starfolio.toml").is_file());
        assert!(root.join("assets").is_dir());
        let ignore = std::fs::read_to_string(root.join(".gitignore")).unwrap();
        assert!(ignore.contains("/public"));
    }

    #[test]
    fn test_new_site_rejects_existing_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.set_root(temp.path());

        assert!(new_site(&config, true, false).is_err());
    }
}
