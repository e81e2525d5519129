//! Configuration file generation.
//!
//! Creates starfolio.toml and ignore files for new projects.

use crate::config::CONFIG_FILE;
use crate::embed::init::{CONFIG_TOML, InitVars};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Commented default configuration.
pub fn generate_config_template() -> String {
    CONFIG_TOML.render(&InitVars::default())
}

/// Write the default starfolio.toml
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write ignore files listing the output directory.
///
/// Existing ignore files are left untouched.
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let content = [
        output_pattern.to_string_lossy().into_owned(),
        "/pkg/".to_string(),
        ".DS_Store".to_string(),
    ]
    .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }
    Ok(())
}
