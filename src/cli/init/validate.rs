//! Pre-initialization validation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `starfolio init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `starfolio init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir if !is_empty(root)? => bail!(
            "Current directory is not empty.\n\
             Use `starfolio init <name>` to create in a new subdirectory."
        ),
        InitMode::NewDir if root.exists() => bail!(
            "Directory '{}' already exists.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        ),
        _ => Ok(()),
    }
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?;
    Ok(entries.next().is_none())
}
