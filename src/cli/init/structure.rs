//! Project directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directories created by `starfolio init`.
///
/// `assets/` holds everything referenced by the page: the avatar, skill
/// icons, project screenshots and, optionally, the wasm runtime under `pkg/`.
const PROJECT_DIRS: &[&str] = &["assets"];

/// Create the project layout at `root` (created if missing).
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("portfolio");

        create_structure(&root).unwrap();
        assert!(root.join("assets").is_dir());

        // Idempotent on an existing tree.
        create_structure(&root).unwrap();
    }
}
