//! Embedded assets written to the output with content-hash filenames.

use super::{Template, TemplateVars};
use crate::utils::hash;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// An embedded resource rendered with `V` and emitted as `{name}.{hash}.{ext}`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAsset<V> {
    name: &'static str,
    extension: &'static str,
    template: Template<V>,
}

impl<V> EmbeddedAsset<V> {
    pub const fn new(name: &'static str, extension: &'static str, content: &'static str) -> Self {
        Self {
            name,
            extension,
            template: Template::new(content),
        }
    }

    pub const fn extension(&self) -> &'static str {
        self.extension
    }

    /// Versioned filename for already-rendered `content`.
    pub fn filename(&self, content: &str) -> String {
        format!(
            "{}.{}.{}",
            self.name,
            hash::fingerprint(content),
            self.extension
        )
    }
}

impl<V: TemplateVars> EmbeddedAsset<V> {
    pub fn render(&self, vars: &V) -> String {
        self.template.render(vars)
    }

    /// Render into `dir` and return the written filename.
    pub fn write(&self, vars: &V, dir: &Path) -> Result<String> {
        let content = self.render(vars);
        let filename = self.filename(&content);
        let path = dir.join(&filename);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::NoVars;
    use tempfile::TempDir;

    const SAMPLE: EmbeddedAsset<NoVars> =
        EmbeddedAsset::new("sample", "css", "body{color:red}");

    #[test]
    fn test_filename_tracks_content() {
        let name = SAMPLE.filename("body{color:red}");
        assert!(name.starts_with("sample."));
        assert!(name.ends_with(".css"));
        assert_eq!(name.len(), "sample.".len() + 8 + ".css".len());
        assert_ne!(name, SAMPLE.filename("body{color:blue}"));
    }

    #[test]
    fn test_write() {
        let temp = TempDir::new().unwrap();
        let name = SAMPLE.write(&NoVars, temp.path()).unwrap();
        let written = fs::read_to_string(temp.path().join(&name)).unwrap();
        assert_eq!(written, "body{color:red}");
    }
}
