//! `[build]` configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"
//! assets = "assets"
//! minify = true
//! seed = 42            # reproducible starfield
//!
//! [build.runtime]
//! enable = true
//! module = "pkg/starfolio.js"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory (relative to project root).
    pub output: PathBuf,
    /// Static files copied verbatim into the output (relative to project root).
    pub assets: PathBuf,
    /// Minify copied CSS and JS assets.
    pub minify: bool,
    /// Remove the output directory before building.
    pub clean: bool,
    /// Starfield seed. A fresh field is drawn on every build when unset.
    pub seed: Option<u64>,
    pub runtime: RuntimeConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            assets: "assets".into(),
            minify: true,
            clean: false,
            seed: None,
            runtime: RuntimeConfig::default(),
        }
    }
}

pub struct BuildFields {
    pub output: FieldPath,
    pub assets: FieldPath,
}

impl BuildSectionConfig {
    pub const FIELDS: BuildFields = BuildFields {
        output: FieldPath::new("build.output"),
        assets: FieldPath::new("build.assets"),
    };

    /// Validate build configuration against the (normalized) project root.
    ///
    /// # Checks
    /// - `output` must not be the project root or one of its ancestors
    ///   (`clean` removes the whole output directory)
    /// - `output` and `assets` must not contain one another
    /// - `assets`, when present, must be a directory
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if root.starts_with(&self.output) {
            diag.error_with_hint(
                Self::FIELDS.output,
                format!(
                    "output directory must not contain the project root: {}",
                    self.output.display()
                ),
                "use a subdirectory such as \"public\"",
            );
        }
        if self.output.starts_with(&self.assets) || self.assets.starts_with(&self.output) {
            diag.error(
                Self::FIELDS.output,
                format!(
                    "{} and {} must not contain one another",
                    Self::FIELDS.output,
                    Self::FIELDS.assets
                ),
            );
        }
        if self.assets.exists() && !self.assets.is_dir() {
            diag.error(
                Self::FIELDS.assets,
                format!("{} is not a directory: {}", Self::FIELDS.assets, self.assets.display()),
            );
        }

        self.runtime.validate(diag);
    }
}

/// `[build.runtime]`: the wasm module that mounts the page view in the browser.
///
/// The module is built separately (`wasm-pack build --target web --no-default-features
/// --features web`) and copied in with the assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Inject the runtime bootstrap script.
    pub enable: bool,
    /// URL of the wasm-bindgen JS module, relative to the page.
    pub module: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            enable: false,
            module: "pkg/starfolio.js".into(),
        }
    }
}

pub struct RuntimeFields {
    pub enable: FieldPath,
    pub module: FieldPath,
}

impl RuntimeConfig {
    pub const FIELDS: RuntimeFields = RuntimeFields {
        enable: FieldPath::new("build.runtime.enable"),
        module: FieldPath::new("build.runtime.module"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.module.trim().is_empty() {
            diag.error(
                Self::FIELDS.module,
                format!(
                    "{} is true but {} is empty",
                    Self::FIELDS.enable,
                    Self::FIELDS.module
                ),
            );
        }
        if self.module.contains(['"', '<', '>']) {
            diag.error(
                Self::FIELDS.module,
                format!("{} contains characters not allowed in a URL", Self::FIELDS.module),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::utils::path::normalize_path;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert!(config.build.minify);
        assert!(config.build.seed.is_none());
        assert!(!config.build.runtime.enable);
        assert_eq!(config.build.runtime.module, "pkg/starfolio.js");
    }

    #[test]
    fn test_runtime_section() {
        let config = test_parse_config(
            "[build]\nseed = 42\n[build.runtime]\nenable = true\nmodule = \"wasm/app.js\"",
        );
        assert_eq!(config.build.seed, Some(42));
        assert!(config.build.runtime.enable);
        assert_eq!(config.build.runtime.module, "wasm/app.js");
    }

    #[test]
    fn test_runtime_requires_module() {
        let runtime = RuntimeConfig {
            enable: true,
            module: String::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        runtime.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_output_must_not_be_root() {
        let root = Path::new("/site");
        let build = BuildSectionConfig {
            output: root.to_path_buf(),
            assets: root.join("assets"),
            ..BuildSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(root, &mut diag);
        assert_eq!(diag.errors()[0].field, BuildSectionConfig::FIELDS.output);
    }

    fn output_errors(root: &Path, output: &str, assets: &str) -> usize {
        let build = BuildSectionConfig {
            output: normalize_path(&root.join(output)),
            assets: normalize_path(&root.join(assets)),
            ..BuildSectionConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(root, &mut diag);
        diag.errors()
            .iter()
            .filter(|e| e.field == BuildSectionConfig::FIELDS.output)
            .count()
    }

    #[test]
    fn test_output_must_not_contain_root() {
        let root = Path::new("/home/me/site");
        assert_eq!(output_errors(root, "..", "assets"), 1);
        assert_eq!(output_errors(root, "../..", "assets"), 1);
        assert_eq!(output_errors(root, "/", "assets"), 1);
        assert_eq!(output_errors(root, "public", "assets"), 0);
        assert_eq!(output_errors(root, "../site-out", "assets"), 0);
    }

    #[test]
    fn test_output_and_assets_must_be_disjoint() {
        let root = Path::new("/site");
        assert_eq!(output_errors(root, "assets/out", "assets"), 1);
        assert_eq!(output_errors(root, "public", "public/static"), 1);
        assert_eq!(output_errors(root, "public", "public"), 1);
        assert_eq!(output_errors(root, "public", "assets"), 0);
    }

    #[test]
    fn test_runtime_module_rejects_markup() {
        let runtime = RuntimeConfig {
            enable: true,
            module: "x\"</script>.js".into(),
        };
        let mut diag = ConfigDiagnostics::new();
        runtime.validate(&mut diag);
        assert!(!diag.is_empty());
    }
}
