//! Site configuration management for `starfolio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build], [build.runtime]
//! │   ├── content    # [about], [[skills]], [[projects]], [contact]
//! │   └── site       # [site], [site.links]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section           | Purpose                                         |
//! |-------------------|-------------------------------------------------|
//! | `[site]`          | Name, nickname, role, metadata, footer          |
//! | `[site.links]`    | GitHub, LinkedIn and email footer links         |
//! | `[build]`         | Output and assets paths, minify, starfield seed |
//! | `[build.runtime]` | Browser runtime (wasm) injection                |
//! | `[about]`         | About heading, avatar and paragraphs            |
//! | `[[skills]]`      | Hero technology badges                          |
//! | `[[projects]]`    | Project gallery cards                           |
//! | `[contact]`       | Contact card copy                               |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, RuntimeConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    content::{About, Contact, Project, TechSkill, default_projects, default_skills},
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename.
pub const CONFIG_FILE: &str = "starfolio.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing starfolio.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub about: About,

    #[serde(default = "default_skills")]
    pub skills: Vec<TechSkill>,

    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub contact: Contact,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            build: BuildSectionConfig::default(),
            about: About::default(),
            skills: default_skills(),
            projects: default_projects(),
            contact: Contact::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config file.
    /// The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run `starfolio init` to create a new project",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli)?;

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) -> Result<()> {
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => std::env::current_dir()
                .context("Failed to get current working directory")?
                .join(name),
            Commands::Init { name: None, .. } => {
                std::env::current_dir().context("Failed to get current working directory")?
            }
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        self.normalize_paths(&root);
        self.apply_command_options(cli);
        Ok(())
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Init { .. } | Commands::Trace { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        if args.seed.is_some() {
            self.build.seed = args.seed;
        }
        self.build.clean |= args.clean;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.set_root(&root);
        self.config_path = normalize_path(&self.config_path);
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.assets = normalize_path(&root.join(&self.build.assets));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(self.get_root(), &mut diag);
        section::validate_content(&self.skills, &self.projects, &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"Me\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.site.language, "en");
        assert!(config.build.minify);
        assert_eq!(config.skills.len(), 16);
        assert_eq!(config.projects.len(), 3);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.author, "Bui Tri Tinh");
        assert_eq!(config.contact.submit_label, "Send Message");
        assert_eq!(config.about.heading, "About Me");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_root_relative() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/site"));
        assert_eq!(config.root_relative("/site/public"), PathBuf::from("public"));
    }

    #[test]
    fn test_load_applies_cli_overrides() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        fs::write(&config_path, "[build]\nminify = true\nseed = 1\n").unwrap();

        let cli = Cli::parse_from([
            "starfolio",
            "-C",
            config_path.to_str().unwrap(),
            "build",
            "--minify=false",
            "--seed",
            "9",
            "--clean",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert!(!config.build.minify);
        assert_eq!(config.build.seed, Some(9));
        assert!(config.build.clean);
        assert_eq!(config.get_root(), normalize_path(temp.path()));
        assert_eq!(config.build.output, config.get_root().join("public"));
    }

    #[test]
    fn test_load_missing_config_fails() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "starfolio",
            "-C",
            temp.path().join("missing.toml").to_str().unwrap(),
            "build",
        ]);
        assert!(SiteConfig::load(&cli).is_err());
    }

    #[test]
    fn test_load_rejects_output_above_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("proj");
        fs::create_dir_all(&root).unwrap();
        let config_path = root.join(CONFIG_FILE);

        for output in ["..", "../..", "/", "."] {
            fs::write(&config_path, format!("[build]\noutput = \"{output}\"\nclean = true\n")).unwrap();
            let cli = Cli::parse_from(["starfolio", "-C", config_path.to_str().unwrap(), "build"]);
            assert!(SiteConfig::load(&cli).is_err(), "output = {output:?} was accepted");
        }
        assert!(root.is_dir());
    }
}
