//! Command-line interface definitions.

use crate::view::Section;
use clap::{ColorChoice, Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};

/// starfolio single-page portfolio generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: starfolio.toml)
    #[arg(short = 'C', long, default_value = "starfolio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new portfolio project
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the default starfolio.toml instead of creating files
        #[arg(long)]
        dry: bool,
    },

    /// Build the page into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Replay a scroll through a simulated viewport and print the active section
    #[command(visible_alias = "t")]
    Trace {
        #[command(flatten)]
        args: TraceArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Minify copied CSS and JS assets
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Starfield seed for a reproducible background
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Trace command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct TraceArgs {
    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub viewport: f64,

    /// Scroll distance between samples in pixels (at least 1)
    #[arg(long, default_value_t = 200.0)]
    pub step: f64,

    /// Section heights, e.g. `home=800,about=600` (unlisted sections use the viewport height)
    #[arg(long, value_delimiter = ',')]
    pub heights: Vec<SectionHeight>,

    /// Starfield seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print samples as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// `section=height` pair from `--heights`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionHeight {
    pub section: Section,
    pub height: f64,
}

impl FromStr for SectionHeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, height) = s
            .split_once('=')
            .ok_or_else(|| format!("expected `section=height`, got `{s}`"))?;
        let section = name.trim().parse::<Section>().map_err(|e| e.to_string())?;
        let height = height
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid height `{}`: {e}", height.trim()))?;
        if !height.is_finite() || height < 0.0 {
            return Err(format!("height must be a non-negative number, got `{height}`"));
        }
        Ok(Self { section, height })
    }
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_flags() {
        let cli = Cli::parse_from(["starfolio", "build", "--minify", "false", "-s", "7", "-V"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.minify, Some(false));
        assert_eq!(build_args.seed, Some(7));
        assert!(build_args.verbose);
        assert!(!build_args.clean);
    }

    #[test]
    fn test_minify_flag_without_value() {
        let cli = Cli::parse_from(["starfolio", "build", "--minify"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.minify, Some(true));
    }

    #[test]
    fn test_trace_heights() {
        let cli = Cli::parse_from(["starfolio", "trace", "--heights", "home=900,projects=1500"]);
        let Commands::Trace { args } = cli.command else {
            panic!("expected trace");
        };
        assert_eq!(args.viewport, 800.0);
        assert_eq!(
            args.heights,
            vec![
                SectionHeight { section: Section::Home, height: 900.0 },
                SectionHeight { section: Section::Projects, height: 1500.0 },
            ]
        );
    }

    #[test]
    fn test_section_height_errors() {
        assert!("home".parse::<SectionHeight>().is_err());
        assert!("blog=100".parse::<SectionHeight>().is_err());
        assert!("about=-5".parse::<SectionHeight>().is_err());
        assert!("about=tall".parse::<SectionHeight>().is_err());
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::parse_from(["starfolio", "init", "my-site", "--dry"]);
        assert!(cli.is_init());
        assert_eq!(cli.config, PathBuf::from("starfolio.toml"));
        let Commands::Init { name, dry } = cli.command else {
            panic!("expected init");
        };
        assert_eq!(name, Some(PathBuf::from("my-site")));
        assert!(dry);
    }
}
