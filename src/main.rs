//! starfolio - static generator for a single-page starfield portfolio.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use starfolio::cli::{self, Cli, Commands};
use starfolio::config::SiteConfig;
use starfolio::log;

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        // Tracing needs no project; it only simulates a viewport.
        Commands::Trace { args } => cli::trace::trace(args),
        Commands::Init { name, dry } => {
            let config = SiteConfig::load(&cli)?;
            cli::init::new_site(&config, name.is_some(), *dry)
        }
        Commands::Build { .. } => {
            let config = SiteConfig::load(&cli)?;
            cli::build::build_site(&config, false).map(|_| ())
        }
    }
}
