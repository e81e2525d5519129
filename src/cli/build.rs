//! Page build orchestration.
//!
//! Build pipeline phases:
//! - **Scan** - Collect assets and reject any that would replace a generated file
//! - **Init** - Create (or clean) the output directory
//! - **Starfield** - Draw the background from the configured seed or a fresh RNG
//! - **Stylesheet** - Write the embedded stylesheet under a content-hash name
//! - **Page** - Render and write `index.html`
//! - **Assets** - Copy (and minify) the assets directory in parallel
//! - **Finalize** - Log a summary

use crate::{
    asset::{self, AssetRoute, AssetStats},
    config::SiteConfig,
    embed::{NoVars, page::PAGE_CSS},
    logger::ProgressLine,
    render::{PageContext, render_page},
    starfield::{STAR_COUNT, Starfield},
    utils::plural_count,
};
use anyhow::{Context, Result, bail};
use rand::{SeedableRng, rngs::StdRng};
use std::{fs, path::Path, time::Instant};

const INDEX_HTML: &str = "index.html";

/// Outcome of a build, used for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Versioned stylesheet filename, e.g. `starfolio.1a2b3c4d.css`.
    pub stylesheet: String,
    pub assets: AssetStats,
}

/// Build the page into `config.build.output`.
///
/// Pipeline: scan -> init -> starfield -> stylesheet -> page -> assets -> finalize
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    let started = Instant::now();
    let output = config.build.output.as_path();

    let routes = asset::scan_assets(&config.build.assets, output);
    let stylesheet = PAGE_CSS.filename(&PAGE_CSS.render(&NoVars));
    check_reserved(config, &routes, &[INDEX_HTML, stylesheet.as_str()])?;

    init_output(config, output)?;

    let field = draw_starfield(config);

    PAGE_CSS
        .write(&NoVars, output)
        .context("Failed to write stylesheet")?;
    debug!("build"; "stylesheet {}", stylesheet);

    let html = render_page(&PageContext {
        config,
        stars: field.stars(),
        stylesheet: &stylesheet,
    });
    let index = output.join(INDEX_HTML);
    fs::write(&index, html).with_context(|| format!("Failed to write '{}'", index.display()))?;

    let progress = (!quiet && !routes.is_empty()).then(|| ProgressLine::new("build", &[("assets", routes.len())]));
    let assets = asset::copy_assets(&routes, config, progress.as_ref())?;
    if let Some(p) = progress {
        p.finish();
    }

    if !quiet {
        log_build_result(config, &assets, started);
    }

    Ok(BuildReport { stylesheet, assets })
}

/// Fail when an asset would land on a generated file.
fn check_reserved(config: &SiteConfig, routes: &[AssetRoute], reserved: &[&str]) -> Result<()> {
    let output = config.build.output.as_path();
    if let Some(route) = routes
        .iter()
        .find(|r| reserved.iter().any(|name| r.output == output.join(name)))
    {
        bail!(
            "asset '{}' would overwrite the generated '{}'",
            config.root_relative(&route.source).display(),
            config.root_relative(&route.output).display()
        );
    }
    Ok(())
}

/// Create the output directory, emptying it first when `clean` is set.
fn init_output(config: &SiteConfig, output: &Path) -> Result<()> {
    if config.build.clean && output.exists() {
        if config.get_root().starts_with(output) {
            bail!(
                "Refusing to clean '{}': it contains the project root",
                output.display()
            );
        }
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory '{}'", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory '{}'", output.display()))
}

fn draw_starfield(config: &SiteConfig) -> Starfield {
    match config.build.seed {
        Some(seed) => {
            debug!("build"; "starfield seed {}", seed);
            Starfield::generate(&mut StdRng::seed_from_u64(seed))
        }
        None => Starfield::generate(&mut rand::rng()),
    }
}

fn log_build_result(config: &SiteConfig, assets: &AssetStats, started: Instant) {
    let mut summary = format!(
        "{}, {}",
        plural_count(STAR_COUNT, "star"),
        plural_count(assets.copied, "asset")
    );
    if assets.minified > 0 {
        summary.push_str(&format!(" ({} minified)", assets.minified));
    }
    log!("build"; "{}", summary);
    log!(
        "done";
        "{} in {:.2?}",
        config.root_relative(&config.build.output).display(),
        started.elapsed()
    );
}
