//! Static asset copying.
//!
//! Everything under `[build] assets` is mirrored into the output directory
//! at the same relative path. Hidden files are skipped. With `minify` on,
//! `.css` and `.js` files are minified on the way; files that fail to parse
//! are copied unchanged.

pub mod minify;

use crate::{config::SiteConfig, logger::ProgressLine, utils::path::is_hidden};
use anyhow::{Context, Result, anyhow};
use jwalk::WalkDir;
use minify::Minifiable;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Source and destination of one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoute {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Result of the copy phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub copied: usize,
    pub minified: usize,
}

/// Collect asset routes below `assets_dir` (sorted, hidden files skipped).
///
/// A missing assets directory yields no routes.
pub fn scan_assets(assets_dir: &Path, output_dir: &Path) -> Vec<AssetRoute> {
    if !assets_dir.is_dir() {
        return Vec::new();
    }

    let mut routes: Vec<_> = WalkDir::new(assets_dir)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| !is_hidden(path, assets_dir))
        .filter_map(|source| {
            let rel = source.strip_prefix(assets_dir).ok()?.to_path_buf();
            Some(AssetRoute {
                output: output_dir.join(rel),
                source,
            })
        })
        .collect();
    routes.sort_by(|a, b| a.source.cmp(&b.source));
    routes
}

/// Copy one asset. Returns whether it was minified.
pub fn process_asset(route: &AssetRoute, minify: bool) -> Result<bool> {
    if let Some(parent) = route.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    let kind = Minifiable::from_path(&route.source).filter(|_| minify);
    if let Some(kind) = kind {
        let source = fs::read_to_string(&route.source)
            .with_context(|| format!("Failed to read '{}'", route.source.display()))?;
        if let Some(minified) = kind.minify(&source) {
            fs::write(&route.output, minified)
                .with_context(|| format!("Failed to write '{}'", route.output.display()))?;
            return Ok(true);
        }
        debug!("assets"; "{} did not parse, copying unchanged", route.source.display());
    }

    fs::copy(&route.source, &route.output).with_context(|| {
        format!(
            "Failed to copy '{}' to '{}'",
            route.source.display(),
            route.output.display()
        )
    })?;
    Ok(false)
}

/// Copy every asset in parallel, stopping at the first failure.
pub fn copy_assets(
    routes: &[AssetRoute],
    config: &SiteConfig,
    progress: Option<&ProgressLine>,
) -> Result<AssetStats> {
    let has_error = AtomicBool::new(false);
    let minified = AtomicUsize::new(0);

    routes.par_iter().try_for_each(|route| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        match process_asset(route, config.build.minify) {
            Ok(was_minified) => {
                if was_minified {
                    minified.fetch_add(1, Ordering::Relaxed);
                }
                if let Some(p) = progress {
                    p.inc("assets");
                }
                Ok(())
            }
            Err(e) => {
                if !has_error.swap(true, Ordering::Relaxed) {
                    log!("error"; "{}: {:#}", config.root_relative(&route.source).display(), e);
                }
                Err(anyhow!("Asset copy failed"))
            }
        }
    })?;

    Ok(AssetStats {
        copied: routes.len(),
        minified: minified.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site(temp: &TempDir, minify: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(temp.path());
        config.build.assets = temp.path().join("assets");
        config.build.output = temp.path().join("public");
        config.build.minify = minify;
        config
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_skips_hidden_and_keeps_layout() {
        let temp = TempDir::new().unwrap();
        let assets = temp.path().join("assets");
        write(&assets.join("avt.jpg"), "jpg");
        write(&assets.join("icons/react.svg"), "<svg/>");
        write(&assets.join(".DS_Store"), "");
        write(&assets.join(".cache/x.js"), "");

        let routes = scan_assets(&assets, Path::new("/out"));
        let outputs: Vec<_> = routes.iter().map(|r| r.output.clone()).collect();
        assert_eq!(
            outputs,
            vec![PathBuf::from("/out/avt.jpg"), PathBuf::from("/out/icons/react.svg")]
        );
    }

    #[test]
    fn test_scan_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(scan_assets(&temp.path().join("nope"), temp.path()).is_empty());
    }

    #[test]
    fn test_copy_with_minify() {
        let temp = TempDir::new().unwrap();
        let config = site(&temp, true);
        write(&config.build.assets.join("css/extra.css"), "a {\n  color: red;\n}\n");
        write(&config.build.assets.join("lib/vendor.min.js"), "let  x = 1 ;");
        write(&config.build.assets.join("avt.jpg"), "binary");

        let routes = scan_assets(&config.build.assets, &config.build.output);
        let stats = copy_assets(&routes, &config, None).unwrap();

        assert_eq!(stats, AssetStats { copied: 3, minified: 1 });
        let css = fs::read_to_string(config.build.output.join("css/extra.css")).unwrap();
        assert_eq!(css, "a{color:red}");
        let vendor = fs::read_to_string(config.build.output.join("lib/vendor.min.js")).unwrap();
        assert_eq!(vendor, "let  x = 1 ;");
        assert!(config.build.output.join("avt.jpg").is_file());
    }

    #[test]
    fn test_copy_without_minify() {
        let temp = TempDir::new().unwrap();
        let config = site(&temp, false);
        write(&config.build.assets.join("app.js"), "const  a = 1;\n");

        let routes = scan_assets(&config.build.assets, &config.build.output);
        let stats = copy_assets(&routes, &config, None).unwrap();

        assert_eq!(stats.minified, 0);
        let js = fs::read_to_string(config.build.output.join("app.js")).unwrap();
        assert_eq!(js, "const  a = 1;\n");
    }

    #[test]
    fn test_unparsable_js_copied_verbatim() {
        let temp = TempDir::new().unwrap();
        let config = site(&temp, true);
        write(&config.build.assets.join("bad.js"), "function (");

        let routes = scan_assets(&config.build.assets, &config.build.output);
        let stats = copy_assets(&routes, &config, None).unwrap();

        assert_eq!(stats.minified, 0);
        let js = fs::read_to_string(config.build.output.join("bad.js")).unwrap();
        assert_eq!(js, "function (");
    }
}
