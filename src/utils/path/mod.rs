//! Path utilities.
//!
//! Pure functions for path manipulation. No side effects.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to joining relative paths with the current directory and
/// folding `.` and `..` lexically, so paths that do not exist yet still
/// compare correctly with `starts_with`.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        };
        fold_dots(&absolute)
    })
}

fn fold_dots(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Whether any component below `base` starts with a dot (`.DS_Store`, `.git/`).
pub fn is_hidden(path: &Path, base: &Path) -> bool {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .any(|c| c.as_os_str().to_str().is_some_and(|s| s.starts_with('.')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/file.txt"));
    }

    #[test]
    fn test_normalize_path_folds_dots() {
        assert_eq!(
            normalize_path(Path::new("/no/such/site/./public/../..")),
            PathBuf::from("/no/such")
        );
        assert_eq!(normalize_path(Path::new("/no/such/../../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_is_hidden() {
        let base = Path::new("/site/assets");
        assert!(is_hidden(Path::new("/site/assets/.DS_Store"), base));
        assert!(is_hidden(Path::new("/site/assets/.git/config"), base));
        assert!(!is_hidden(Path::new("/site/assets/img/a.png"), base));
        // Dots above the base do not count.
        assert!(!is_hidden(Path::new("/home/.me/assets/a.png"), Path::new("/home/.me/assets")));
    }
}
