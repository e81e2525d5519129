//! Terminal output for the `starfolio` CLI.
//!
//! Every line is prefixed with the command phase that wrote it
//! (`[build]`, `[init]`, `[trace]`, `[done]`, `[error]`):
//!
//! - `log!` always prints
//! - `debug!` prints only under `build --verbose`
//! - `ProgressLine` keeps one in-place line of counters while assets are
//!   copied; `log!` calls made meanwhile are printed above it
//!
//! ```ignore
//! log!("build"; "{} stars, {} assets", 100, 12);
//!
//! let progress = ProgressLine::new("build", &[("assets", 12)]);
//! progress.inc("assets");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Set from `build --verbose`.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Lines currently held by a live `ProgressLine` (0 or 1).
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Macros
// ============================================================================

/// Print a line under a phase prefix.
///
/// ```ignore
/// log!("init"; "created {}", root.display());
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but only under `--verbose`.
///
/// The message is not formatted when verbose output is off.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Output
// ============================================================================

/// Print `message` under `[module]`, above any active progress line.
#[allow(clippy::cast_possible_truncation)] // BAR_COUNT is 0 or 1
pub fn log(module: &str, message: &str) {
    let prefix = phase_prefix(module);
    let mut stdout = stdout().lock();

    let bars = BAR_COUNT.load(Ordering::SeqCst);
    if bars > 0 {
        execute!(stdout, cursor::MoveUp(bars as u16)).ok();
        execute!(stdout, Clear(ClearType::FromCursorDown)).ok();
    } else {
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    }

    writeln!(stdout, "{prefix} {message}").ok();
    for _ in 0..bars {
        writeln!(stdout).ok();
    }
    stdout.flush().ok();
}

/// `[module]` colored by phase.
fn phase_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "init" => prefix.bright_blue().bold().to_string(),
        "trace" => prefix.bright_cyan().bold().to_string(),
        "done" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Progress line
// ============================================================================

/// In-place counters, e.g. `[build] assets(120/371)`.
///
/// `inc` is called from rayon workers; a worker that finds the display lock
/// taken skips the redraw instead of waiting.
pub struct ProgressLine {
    module: &'static str,
    counters: Vec<Counter>,
    lock: Mutex<()>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Start a progress line under `[module]`. Counters with a zero total are
    /// left out.
    pub fn new(module: &'static str, items: &[(&'static str, usize)]) -> Self {
        let counters = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|&(name, total)| Counter {
                name,
                total,
                current: AtomicUsize::new(0),
            })
            .collect();

        BAR_COUNT.store(1, Ordering::SeqCst);
        let progress = Self {
            module,
            counters,
            lock: Mutex::new(()),
        };
        progress.redraw(false);
        progress
    }

    /// Bump the named counter. Unknown names are ignored.
    pub fn inc(&self, name: &str) {
        let Some(counter) = self.counters.iter().find(|c| c.name == name) else {
            return;
        };
        counter.current.fetch_add(1, Ordering::Relaxed);
        if let Some(_guard) = self.lock.try_lock() {
            self.redraw(false);
        }
    }

    fn line(&self) -> String {
        self.counters
            .iter()
            .map(|c| format!("{}({}/{})", c.name, c.current.load(Ordering::Relaxed), c.total))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn redraw(&self, keep: bool) {
        let prefix = phase_prefix(self.module);
        let mut stdout = stdout().lock();
        execute!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        if keep {
            writeln!(stdout, "{prefix} {}", self.line()).ok();
        } else {
            write!(stdout, "{prefix} {}", self.line()).ok();
        }
        stdout.flush().ok();
    }

    /// Leave the final counts on screen and move below them.
    pub fn finish(self) {
        BAR_COUNT.store(0, Ordering::SeqCst);
        {
            let _guard = self.lock.lock();
            self.redraw(true);
        }
        std::mem::forget(self);
    }
}

impl Drop for ProgressLine {
    /// An unfinished line (the copy failed) is erased.
    fn drop(&mut self) {
        BAR_COUNT.store(0, Ordering::SeqCst);
        let mut stdout = stdout().lock();
        execute!(stdout, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        stdout.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_skips_empty_counters() {
        let progress = ProgressLine::new("build", &[("assets", 3), ("minified", 0)]);
        assert_eq!(progress.line(), "assets(0/3)");

        progress.inc("assets");
        progress.inc("assets");
        progress.inc("minified");
        assert_eq!(progress.line(), "assets(2/3)");
    }

    #[test]
    fn test_phase_prefix() {
        assert!(phase_prefix("build").contains("[build]"));
        assert!(phase_prefix("Trace").contains("[Trace]"));
    }
}
