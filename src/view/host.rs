//! Host environment seen by a mounted page view.
//!
//! A host is whatever owns the real viewport: the browser DOM in the `web`
//! runtime, or [`SimulatedViewport`](super::SimulatedViewport) in tests and
//! the `trace` command. Everything runs on one thread; hosts use interior
//! mutability and take `&self`.

use super::motion::HeroFrame;
use super::section::{Rect, Section};
use crate::starfield::Star;
use std::collections::HashMap;
use thiserror::Error;

/// Callback invoked on every scroll notification.
pub type ScrollHandler = Box<dyn FnMut()>;

/// Handle of a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("host rejected scroll listener: {0}")]
    Listen(String),
}

/// Answers viewport-relative region queries.
pub trait RegionSource {
    /// Current rect of the section's region, `None` if it is not on the page.
    fn region(&self, section: Section) -> Option<Rect>;
}

impl RegionSource for HashMap<Section, Rect> {
    fn region(&self, section: Section) -> Option<Rect> {
        self.get(&section).copied()
    }
}

/// Capabilities a page view needs from its environment.
pub trait ViewHost: RegionSource {
    /// Register a scroll listener.
    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, ViewError>;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn unlisten_scroll(&self, id: ListenerId);

    /// Page scroll progress in `[0, 1]`.
    fn scroll_progress(&self) -> f64;

    /// Highlight the navigation entry of `section`, clearing the others.
    fn highlight(&self, section: Section);

    /// Apply the hero fade/scale frame.
    fn apply_hero(&self, frame: HeroFrame);

    /// Replace the starfield with `stars`.
    fn render_stars(&self, stars: &[Star]);

    /// Bring `section` into view.
    fn scroll_to(&self, section: Section);
}
