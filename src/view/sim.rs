//! In-memory viewport.
//!
//! Sections are stacked top to bottom with fixed heights, the way the page
//! lays them out. Scrolling moves every region up by the scroll offset and
//! notifies the registered listeners synchronously. Individual regions can
//! be overridden with synthetic rects (or removed) to exercise frames the
//! stacked layout cannot produce, such as overlapping sections.
//!
//! Side effects requested by the view (highlights, hero frames, stars,
//! scroll targets) are recorded for inspection.

use super::host::{ListenerId, RegionSource, ScrollHandler, ViewError, ViewHost};
use super::motion::HeroFrame;
use super::section::{Rect, Section};
use crate::starfield::Star;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Default)]
pub struct SimulatedViewport {
    viewport_height: f64,
    /// `(section, offset from page top, height)` in layout order.
    layout: Vec<(Section, f64, f64)>,
    scroll_y: Cell<f64>,
    overrides: RefCell<HashMap<Section, Option<Rect>>>,
    listeners: RefCell<Vec<(ListenerId, ScrollHandler)>>,
    next_listener: Cell<u64>,
    highlights: RefCell<Vec<Section>>,
    hero: Cell<Option<HeroFrame>>,
    stars: RefCell<Vec<Star>>,
    scroll_targets: RefCell<Vec<Section>>,
}

impl SimulatedViewport {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    /// Append a section of `height` pixels below the existing ones.
    pub fn with_section(mut self, section: Section, height: f64) -> Self {
        let offset = self.page_height();
        self.layout.push((section, offset, height));
        self
    }

    /// Stack all sections with the given heights, in declaration order.
    pub fn stacked(viewport_height: f64, heights: [f64; 4]) -> Self {
        Section::ALL
            .into_iter()
            .zip(heights)
            .fold(Self::new(viewport_height), |sim, (section, height)| {
                sim.with_section(section, height)
            })
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Total height of the laid out page.
    pub fn page_height(&self) -> f64 {
        self.layout
            .last()
            .map_or(0.0, |&(_, offset, height)| offset + height)
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.page_height() - self.viewport_height).max(0.0)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// Offset of a section's top from the page top.
    pub fn offset_of(&self, section: Section) -> Option<f64> {
        self.layout
            .iter()
            .find(|(s, ..)| *s == section)
            .map(|&(_, offset, _)| offset)
    }

    /// Scroll to `y` (clamped to the page) and notify listeners.
    pub fn scroll_to_offset(&self, y: f64) {
        self.scroll_y.set(y.clamp(0.0, self.max_scroll()));
        self.notify_scroll();
    }

    /// Force a section's rect; `None` removes the region from the page.
    pub fn set_region(&self, section: Section, rect: Option<Rect>) {
        self.overrides.borrow_mut().insert(section, rect);
    }

    /// Deliver one scroll notification to every listener.
    pub fn notify_scroll(&self) {
        // Handlers run with the list detached so they may query the host freely.
        let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for (_, handler) in listeners.iter_mut() {
            handler();
        }
        let mut slot = self.listeners.borrow_mut();
        listeners.append(&mut slot);
        *slot = listeners;
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Every section highlighted so far, oldest first.
    pub fn highlights(&self) -> Vec<Section> {
        self.highlights.borrow().clone()
    }

    pub fn highlighted(&self) -> Option<Section> {
        self.highlights.borrow().last().copied()
    }

    pub fn hero(&self) -> Option<HeroFrame> {
        self.hero.get()
    }

    pub fn stars(&self) -> Vec<Star> {
        self.stars.borrow().clone()
    }

    pub fn scroll_targets(&self) -> Vec<Section> {
        self.scroll_targets.borrow().clone()
    }
}

impl RegionSource for SimulatedViewport {
    fn region(&self, section: Section) -> Option<Rect> {
        if let Some(rect) = self.overrides.borrow().get(&section) {
            return *rect;
        }
        let scroll_y = self.scroll_y.get();
        self.layout
            .iter()
            .find(|(s, ..)| *s == section)
            .map(|&(_, offset, height)| Rect::with_height(offset - scroll_y, height))
    }
}

impl ViewHost for SimulatedViewport {
    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, ViewError> {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, handler));
        Ok(id)
    }

    fn unlisten_scroll(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(listener, _)| *listener != id);
    }

    fn scroll_progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            0.0
        } else {
            (self.scroll_y.get() / max).clamp(0.0, 1.0)
        }
    }

    fn highlight(&self, section: Section) {
        self.highlights.borrow_mut().push(section);
    }

    fn apply_hero(&self, frame: HeroFrame) {
        self.hero.set(Some(frame));
    }

    fn render_stars(&self, stars: &[Star]) {
        *self.stars.borrow_mut() = stars.to_vec();
    }

    fn scroll_to(&self, section: Section) {
        self.scroll_targets.borrow_mut().push(section);
        if let Some(offset) = self.offset_of(section) {
            self.scroll_to_offset(offset);
        }
    }
}
