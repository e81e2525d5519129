//! Mounted page view.
//!
//! Mounting generates a fresh starfield, registers the scroll listener and
//! highlights the initial section. The listener is removed when the view is
//! dropped, so a host never calls back into a torn-down view.

use super::host::{ListenerId, ViewError, ViewHost};
use super::motion::hero_frame;
use super::section::Section;
use super::tracker::ActiveSectionTracker;
use crate::starfield::{Star, Starfield};
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Read handle on a view's active section.
///
/// The scroll handler is the only writer.
#[derive(Debug, Clone)]
pub struct ActiveSection(Rc<Cell<Section>>);

impl ActiveSection {
    fn new(section: Section) -> Self {
        Self(Rc::new(Cell::new(section)))
    }

    pub fn get(&self) -> Section {
        self.0.get()
    }

    fn set(&self, section: Section) {
        self.0.set(section);
    }
}

pub struct MountedView<H: ViewHost + 'static> {
    host: Rc<H>,
    listener: Option<ListenerId>,
    active: ActiveSection,
    stars: Vec<Star>,
}

impl<H: ViewHost + 'static> MountedView<H> {
    /// Mount a view on `host`.
    pub fn mount<R: Rng + ?Sized>(host: &Rc<H>, rng: &mut R) -> Result<Self, ViewError> {
        let stars = Starfield::generate(rng).into_stars();
        host.render_stars(&stars);

        let tracker = ActiveSectionTracker::new();
        let active = ActiveSection::new(tracker.active());
        host.highlight(tracker.active());

        let handler = scroll_handler(Rc::downgrade(host), tracker, active.clone());
        let listener = host.listen_scroll(handler)?;

        Ok(Self {
            host: Rc::clone(host),
            listener: Some(listener),
            active,
            stars,
        })
    }

    /// Section currently highlighted.
    pub fn active(&self) -> Section {
        self.active.get()
    }

    /// Shareable read handle on the active section.
    pub fn active_handle(&self) -> ActiveSection {
        self.active.clone()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Navigate to `section` (nav links and the hero call-to-action).
    pub fn scroll_to(&self, section: Section) {
        self.host.scroll_to(section);
    }

    /// Tear the view down. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl<H: ViewHost + 'static> Drop for MountedView<H> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.host.unlisten_scroll(id);
        }
    }
}

fn scroll_handler<H: ViewHost + 'static>(
    host: std::rc::Weak<H>,
    mut tracker: ActiveSectionTracker,
    active: ActiveSection,
) -> Box<dyn FnMut()> {
    Box::new(move || {
        let Some(host) = host.upgrade() else {
            return;
        };
        if let Some(section) = tracker.observe(&*host) {
            active.set(section);
            host.highlight(section);
        }
        host.apply_hero(hero_frame(host.scroll_progress()));
    })
}
