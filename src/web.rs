//! Browser runtime.
//!
//! Built with `--no-default-features --features web` (for example through
//! `wasm-pack build --target web`). The page's bootstrap script imports the
//! generated module and calls [`mount`], which:
//!
//! 1. regenerates the starfield into `#starfield`,
//! 2. starts tracking the active section on `window` scroll events,
//! 3. drives the hero fade/scale from the scroll progress,
//! 4. turns `[data-scroll-target]` anchors into smooth scrolls.
//!
//! [`unmount`] removes every listener again.

use crate::starfield::{self, Star};
use crate::view::{
    HeroFrame, ListenerId, MountedView, Rect, RegionSource, ScrollHandler, Section, ViewError,
    ViewHost,
};
use rand::{SeedableRng, rngs::StdRng};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

const STARFIELD_ID: &str = "starfield";
const HERO_ID: &str = "hero-content";
const NAV_SELECTOR: &str = "[data-nav]";
const SCROLL_TARGET_SELECTOR: &str = "[data-scroll-target]";

/// [`ViewHost`] over the live DOM.
pub struct DomViewport {
    window: Window,
    document: Document,
    listeners: RefCell<Vec<(ListenerId, Closure<dyn FnMut()>)>>,
    next_listener: Cell<u64>,
}

impl DomViewport {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self {
            window,
            document,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        })
    }

    /// Elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Fire a synthetic scroll so the view picks up a restored scroll position.
    fn resync(&self) {
        if let Ok(event) = Event::new("scroll") {
            let _ = self.window.dispatch_event(&event);
        }
    }
}

impl RegionSource for DomViewport {
    fn region(&self, section: Section) -> Option<Rect> {
        let rect = self
            .document
            .get_element_by_id(section.id())?
            .get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.bottom()))
    }
}

impl ViewHost for DomViewport {
    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, ViewError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|e| ViewError::Listen(format!("{e:?}")))?;

        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, closure));
        Ok(id)
    }

    fn unlisten_scroll(&self, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(pos) = listeners.iter().position(|(listener, _)| *listener == id) {
            let (_, closure) = listeners.remove(pos);
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }

    fn scroll_progress(&self) -> f64 {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let page = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));

        let max = page - viewport;
        if max <= 0.0 {
            0.0
        } else {
            (scroll_y / max).clamp(0.0, 1.0)
        }
    }

    fn highlight(&self, section: Section) {
        for link in self.query_all(NAV_SELECTOR) {
            let on = link.get_attribute("data-nav").as_deref() == Some(section.id());
            let _ = link.class_list().toggle_with_force("active", on);
            let _ = if on {
                link.set_attribute("aria-current", "true")
            } else {
                link.remove_attribute("aria-current")
            };
        }
    }

    fn apply_hero(&self, frame: HeroFrame) {
        let Some(hero) = self
            .document
            .get_element_by_id(HERO_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let style = hero.style();
        let _ = style.set_property("opacity", &format!("{:.3}", frame.opacity));
        let _ = style.set_property("transform", &format!("scale({:.4})", frame.scale));
    }

    fn render_stars(&self, stars: &[Star]) {
        if let Some(field) = self.document.get_element_by_id(STARFIELD_ID) {
            field.set_inner_html(&starfield::markup(stars));
        }
    }

    fn scroll_to(&self, section: Section) {
        if let Some(target) = self.document.get_element_by_id(section.id()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// A mounted page plus the click handlers of its scroll targets.
struct Page {
    view: MountedView<DomViewport>,
    clicks: Vec<(Element, Closure<dyn FnMut(Event)>)>,
}

impl Drop for Page {
    fn drop(&mut self) {
        for (element, closure) in self.clicks.drain(..) {
            let _ = element
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Seed from `Math.random`; `getrandom` is not wired up for the browser.
fn browser_rng() -> StdRng {
    let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let low = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    StdRng::seed_from_u64((high << 32) | low)
}

fn bind_scroll_targets(host: &DomViewport) -> Result<Vec<(Element, Closure<dyn FnMut(Event)>)>, JsValue> {
    let mut clicks = Vec::new();
    for element in host.query_all(SCROLL_TARGET_SELECTOR) {
        let Some(section) = element
            .get_attribute("data-scroll-target")
            .and_then(|id| id.parse::<Section>().ok())
        else {
            continue;
        };

        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            PAGE.with(|page| {
                if let Some(page) = page.borrow().as_ref() {
                    page.view.scroll_to(section);
                }
            });
        });
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        clicks.push((element, closure));
    }
    Ok(clicks)
}

/// Mount the page view. Mounting again replaces the previous view.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    unmount();

    let host = Rc::new(DomViewport::new()?);
    let view = MountedView::mount(&host, &mut browser_rng())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let clicks = bind_scroll_targets(&host)?;

    PAGE.with(|page| *page.borrow_mut() = Some(Page { view, clicks }));
    host.resync();
    Ok(())
}

/// Remove every listener installed by [`mount`].
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|page| page.borrow_mut().take());
    drop(page);
}

/// Id of the section currently highlighted, if mounted.
#[wasm_bindgen(js_name = activeSection)]
pub fn active_section() -> Option<String> {
    PAGE.with(|page| {
        page.borrow()
            .as_ref()
            .map(|page| page.view.active().id().to_string())
    })
}
