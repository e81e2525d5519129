//! Page view runtime: section tracking, hero motion and the mount lifecycle.
//!
//! # Module Structure
//!
//! | Module    | Purpose                                             |
//! |-----------|-----------------------------------------------------|
//! | `section` | `Section` identifiers and viewport `Rect`s          |
//! | `tracker` | First-match active-section scan at the probe line   |
//! | `motion`  | Scroll-linked hero opacity/scale                    |
//! | `host`    | `ViewHost` capabilities supplied by the environment |
//! | `mount`   | `MountedView` with scoped scroll listener           |
//! | `sim`     | `SimulatedViewport`, an in-memory host              |

pub mod host;
pub mod motion;
pub mod mount;
pub mod section;
pub mod sim;
pub mod tracker;

pub use host::{ListenerId, RegionSource, ScrollHandler, ViewError, ViewHost};
pub use motion::{HeroFrame, hero_frame};
pub use mount::{ActiveSection, MountedView};
pub use section::{Rect, Section, UnknownSection};
pub use sim::SimulatedViewport;
pub use tracker::{ActiveSectionTracker, PROBE_LINE};
