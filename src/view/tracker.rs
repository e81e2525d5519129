//! Active-section tracking.
//!
//! On each scroll notification the tracker scans the sections in declaration
//! order and picks the first one whose region spans the probe line, a fixed
//! horizontal line [`PROBE_LINE`] pixels below the viewport top:
//!
//! ```text
//!   viewport top ─────────────────────
//!                   │ 100px
//!   probe line ─ ─ ─┼─ ─ ─ ─ ─ ─ ─ ─ ─   ← first section with top <= 100 <= bottom
//! ```
//!
//! When no section spans the line the previous value is kept.

use super::host::RegionSource;
use super::section::Section;

/// Distance of the probe line from the viewport top, in CSS pixels.
pub const PROBE_LINE: f64 = 100.0;

/// Holds the currently active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    active: Section,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSectionTracker {
    /// Tracker starting at [`Section::Home`].
    pub const fn new() -> Self {
        Self {
            active: Section::Home,
        }
    }

    pub const fn active(&self) -> Section {
        self.active
    }

    /// First section in declaration order spanning the probe line.
    ///
    /// Sections whose region is absent are skipped.
    pub fn locate<R: RegionSource + ?Sized>(regions: &R) -> Option<Section> {
        Section::ALL.into_iter().find(|&section| {
            regions
                .region(section)
                .is_some_and(|rect| rect.spans(PROBE_LINE))
        })
    }

    /// Recompute the active section from the current regions.
    ///
    /// Returns the new section if it changed.
    pub fn observe<R: RegionSource + ?Sized>(&mut self, regions: &R) -> Option<Section> {
        match Self::locate(regions) {
            Some(section) if section != self.active => {
                self.active = section;
                Some(section)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::section::Rect;
    use std::collections::HashMap;

    fn regions(rects: &[(Section, f64, f64)]) -> HashMap<Section, Rect> {
        rects
            .iter()
            .map(|&(section, top, bottom)| (section, Rect::new(top, bottom)))
            .collect()
    }

    #[test]
    fn test_initial_section_is_home() {
        assert_eq!(ActiveSectionTracker::new().active(), Section::Home);
        assert_eq!(ActiveSectionTracker::default().active(), Section::Home);
    }

    #[test]
    fn test_single_match() {
        let rects = regions(&[
            (Section::Home, -50.0, 800.0),
            (Section::About, 800.0, 1600.0),
        ]);
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.observe(&rects), None);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_switches_to_matching_section() {
        let rects = regions(&[
            (Section::Home, -900.0, -100.0),
            (Section::About, -100.0, 700.0),
            (Section::Projects, 700.0, 1500.0),
        ]);
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.observe(&rects), Some(Section::About));
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_overlap_earlier_section_wins() {
        let rects = regions(&[
            (Section::Home, -2000.0, -1000.0),
            (Section::About, 50.0, 900.0),
            (Section::Projects, 90.0, 1000.0),
        ]);
        assert_eq!(ActiveSectionTracker::locate(&rects), Some(Section::About));
    }

    #[test]
    fn test_no_match_retains_previous() {
        let mut tracker = ActiveSectionTracker::new();
        let into_projects = regions(&[(Section::Projects, 0.0, 900.0)]);
        tracker.observe(&into_projects);
        assert_eq!(tracker.active(), Section::Projects);

        let past_end = regions(&[
            (Section::Home, -4000.0, -3000.0),
            (Section::About, -3000.0, -2000.0),
            (Section::Projects, -2000.0, -1000.0),
            (Section::Contact, -1000.0, 50.0),
        ]);
        assert_eq!(tracker.observe(&past_end), None);
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn test_missing_regions_are_skipped() {
        let rects = regions(&[(Section::Contact, 0.0, 400.0)]);
        assert_eq!(ActiveSectionTracker::locate(&rects), Some(Section::Contact));
        assert_eq!(ActiveSectionTracker::locate(&HashMap::new()), None);
    }

    #[test]
    fn test_probe_line_edges_are_inclusive() {
        let top_edge = regions(&[(Section::About, PROBE_LINE, 900.0)]);
        assert_eq!(ActiveSectionTracker::locate(&top_edge), Some(Section::About));

        let bottom_edge = regions(&[(Section::About, -900.0, PROBE_LINE)]);
        assert_eq!(ActiveSectionTracker::locate(&bottom_edge), Some(Section::About));
    }
}
