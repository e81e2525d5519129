//! Scroll-linked hero motion.
//!
//! The hero content fades and shrinks as the page scrolls. Both properties
//! are piecewise-linear in the scroll progress and clamped at the ends.

use serde::Serialize;

const OPACITY_STOPS: [(f64, f64); 3] = [(0.0, 1.0), (0.5, 0.5), (1.0, 0.0)];
const SCALE_STOPS: [(f64, f64); 3] = [(0.0, 1.0), (0.5, 0.95), (1.0, 0.9)];

/// Hero opacity and scale for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroFrame {
    pub opacity: f64,
    pub scale: f64,
}

impl HeroFrame {
    /// Frame at rest (top of the page).
    pub const REST: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Hero frame at scroll `progress` (0 = top, 1 = bottom).
pub fn hero_frame(progress: f64) -> HeroFrame {
    HeroFrame {
        opacity: interpolate(&OPACITY_STOPS, progress),
        scale: interpolate(&SCALE_STOPS, progress),
    }
}

fn interpolate(stops: &[(f64, f64)], x: f64) -> f64 {
    let (first, last) = (stops[0], stops[stops.len() - 1]);
    if x.is_nan() || x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }

    stops
        .windows(2)
        .find(|w| x <= w[1].0)
        .map(|w| {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        })
        .unwrap_or(last.1)
}
