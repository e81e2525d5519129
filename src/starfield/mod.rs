//! Starfield background generation.
//!
//! A starfield is a fixed batch of [`STAR_COUNT`] tiny white dots scattered
//! uniformly over the page background. Each star twinkles on its own cycle:
//! opacity 0.7 → 1 and scale 1 → 1.2, reversing direction every cycle.
//!
//! The random source is injected so builds with a configured seed and tests
//! get the same field every time.

use rand::Rng;
use serde::Serialize;
use std::fmt::Write;
use std::ops::Range;

/// Number of stars in a field.
pub const STAR_COUNT: usize = 100;

/// Star diameter range, in CSS pixels.
pub const SIZE_RANGE: Range<f64> = 1.0..3.0;

/// Twinkle cycle duration range, in seconds.
pub const DURATION_RANGE: Range<f64> = 1.0..3.0;

/// Upper bound (exclusive) of star positions, in percent of the container.
const POSITION_MAX: f64 = 100.0;

/// A decorative background star.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    /// Generation order, used as the render key.
    pub index: usize,
    /// Distance from the container top, percent in `[0, 100)`.
    pub top: f64,
    /// Distance from the container left, percent in `[0, 100)`.
    pub left: f64,
    /// Diameter in pixels.
    pub size: f64,
    pub twinkle: Twinkle,
}

/// Per-star animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Twinkle {
    /// Length of one half-cycle in seconds; the animation alternates direction.
    pub duration: f64,
}

impl Star {
    /// Inline CSS placing and animating this star.
    pub fn style(&self) -> String {
        format!(
            "top:{:.3}%;left:{:.3}%;width:{:.2}px;height:{:.2}px;animation-duration:{:.2}s",
            self.top, self.left, self.size, self.size, self.twinkle.duration
        )
    }
}

/// Generate `count` independently placed stars.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|index| Star {
            index,
            top: rng.random_range(0.0..POSITION_MAX),
            left: rng.random_range(0.0..POSITION_MAX),
            size: rng.random_range(SIZE_RANGE),
            twinkle: Twinkle {
                duration: rng.random_range(DURATION_RANGE),
            },
        })
        .collect()
}

/// The page's background field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Generate a field of [`STAR_COUNT`] stars.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            stars: generate(STAR_COUNT, rng),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn into_stars(self) -> Vec<Star> {
        self.stars
    }

    /// Inner markup of the starfield container.
    pub fn markup(&self) -> String {
        markup(&self.stars)
    }
}

/// Render stars as absolutely positioned `div`s.
///
/// The output depends only on the stars, so re-rendering the same field is
/// stable.
pub fn markup(stars: &[Star]) -> String {
    let mut html = String::with_capacity(stars.len() * 128);
    for star in stars {
        let _ = write!(
            html,
            r#"<div class="star" data-star="{}" style="{}"></div>"#,
            star.index,
            star.style()
        );
    }
    html
}
