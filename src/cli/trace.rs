//! `starfolio trace`: scroll a simulated page and report the active section.
//!
//! Sections are stacked with the requested heights and the page view is
//! mounted on a [`SimulatedViewport`]. The viewport then scrolls from the
//! top to the bottom in fixed steps; every sample records the active
//! section, whether the nav highlight moved, and the hero frame.

use super::args::TraceArgs;
use crate::view::{HeroFrame, MountedView, Section, SimulatedViewport};
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::rc::Rc;

/// Smallest scroll step, in pixels.
const MIN_STEP: f64 = 1.0;

/// Upper bound on samples per trace.
const MAX_SAMPLES: f64 = 100_000.0;

/// One scroll position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceSample {
    pub scroll_y: f64,
    pub active: Section,
    /// The nav highlight moved at this sample.
    pub changed: bool,
    pub hero: HeroFrame,
}

/// Replay the scroll and collect samples.
pub fn run_trace(args: &TraceArgs) -> Result<Vec<TraceSample>> {
    if !(args.step.is_finite() && args.step >= MIN_STEP) {
        bail!("--step must be at least {MIN_STEP} pixel");
    }
    if !(args.viewport.is_finite() && args.viewport > 0.0) {
        bail!("--viewport must be a positive number of pixels");
    }

    let mut heights = [args.viewport; 4];
    for entry in &args.heights {
        if let Some(i) = Section::ALL.iter().position(|s| *s == entry.section) {
            heights[i] = entry.height;
        }
    }

    let host = Rc::new(SimulatedViewport::stacked(args.viewport, heights));
    let view = match args.seed {
        Some(seed) => MountedView::mount(&host, &mut StdRng::seed_from_u64(seed))?,
        None => MountedView::mount(&host, &mut rand::rng())?,
    };

    let max = host.max_scroll();
    if max / args.step > MAX_SAMPLES {
        bail!(
            "{max}px of scroll at --step {} exceeds {MAX_SAMPLES} samples; use a larger step",
            args.step
        );
    }

    let mut samples = Vec::new();
    let mut seen = host.highlights().len();
    let mut y = 0.0;
    loop {
        host.scroll_to_offset(y);
        let highlights = host.highlights().len();
        samples.push(TraceSample {
            scroll_y: host.scroll_y(),
            active: view.active(),
            changed: highlights != seen,
            hero: host.hero().unwrap_or(HeroFrame::REST),
        });
        seen = highlights;

        if y >= max {
            break;
        }
        y = (y + args.step).min(max);
    }

    view.unmount();
    if host.listener_count() != 0 {
        bail!("scroll listener still registered after unmount");
    }
    Ok(samples)
}

/// Run `trace` and print the samples.
pub fn trace(args: &TraceArgs) -> Result<()> {
    let samples = run_trace(args)?;

    if args.json {
        for sample in &samples {
            println!("{}", serde_json::to_string(sample)?);
        }
        return Ok(());
    }

    println!(
        "{:>9}  {:<9}  {:>7}  {:>6}",
        "scroll".dimmed(),
        "active".dimmed(),
        "opacity".dimmed(),
        "scale".dimmed()
    );
    for sample in &samples {
        let active = format!("{:<9}", sample.active.id());
        let marker = if sample.changed { "←" } else { "" };
        println!(
            "{:>9.1}  {}  {:>7.3}  {:>6.3} {}",
            sample.scroll_y,
            if sample.changed {
                active.bright_green().bold().to_string()
            } else {
                active
            },
            sample.hero.opacity,
            sample.hero.scale,
            marker.bright_green()
        );
    }

    let switches = samples.iter().filter(|s| s.changed).count();
    log!("trace"; "{} samples, {} section changes, listener removed on unmount", samples.len(), switches);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SectionHeight;

    fn args(step: f64, heights: Vec<SectionHeight>) -> TraceArgs {
        TraceArgs {
            viewport: 800.0,
            step,
            heights,
            seed: Some(1),
            json: false,
        }
    }

    #[test]
    fn test_trace_visits_every_section() {
        let samples = run_trace(&args(100.0, vec![])).unwrap();

        // 4 sections of 800px in an 800px viewport: max scroll 2400.
        assert_eq!(samples.len(), 25);
        assert_eq!(samples[0].active, Section::Home);
        assert!(!samples[0].changed);
        assert_eq!(samples.last().unwrap().scroll_y, 2400.0);
        assert_eq!(samples.last().unwrap().active, Section::Contact);

        let order: Vec<_> = samples.iter().filter(|s| s.changed).map(|s| s.active).collect();
        assert_eq!(order, vec![Section::About, Section::Projects, Section::Contact]);
    }

    #[test]
    fn test_trace_switch_points() {
        let samples = run_trace(&args(100.0, vec![])).unwrap();
        let at = |y: f64| samples.iter().find(|s| s.scroll_y == y).unwrap().active;

        // At 700 home's bottom and about's top both sit on the probe line; home wins.
        assert_eq!(at(600.0), Section::Home);
        assert_eq!(at(700.0), Section::Home);
        assert_eq!(at(800.0), Section::About);
    }

    #[test]
    fn test_trace_hero_fades() {
        let samples = run_trace(&args(1200.0, vec![])).unwrap();
        assert_eq!(samples[0].hero, HeroFrame::REST);
        let last = samples.last().unwrap();
        assert!(last.hero.opacity.abs() < 1e-9);
        assert!((last.hero.scale - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_trace_custom_heights() {
        let heights = vec![SectionHeight {
            section: Section::Home,
            height: 2000.0,
        }];
        let samples = run_trace(&args(500.0, heights)).unwrap();
        let first_about = samples.iter().find(|s| s.active == Section::About).unwrap();
        assert_eq!(first_about.scroll_y, 2000.0);
    }

    #[test]
    fn test_trace_rejects_bad_step() {
        assert!(run_trace(&args(0.0, vec![])).is_err());
        assert!(run_trace(&args(f64::NAN, vec![])).is_err());
        assert!(run_trace(&args(1e-12, vec![])).is_err());
        assert!(run_trace(&args(0.5, vec![])).is_err());
        assert_eq!(run_trace(&args(MIN_STEP, vec![])).unwrap().len(), 2401);
    }

    #[test]
    fn test_trace_caps_sample_count() {
        let heights = vec![SectionHeight {
            section: Section::Contact,
            height: 1e12,
        }];
        assert!(run_trace(&args(MIN_STEP, heights)).is_err());
    }
}
