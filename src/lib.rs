//! starfolio - a single-page starfield portfolio.
//!
//! The crate has two faces:
//!
//! - the `starfolio` CLI (feature `cli`, on by default) renders the page
//!   from `starfolio.toml` into a static directory;
//! - the browser runtime (feature `web`) mounts the page view: it keeps
//!   the navigation highlight in sync with the scroll position and
//!   animates the hero.
//!
//! The [`starfield`] generator and the [`view`] runtime are shared by both.

#[cfg(feature = "cli")]
#[macro_use]
pub mod logger;

pub mod starfield;
pub mod view;

#[cfg(feature = "cli")]
pub mod asset;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod content;
#[cfg(feature = "cli")]
pub mod embed;
#[cfg(feature = "cli")]
pub mod render;
#[cfg(feature = "cli")]
pub mod utils;

#[cfg(feature = "web")]
pub mod web;
