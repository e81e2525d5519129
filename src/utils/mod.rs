//! Shared helpers for the static generator.

pub mod hash;
pub mod html;
pub mod path;
mod plural;

pub use plural::plural_count;
