//! Configuration section definitions.
//!
//! | Module    | TOML Section                                  | Purpose                 |
//! |-----------|-----------------------------------------------|-------------------------|
//! | `site`    | `[site]`, `[site.links]`                      | Identity, metadata      |
//! | `build`   | `[build]`, `[build.runtime]`                  | Paths, seed, runtime    |
//! | `content` | `[about]`, `[[skills]]`, `[[projects]]`, ...  | Page content validation |

pub mod build;
mod content;
pub mod site;

pub use build::{BuildSectionConfig, RuntimeConfig};
pub use content::validate_content;
pub use site::SiteSectionConfig;
