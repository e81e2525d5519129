//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod trace;

pub use args::{BuildArgs, Cli, Commands, SectionHeight, TraceArgs};
