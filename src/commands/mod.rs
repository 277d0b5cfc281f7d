//! Command implementations
//!
//! Each module implements one CLI subcommand. Commands return `Result` up
//! to `main`, which owns the conversion to a process exit status.

pub mod clone;
pub mod completions;
pub mod install_artifact;
pub mod install_plugins;
pub mod run;
