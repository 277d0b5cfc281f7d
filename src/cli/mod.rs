//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - clone: Clone command arguments
//! - run: Run command arguments
//! - install_plugins: Install-plugins command arguments
//! - install_artifact: Install-artifact command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod clone;
pub mod completions;
pub mod install_artifact;
pub mod install_plugins;
pub mod run;

pub use clone::CloneArgs;
pub use completions::CompletionsArgs;
pub use install_artifact::InstallArtifactArgs;
pub use install_plugins::InstallPluginsArgs;
pub use run::RunArgs;

/// lintmatrix - CI matrix harness for a linter binary
#[derive(Parser, Debug)]
#[command(
    name = "lintmatrix",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "CI matrix harness for testing a linter binary against pinned real-world repositories",
    long_about = "lintmatrix clones a matrix of pinned repositories, resolves and installs the \
                  plugin packages each repository's lint configuration declares, places the \
                  prebuilt binary under test into each checkout, and runs the per-repository \
                  command line.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  lintmatrix clone                          \x1b[90m# Clone all matrix repositories\x1b[0m\n   \
                  lintmatrix run                            \x1b[90m# Run the full matrix\x1b[0m\n   \
                  lintmatrix run --only vscode              \x1b[90m# Run a single entry\x1b[0m\n   \
                  lintmatrix install-plugins --dir repos/x  \x1b[90m# Resolve and install plugins for one checkout\x1b[0m\n   \
                  lintmatrix install-artifact --dir repos/x \x1b[90m# Place the prebuilt binary into one checkout\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone the matrix repositories at their pinned revisions
    Clone(CloneArgs),

    /// Run the matrix: install plugins, place the binary, execute each entry
    Run(RunArgs),

    /// Resolve and install plugin packages for a single checkout
    #[command(name = "install-plugins")]
    InstallPlugins(InstallPluginsArgs),

    /// Copy the prebuilt binary into a checkout's node_modules/.bin
    #[command(name = "install-artifact")]
    InstallArtifact(InstallArtifactArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
