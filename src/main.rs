//! lintmatrix - CI matrix harness
//!
//! Tests a linter/formatter binary against a corpus of pinned real-world
//! repositories: clone them, resolve and install the plugin packages their
//! lint configurations declare, place the prebuilt binary, run each entry's
//! command line.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod git;
mod installer;
mod matrix;
mod process;
mod specifier;
mod temp;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clone(args) => commands::clone::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::InstallPlugins(args) => commands::install_plugins::run(args),
        Commands::InstallArtifact(args) => commands::install_artifact::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    // The single place a raised error becomes a process exit: one concise
    // diagnosis line for the CI log, status propagated where a subprocess
    // supplied one.
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
