//! Install-plugins command implementation
//!
//! The single-checkout form CI calls once per matrix job: resolve the
//! plugin specifiers the job's command line references, filter them against
//! the allowlist, and install the survivors into the checkout.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::cli::InstallPluginsArgs;
use crate::error::Result;
use crate::installer;
use crate::specifier::{collect, filter};

/// Run the install-plugins command
pub fn run(args: InstallPluginsArgs) -> Result<()> {
    let command = args.command.unwrap_or_default();
    install_for_command(&command, &args.dir)
}

/// Resolve and install plugins for one command line and checkout.
///
/// The command string is threaded in explicitly; an empty one means the CI
/// job carries no command and there is nothing to resolve.
pub fn install_for_command(command: &str, dir: &Path) -> Result<()> {
    if command.trim().is_empty() {
        println!("No command configured, nothing to resolve.");
        println!("No plugin packages to install.");
        return Ok(());
    }

    let dir = normalize(dir);
    let specifiers = collect::collect_plugin_specifiers(command, &dir);
    let plan = filter::installable(&specifiers);
    installer::install_packages(&plan, &dir)
}

fn normalize(dir: &Path) -> PathBuf {
    dir.normalize()
        .map(|normalized| normalized.into_path_buf())
        .unwrap_or_else(|_| dir.to_path_buf())
}
