//! Isolated temporary-directory install for workspace-protocol failures.
//!
//! When the target repository pins internal dependencies with the
//! workspace: protocol, a direct `npm install` in the checkout fails while
//! resolving the existing manifest. The workaround installs the plugin
//! packages (plus their registry-declared peers) in a fresh directory with
//! no surrounding manifest, then merges the resulting tree into the target.

use std::path::Path;

use console::Style;

use crate::error::{LintmatrixError, Result};
use crate::installer::{merge, npm, peers};
use crate::temp;

/// Install `packages` into `target_dir` via a fresh temporary directory.
///
/// The temporary directory is removed whether or not the merge succeeds;
/// a failed removal is logged and swallowed.
pub fn install_via_temp_dir(tool: &Path, target_dir: &Path, packages: &[String]) -> Result<()> {
    let mut full_list: Vec<String> = packages.to_vec();
    full_list.extend(peers::discover_peer_dependencies(tool, packages, target_dir));

    let temp_dir = temp::isolated_install_dir()?;
    println!(
        "Installing {} package(s) in isolated directory {}",
        full_list.len(),
        temp_dir.path().display()
    );

    let output = npm::install(tool, temp_dir.path(), &full_list).map_err(|err| {
        LintmatrixError::InstallToolLaunchFailed {
            tool: npm::INSTALL_TOOL.to_string(),
            reason: err.to_string(),
        }
    })?;
    output.echo();

    if !output.success() {
        return Err(LintmatrixError::FallbackInstallFailed {
            dir: temp_dir.path().display().to_string(),
            code: output.code,
        });
    }

    let merge_result = merge::merge_package_trees(
        &temp_dir.path().join("node_modules"),
        &target_dir.join("node_modules"),
    );

    if let Err(err) = temp_dir.close() {
        eprintln!(
            "{} Failed to remove temporary install directory: {}",
            Style::new().yellow().apply_to("warning:"),
            err
        );
    }

    let stats = merge_result?;
    println!(
        "Merged {} package(s) into {} ({} already present)",
        stats.copied,
        target_dir.join("node_modules").display(),
        stats.kept
    );

    Ok(())
}
