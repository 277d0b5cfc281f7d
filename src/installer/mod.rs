//! Plugin package installation.
//!
//! The install pipeline for one validated plan:
//! 1. Re-validate every specifier against the allowlist (defense in depth;
//!    a mismatch at this stage aborts the whole batch)
//! 2. Primary attempt: `npm install --ignore-scripts` in the target
//! 3. Fallback on workspace-protocol failures: isolated temp-dir install
//!    with discovered peers, merged into the target first-writer-wins
//!
//! Any other installer failure propagates with its exit code.

pub mod artifact;
mod fallback;
mod merge;
mod npm;
mod peers;

use std::path::Path;
use std::sync::LazyLock;

use console::Style;
use regex::Regex;

use crate::error::{LintmatrixError, Result};
use crate::specifier::LOCAL_PLUGIN_RUNTIME_PACKAGE;

/// Independent re-check of the allowlist grammar, run immediately before
/// the installer is invoked. Deliberately a separate implementation from
/// the collection-time filter.
static PLUGIN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:eslint-plugin-[\w-]+|@[\w-]+/eslint-plugin(?:-[\w-]+)?)$").unwrap()
});

/// Install every package in `plan` into `target_dir`'s `node_modules`.
///
/// An empty plan is a successful no-op.
pub fn install_packages(plan: &[String], target_dir: &Path) -> Result<()> {
    if plan.is_empty() {
        println!("No plugin packages to install.");
        return Ok(());
    }

    ensure_plan_valid(plan)?;
    let tool = npm::locate_tool()?;

    println!(
        "Installing {} plugin package(s) into {}: {}",
        plan.len(),
        target_dir.display(),
        plan.join(", ")
    );

    let output = match npm::install(&tool, target_dir, plan) {
        Ok(output) => output,
        Err(err) if npm::is_workspace_protocol_failure(&err.to_string()) => {
            println!(
                "{} installer refused to start over workspace protocol, using isolated install",
                Style::new().yellow().apply_to("fallback:")
            );
            return fallback::install_via_temp_dir(&tool, target_dir, plan);
        }
        Err(err) => {
            return Err(LintmatrixError::InstallToolLaunchFailed {
                tool: npm::INSTALL_TOOL.to_string(),
                reason: err.to_string(),
            });
        }
    };
    output.echo();

    if output.success() {
        println!(
            "{} {} package(s) installed",
            Style::new().green().apply_to("ok:"),
            plan.len()
        );
        return Ok(());
    }

    if npm::is_workspace_protocol_failure(&output.combined()) {
        println!(
            "{} direct install failed on workspace protocol (exit code {:?}), using isolated install",
            Style::new().yellow().apply_to("fallback:"),
            output.code
        );
        return fallback::install_via_temp_dir(&tool, target_dir, plan);
    }

    Err(LintmatrixError::InstallFailed {
        dir: target_dir.display().to_string(),
        code: output.code,
    })
}

/// Reject the entire plan if any entry slipped past the allowlist.
fn ensure_plan_valid(plan: &[String]) -> Result<()> {
    let offending: Vec<&str> = plan
        .iter()
        .filter(|specifier| !is_valid_package_name(specifier))
        .map(String::as_str)
        .collect();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(LintmatrixError::InvalidSpecifiers {
            names: offending.join(", "),
        })
    }
}

fn is_valid_package_name(specifier: &str) -> bool {
    specifier == LOCAL_PLUGIN_RUNTIME_PACKAGE || PLUGIN_NAME_RE.is_match(specifier)
}
