//! Run command implementation
//!
//! Executes the matrix one entry at a time, in file order:
//! 1. Skip-word check (a deliberately-disabled entry)
//! 2. Plugin resolution and installation for the entry's command line
//! 3. Prebuilt binary placement into the checkout
//! 4. The entry's command via the shell, with node_modules/.bin on PATH
//!
//! An entry failure is logged and counted; later entries still run. The
//! command exits non-zero when any entry failed.

use std::env;
use std::path::Path;
use std::process::Command;

use console::Style;

use crate::cli::RunArgs;
use crate::commands::install_plugins;
use crate::error::{LintmatrixError, Result};
use crate::installer::artifact;
use crate::matrix::{MatrixEntry, MatrixFile};
use crate::specifier::extract;

#[derive(Debug)]
enum EntryOutcome {
    Passed,
    Skipped,
}

/// Run the run command
pub fn run(args: RunArgs) -> Result<()> {
    let matrix = MatrixFile::load(&args.matrix)?;
    let entries: Vec<&MatrixEntry> = matrix
        .entries
        .iter()
        .filter(|entry| args.only.as_ref().is_none_or(|only| *only == entry.name))
        .collect();

    if entries.is_empty() {
        println!("No matrix entries to run.");
        return Ok(());
    }

    let total = entries.len();
    let mut failed = 0;
    let mut skipped = 0;

    for entry in entries {
        println!(
            "{} {}",
            Style::new().bold().cyan().apply_to("==>"),
            Style::new().bold().apply_to(&entry.name)
        );
        match run_entry(&args, entry) {
            Ok(EntryOutcome::Passed) => {
                println!("{} {}", Style::new().green().apply_to("ok:"), entry.name);
            }
            Ok(EntryOutcome::Skipped) => {
                println!(
                    "{} {}",
                    Style::new().dim().apply_to("skipped:"),
                    entry.name
                );
                skipped += 1;
            }
            Err(err) => {
                eprintln!(
                    "{} {}: {}",
                    Style::new().red().apply_to("failed:"),
                    entry.name,
                    err
                );
                failed += 1;
            }
        }
    }

    println!(
        "{} entries, {} passed, {} skipped, {} failed",
        total,
        total - skipped - failed,
        skipped,
        failed
    );

    if failed > 0 {
        Err(LintmatrixError::MatrixRunFailed { failed, total })
    } else {
        Ok(())
    }
}

fn run_entry(args: &RunArgs, entry: &MatrixEntry) -> Result<EntryOutcome> {
    if extract::contains_skip_word(&entry.command) {
        return Ok(EntryOutcome::Skipped);
    }

    let dir = entry.checkout_dir(&args.root);
    if !dir.is_dir() {
        return Err(LintmatrixError::CheckoutMissing {
            name: entry.name.clone(),
            path: dir.display().to_string(),
        });
    }

    install_plugins::install_for_command(&entry.command, &dir)?;
    artifact::install_artifact(&args.search_root, &dir, &args.name)?;

    let command = entry.full_command();
    println!("Running: {}", command);
    let status = shell_command(&command, &dir)?.status()?;

    if status.success() {
        Ok(EntryOutcome::Passed)
    } else {
        Err(LintmatrixError::EntryCommandFailed {
            name: entry.name.clone(),
            code: status.code(),
        })
    }
}

/// Build the shell invocation for an entry, with the checkout's
/// `node_modules/.bin` prepended to PATH so the placed binary resolves.
fn shell_command(command: &str, dir: &Path) -> Result<Command> {
    #[cfg(windows)]
    let (shell, flag) = ("cmd", "/C");
    #[cfg(not(windows))]
    let (shell, flag) = ("sh", "-c");

    let mut cmd = Command::new(shell);
    cmd.arg(flag).arg(command).current_dir(dir);

    let bin_dir = dir.join("node_modules").join(".bin");
    let path = env::var_os("PATH").unwrap_or_default();
    let joined = env::join_paths(std::iter::once(bin_dir).chain(env::split_paths(&path)))
        .map_err(|err| LintmatrixError::IoError {
            message: format!("Cannot extend PATH: {}", err),
        })?;
    cmd.env("PATH", joined);

    Ok(cmd)
}
