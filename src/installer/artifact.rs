//! Prebuilt binary placement into a checkout's package layout.
//!
//! CI builds the binary under test once; each matrix entry then gets a copy
//! under `node_modules/.bin` so the entry's command line resolves it like
//! any locally-installed tool. An already-present destination is left
//! untouched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LintmatrixError, Result};

/// Conventional locations of a freshly-built binary, relative to the
/// search root, probed in order.
const ARTIFACT_DIRS: &[&str] = &["target/release", "target/debug", "."];

/// Copy the prebuilt `name` binary into `target_dir/node_modules/.bin`.
///
/// Returns the destination path. Finding no candidate is a hard error that
/// lists every searched location.
pub fn install_artifact(search_root: &Path, target_dir: &Path, name: &str) -> Result<PathBuf> {
    let file_name = binary_file_name(name);
    let mut searched = Vec::new();

    for dir in ARTIFACT_DIRS {
        let candidate = search_root.join(dir).join(&file_name);
        if !candidate.is_file() {
            searched.push(candidate.display().to_string());
            continue;
        }

        let bin_dir = target_dir.join("node_modules").join(".bin");
        fs::create_dir_all(&bin_dir)?;
        let destination = bin_dir.join(&file_name);

        if destination.exists() {
            println!(
                "{} already present at {}, leaving it in place",
                name,
                destination.display()
            );
            return Ok(destination);
        }

        fs::copy(&candidate, &destination)?;
        make_executable(&destination)?;
        println!(
            "Installed {} -> {}",
            candidate.display(),
            destination.display()
        );
        return Ok(destination);
    }

    Err(LintmatrixError::ArtifactNotFound {
        name: name.to_string(),
        searched: searched.join(", "),
    })
}

fn binary_file_name(name: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", name)
    } else {
        name.to_string()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
