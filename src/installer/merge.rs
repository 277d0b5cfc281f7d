//! First-writer-wins merge of installed package trees.
//!
//! The fallback path installs into an isolated temporary directory and then
//! grafts the resulting `node_modules` onto the target's. Entries already
//! present in the target are never clobbered — the primary install (or the
//! repository's own checkout) got there first.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Counts of what a merge did, for the CI log.
#[derive(Debug, Default, PartialEq)]
pub struct MergeStats {
    pub copied: usize,
    pub kept: usize,
}

/// Merge package entries from `source` into `target`, first-writer-wins.
///
/// Scoped namespace directories (`@scope/`) are descended one level so the
/// win/keep decision happens per package, not per namespace. A missing
/// source directory is a no-op.
pub fn merge_package_trees(source: &Path, target: &Path) -> Result<MergeStats> {
    let mut stats = MergeStats::default();
    if !source.is_dir() {
        return Ok(stats);
    }
    fs::create_dir_all(target)?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let name = entry.file_name();
        let source_path = entry.path();
        let target_path = target.join(&name);

        if name.to_string_lossy().starts_with('@') && source_path.is_dir() {
            let nested = merge_package_trees(&source_path, &target_path)?;
            stats.copied += nested.copied;
            stats.kept += nested.kept;
        } else if target_path.exists() {
            stats.kept += 1;
        } else if source_path.is_dir() {
            copy_dir_recursive(&source_path, &target_path)?;
            stats.copied += 1;
        } else {
            fs::copy(&source_path, &target_path)?;
            stats.copied += 1;
        }
    }

    Ok(stats)
}

/// Copy a directory tree.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
