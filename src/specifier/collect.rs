//! Specifier collection for one invocation.
//!
//! Gathers everything a command line references: configs named by
//! `-c`/`--config` flags, the conventional default config when no flag is
//! present, and the synthetic runtime-support package implied by local
//! relative-path plugins.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::config;
use crate::specifier::{DEFAULT_CONFIG_NAMES, LOCAL_PLUGIN_RUNTIME_PACKAGE, SpecifierSet};

use super::extract;

/// Collect the plugin specifiers referenced by a command line, resolving
/// config paths against `workdir`.
///
/// A command containing the skip word yields an empty set without touching
/// the filesystem.
pub fn collect_plugin_specifiers(command: &str, workdir: &Path) -> SpecifierSet {
    let mut set = SpecifierSet::new();

    if extract::contains_skip_word(command) {
        println!("Command is marked skip, not resolving plugins");
        return set;
    }

    for path in extract::config_paths_from_command(command) {
        let resolved = resolve_in(workdir, &path);
        println!("Reading lint config {}", resolved.display());
        for specifier in config::read_plugin_specifiers(&resolved) {
            set.insert(&specifier);
        }
    }

    // Projects often rely on the conventionally-named config instead of
    // passing it explicitly on the command line.
    if set.is_empty() {
        if let Some(default) = first_existing_default(workdir) {
            println!("Using default lint config {}", default.display());
            for specifier in config::read_plugin_specifiers(&default) {
                set.insert(&specifier);
            }
        }
    }

    if set.iter().any(is_local_plugin_reference) {
        println!(
            "Local plugin reference found, adding {}",
            LOCAL_PLUGIN_RUNTIME_PACKAGE
        );
        set.insert(LOCAL_PLUGIN_RUNTIME_PACKAGE);
    }

    set
}

fn is_local_plugin_reference(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

fn first_existing_default(workdir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| workdir.join(name))
        .find(|candidate| candidate.is_file())
}

fn resolve_in(workdir: &Path, path: &str) -> PathBuf {
    let joined = workdir.join(path);
    joined
        .normalize()
        .map(|normalized| normalized.into_path_buf())
        .unwrap_or(joined)
}
