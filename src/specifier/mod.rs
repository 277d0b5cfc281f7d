//! Plugin specifier gathering and validation.
//!
//! A specifier is a string naming a plugin: an installable registry package
//! name, or a local filesystem reference inside the target repository. The
//! pipeline is extract (command flags) → collect (configs + defaults) →
//! filter (allowlist), after which the installer takes over.

pub mod collect;
pub mod extract;
pub mod filter;

use std::collections::BTreeSet;

/// Runtime-support package required by any locally-referenced (relative
/// path) plugin. The relative path itself is never installable, but plugins
/// loaded from inside the checkout need this package at lint time.
pub const LOCAL_PLUGIN_RUNTIME_PACKAGE: &str = "@eslint/plugin-kit";

/// Default lint config file names probed, in order, when a command line
/// carries no `-c`/`--config` flag.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &[".oxlintrc.json", "oxlint.json"];

/// Unique trimmed specifiers gathered during one resolution pass.
#[derive(Debug, Default)]
pub struct SpecifierSet(BTreeSet<String>);

impl SpecifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a specifier, trimming surrounding whitespace. Blank strings
    /// are ignored. Returns whether the set changed.
    pub fn insert(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.0.insert(trimmed.to_string())
    }

    pub fn contains(&self, specifier: &str) -> bool {
        self.0.contains(specifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
