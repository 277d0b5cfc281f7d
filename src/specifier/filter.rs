//! Installability filtering of collected specifiers.
//!
//! This allowlist is the security boundary in front of an installer capable
//! of arbitrary network fetches: only plugin-shaped registry names pass.
//! Filesystem paths never do — a relative path already contributed the
//! runtime-support package during collection, and anything else is noise
//! from a semi-trusted config file.

use console::Style;

use crate::specifier::{LOCAL_PLUGIN_RUNTIME_PACKAGE, SpecifierSet};

/// Reduce a raw specifier set to the ordered, deduplicated list of package
/// names that are safe to install. Every discarded specifier is logged.
pub fn installable(raw: &SpecifierSet) -> Vec<String> {
    let mut plan = Vec::new();
    for specifier in raw.iter() {
        if is_installable(specifier) {
            plan.push(specifier.to_string());
        } else {
            println!(
                "{} not an installable plugin package: {}",
                Style::new().dim().apply_to("discarding"),
                specifier
            );
        }
    }
    plan
}

/// Whether a single trimmed specifier may be handed to the installer.
pub fn is_installable(specifier: &str) -> bool {
    if specifier.is_empty() || specifier.chars().any(char::is_whitespace) {
        return false;
    }
    if is_path(specifier) {
        return false;
    }
    specifier == LOCAL_PLUGIN_RUNTIME_PACKAGE || is_plugin_package_name(specifier)
}

fn is_path(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/')
}

/// Allowlist grammar: `eslint-plugin-<name>`, `@<scope>/eslint-plugin` or
/// `@<scope>/eslint-plugin-<name>`, with scope and name over word
/// characters and dashes.
fn is_plugin_package_name(specifier: &str) -> bool {
    match specifier.strip_prefix('@') {
        Some(scoped) => {
            let Some((scope, name)) = scoped.split_once('/') else {
                return false;
            };
            if !is_word(scope) {
                return false;
            }
            name == "eslint-plugin"
                || name
                    .strip_prefix("eslint-plugin-")
                    .is_some_and(is_word)
        }
        None => specifier
            .strip_prefix("eslint-plugin-")
            .is_some_and(is_word),
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
