//! Lint configuration parsing for cloned target repositories.
//!
//! These files are semi-trusted input from arbitrary checkouts: any parse
//! problem (missing file, broken JSON, unexpected shape) is a logged warning
//! and an empty result, never an error to the caller. Installability of the
//! extracted specifiers is decided later by the allowlist filter.

pub mod jsonc;

use std::fs;
use std::path::Path;

use console::Style;
use serde::Deserialize;

/// One entry of the `jsPlugins` list, decoded shape-first.
///
/// Repositories declare plugins either as a plain string or as an object
/// carrying a `specifier` (preferred) or `name` field. Anything else is
/// silently ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    Specifier(String),
    Detailed {
        specifier: Option<String>,
        name: Option<String>,
    },
}

impl PluginEntry {
    /// The package specifier this entry declares, if any.
    pub fn specifier(&self) -> Option<&str> {
        match self {
            PluginEntry::Specifier(s) => Some(s.as_str()),
            PluginEntry::Detailed { specifier: Some(s), .. } => Some(s.as_str()),
            PluginEntry::Detailed { specifier: None, name } => name.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LintConfig {
    #[serde(rename = "jsPlugins", default)]
    js_plugins: Vec<serde_json::Value>,
}

/// Read the plugin specifiers declared under `jsPlugins` in a lint
/// configuration file.
///
/// Returns trimmed specifiers. Missing or unparseable files yield an empty
/// list with a warning on the console; this function never raises.
pub fn read_plugin_specifiers(path: &Path) -> Vec<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn(&format!(
                "Cannot read lint config {}: {}",
                path.display(),
                err
            ));
            return Vec::new();
        }
    };

    let config: LintConfig = match serde_json::from_str(&jsonc::strip_comments(&content)) {
        Ok(config) => config,
        Err(err) => {
            warn(&format!(
                "Cannot parse lint config {}: {}",
                path.display(),
                err
            ));
            return Vec::new();
        }
    };

    config
        .js_plugins
        .into_iter()
        .filter_map(|value| serde_json::from_value::<PluginEntry>(value).ok())
        .filter_map(|entry| entry.specifier().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty())
        .collect()
}

fn warn(message: &str) {
    eprintln!("{} {}", Style::new().yellow().apply_to("warning:"), message);
}
