//! Peer-dependency discovery against the registry.
//!
//! Used only on the fallback path: an isolated temporary-directory install
//! has no surrounding project manifest, so peers the primary install would
//! have satisfied from the target must be installed explicitly. Lookup
//! failures for individual packages are logged and skipped.

use std::collections::BTreeMap;
use std::path::Path;

use console::Style;

use crate::process;

/// Query `npm view <pkg> peerDependencies --json` for each package and
/// return the newly-discovered peer package names.
pub fn discover_peer_dependencies(tool: &Path, packages: &[String], cwd: &Path) -> Vec<String> {
    let mut peers: Vec<String> = Vec::new();

    for package in packages {
        let output = match process::run_captured(
            tool,
            &["view", package, "peerDependencies", "--json"],
            cwd,
        ) {
            Ok(output) if output.success() => output,
            Ok(output) => {
                warn(&format!(
                    "Peer lookup for {} failed (exit code {:?}), continuing",
                    package, output.code
                ));
                continue;
            }
            Err(err) => {
                warn(&format!(
                    "Peer lookup for {} could not run: {}, continuing",
                    package, err
                ));
                continue;
            }
        };

        // npm prints nothing at all for packages without peer dependencies.
        let body = output.stdout.trim();
        if body.is_empty() {
            continue;
        }

        match serde_json::from_str::<BTreeMap<String, serde_json::Value>>(body) {
            Ok(declared) => {
                for name in declared.into_keys() {
                    if packages.contains(&name) || peers.contains(&name) {
                        continue;
                    }
                    println!("Discovered peer dependency {} of {}", name, package);
                    peers.push(name);
                }
            }
            Err(err) => {
                warn(&format!(
                    "Peer lookup for {} returned unparseable JSON: {}, continuing",
                    package, err
                ));
            }
        }
    }

    peers
}

fn warn(message: &str) {
    eprintln!("{} {}", Style::new().yellow().apply_to("warning:"), message);
}
