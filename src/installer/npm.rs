//! npm invocation and failure-signature matching.
//!
//! Installs always run with lifecycle scripts disabled: the packages come
//! from semi-trusted third-party configs and must never execute postinstall
//! code on the CI host.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{LintmatrixError, Result};
use crate::process::{self, CommandOutput};

/// The package-installation tool.
pub const INSTALL_TOOL: &str = "npm";

/// Output fragments identifying a workspace-protocol failure: the target
/// repository pins dependencies with an internal monorepo-linking
/// convention npm cannot resolve outside its origin workspace.
const WORKSPACE_FAILURE_SIGNATURES: &[&str] = &[
    "Unsupported URL Type \"workspace",
    "EUNSUPPORTEDPROTOCOL",
    "workspace: protocol",
];

/// Resolve the installation tool on PATH, for a diagnosable failure before
/// the first install attempt.
pub fn locate_tool() -> Result<PathBuf> {
    which::which(INSTALL_TOOL).map_err(|err| LintmatrixError::InstallToolMissing {
        tool: INSTALL_TOOL.to_string(),
        reason: err.to_string(),
    })
}

/// Run `npm install --ignore-scripts <packages...>` in `dir`, capturing
/// output. Launch failures surface as `Err`.
pub fn install(tool: &Path, dir: &Path, packages: &[String]) -> io::Result<CommandOutput> {
    let mut args = vec!["install", "--ignore-scripts"];
    args.extend(packages.iter().map(String::as_str));
    process::run_captured(tool, &args, dir)
}

/// Whether captured output (or a launch error message) matches the
/// workspace-protocol-unsupported failure class.
pub fn is_workspace_protocol_failure(output: &str) -> bool {
    WORKSPACE_FAILURE_SIGNATURES
        .iter()
        .any(|signature| output.contains(signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_signature_matches_npm_error() {
        let stderr = r#"npm error code EUNSUPPORTEDPROTOCOL
npm error Unsupported URL Type "workspace:": workspace:*"#;
        assert!(is_workspace_protocol_failure(stderr));
    }

    #[test]
    fn test_workspace_signature_matches_without_colon() {
        assert!(is_workspace_protocol_failure(
            r#"Unsupported URL Type "workspace""#
        ));
    }

    #[test]
    fn test_ordinary_failures_do_not_match() {
        assert!(!is_workspace_protocol_failure("npm ERR! 404 Not Found"));
        assert!(!is_workspace_protocol_failure("EACCES: permission denied"));
        assert!(!is_workspace_protocol_failure(""));
    }
}
