//! Error types and handling for lintmatrix
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Internals stay quiet about recoverable conditions (missing lint configs,
//! failed peer lookups); only the installer, the pre-install validation and
//! the matrix collaborators produce hard errors. `main` is the single place
//! that turns one of these into a process exit.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for lintmatrix operations
#[derive(Error, Diagnostic, Debug)]
pub enum LintmatrixError {
    // Specifier validation errors
    #[error("Refusing to install, specifiers failed validation: {names}")]
    #[diagnostic(
        code(lintmatrix::specifier::invalid),
        help(
            "Only eslint-plugin-<name> and @<scope>/eslint-plugin(-<name>) packages are installable. \
             A specifier reaching the installer without matching the allowlist indicates a bug upstream."
        )
    )]
    InvalidSpecifiers { names: String },

    // Installer errors
    #[error("Package installation tool '{tool}' not found: {reason}")]
    #[diagnostic(
        code(lintmatrix::install::tool_missing),
        help("Install npm and make sure it is on PATH")
    )]
    InstallToolMissing { tool: String, reason: String },

    #[error("Failed to launch '{tool}': {reason}")]
    #[diagnostic(code(lintmatrix::install::launch_failed))]
    InstallToolLaunchFailed { tool: String, reason: String },

    #[error("Package installation failed in '{dir}' (exit code {})", display_code(.code))]
    #[diagnostic(code(lintmatrix::install::failed))]
    InstallFailed { dir: String, code: Option<i32> },

    #[error("Isolated fallback installation failed in '{dir}' (exit code {})", display_code(.code))]
    #[diagnostic(
        code(lintmatrix::install::fallback_failed),
        help("There is no further fallback after the temporary-directory install")
    )]
    FallbackInstallFailed { dir: String, code: Option<i32> },

    // Artifact errors
    #[error("Prebuilt '{name}' binary not found (searched: {searched})")]
    #[diagnostic(
        code(lintmatrix::artifact::not_found),
        help("Build the binary first, e.g. cargo build --release")
    )]
    ArtifactNotFound { name: String, searched: String },

    // Matrix errors
    #[error("Failed to read matrix file: {path}")]
    #[diagnostic(code(lintmatrix::matrix::read_failed))]
    MatrixReadFailed { path: String, reason: String },

    #[error("Failed to parse matrix file: {path}: {reason}")]
    #[diagnostic(
        code(lintmatrix::matrix::parse_failed),
        help("The matrix file is YAML with a top-level 'entries' list")
    )]
    MatrixParseFailed { path: String, reason: String },

    #[error("Matrix entry '{name}' has no checkout at '{path}'")]
    #[diagnostic(
        code(lintmatrix::matrix::checkout_missing),
        help("Run 'lintmatrix clone' first")
    )]
    CheckoutMissing { name: String, path: String },

    #[error("Command for entry '{name}' failed (exit code {})", display_code(.code))]
    #[diagnostic(code(lintmatrix::matrix::entry_command_failed))]
    EntryCommandFailed { name: String, code: Option<i32> },

    #[error("{failed} of {total} matrix entries failed")]
    #[diagnostic(code(lintmatrix::matrix::run_failed))]
    MatrixRunFailed { failed: usize, total: usize },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(lintmatrix::git::clone_failed),
        help("Check that URL is correct and reachable from this CI environment")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Failed to check out revision '{rev}': {reason}")]
    #[diagnostic(code(lintmatrix::git::checkout_failed))]
    GitCheckoutFailed { rev: String, reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(lintmatrix::git::operation_failed))]
    GitOperationFailed { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(lintmatrix::fs::io_error))]
    IoError { message: String },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

impl LintmatrixError {
    /// Process exit status for this error.
    ///
    /// Propagates the failing subprocess exit code where one was captured,
    /// otherwise a generic failure code.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintmatrixError::InstallFailed { code: Some(code), .. }
            | LintmatrixError::FallbackInstallFailed { code: Some(code), .. } => *code,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for LintmatrixError {
    fn from(err: std::io::Error) -> Self {
        LintmatrixError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for LintmatrixError {
    fn from(err: git2::Error) -> Self {
        LintmatrixError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LintmatrixError>;
