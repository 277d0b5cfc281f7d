//! Matrix file model.
//!
//! The matrix is read-only input: a YAML list of pinned target repositories
//! with the command line to run in each. Entry names double as checkout
//! directory names under the clone root.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LintmatrixError, Result};

/// One target repository of the test matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixEntry {
    /// Checkout directory name
    pub name: String,

    /// Git URL to clone
    pub repository: String,

    /// Pinned revision to check out
    pub rev: String,

    /// Shell command to run inside the checkout
    pub command: String,

    /// Formatter configuration options, appended as `--key value` pairs
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl MatrixEntry {
    pub fn checkout_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.name)
    }

    /// The entry's command with any formatter options appended.
    pub fn full_command(&self) -> String {
        let mut command = self.command.clone();
        for (key, value) in &self.options {
            command.push_str(&format!(" --{} {}", key, value));
        }
        command
    }
}

/// The whole matrix file.
#[derive(Debug, Deserialize)]
pub struct MatrixFile {
    pub entries: Vec<MatrixEntry>,
}

impl MatrixFile {
    /// Load and validate a matrix file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| LintmatrixError::MatrixReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        let matrix: MatrixFile =
            serde_yaml::from_str(&content).map_err(|err| LintmatrixError::MatrixParseFailed {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;

        matrix.validate(path)?;
        Ok(matrix)
    }

    // Entry names become directory names, so they must be plain.
    fn validate(&self, path: &Path) -> Result<()> {
        for entry in &self.entries {
            if entry.name.is_empty()
                || entry.name.contains('/')
                || entry.name.contains('\\')
                || entry.name.starts_with('.')
            {
                return Err(LintmatrixError::MatrixParseFailed {
                    path: path.display().to_string(),
                    reason: format!("invalid entry name '{}'", entry.name),
                });
            }
        }
        Ok(())
    }
}
