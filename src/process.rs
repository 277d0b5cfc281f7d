//! Captured subprocess execution.
//!
//! Installer invocations capture stdout/stderr instead of streaming so the
//! output can be inspected for failure signatures, then echoed to the
//! console for the CI log.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured output of a finished subprocess.
#[derive(Debug)]
pub struct CommandOutput {
    /// Exit code, when the process terminated normally
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Echo the captured streams to the console.
    pub fn echo(&self) {
        if !self.stdout.is_empty() {
            print!("{}", self.stdout);
        }
        if !self.stderr.is_empty() {
            eprint!("{}", self.stderr);
        }
    }

    /// Combined stdout + stderr, for signature matching.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Run a program to completion in `cwd`, capturing its output.
///
/// Launch failures (binary missing, spawn error) surface as the `Err` arm so
/// callers can distinguish "failed to even start" from a non-zero exit.
pub fn run_captured(program: &Path, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
    let output = Command::new(program).args(args).current_dir(cwd).output()?;

    Ok(CommandOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shell() -> PathBuf {
        PathBuf::from("sh")
    }

    #[test]
    #[cfg(unix)]
    fn test_run_captured_collects_both_streams() {
        let out = run_captured(
            &shell(),
            &["-c", "echo out; echo err >&2"],
            Path::new("."),
        )
        .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "out");
        assert_eq!(out.stderr.trim(), "err");
        assert!(out.combined().contains("out"));
        assert!(out.combined().contains("err"));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_captured_reports_exit_code() {
        let out = run_captured(&shell(), &["-c", "exit 42"], Path::new(".")).unwrap();
        assert!(!out.success());
        assert_eq!(out.code, Some(42));
    }

    #[test]
    fn test_run_captured_launch_failure_is_err() {
        let result = run_captured(
            Path::new("lintmatrix-no-such-binary"),
            &[],
            Path::new("."),
        );
        assert!(result.is_err());
    }
}
