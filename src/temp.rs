//! Temporary directory creation for isolated installs.
//!
//! Temp dirs must never end up under a checkout being tested (e.g. when
//! TMPDIR=tmp or TMPDIR=./tmp), so the base is forced to an absolute path
//! before handing it to `tempfile`.

use std::env;
use std::io;
use std::path::PathBuf;

use tempfile::{Builder, TempDir};

/// Absolute base directory for temporary directories.
pub fn temp_dir_base() -> PathBuf {
    let base = env::temp_dir();
    if base.is_absolute() {
        return base;
    }
    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Create a uniquely-named temporary directory for one isolated install.
pub fn isolated_install_dir() -> io::Result<TempDir> {
    Builder::new()
        .prefix("lintmatrix-install-")
        .tempdir_in(temp_dir_base())
}
