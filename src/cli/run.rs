use clap::Parser;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run the full matrix:\n    lintmatrix run\n\n\
                  Run one entry:\n    lintmatrix run --only vscode\n\n\
                  Use a binary built elsewhere:\n    lintmatrix run --search-root ../oxc")]
pub struct RunArgs {
    /// Matrix file listing the pinned repositories
    #[arg(long, short = 'm', value_name = "FILE", default_value = "matrix.yaml")]
    pub matrix: PathBuf,

    /// Directory the checkouts live under
    #[arg(long, short = 'r', value_name = "DIR", default_value = "matrix-repos")]
    pub root: PathBuf,

    /// Name of the binary under test
    #[arg(long, value_name = "NAME", default_value = "oxlint")]
    pub name: String,

    /// Directory searched for the prebuilt binary
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub search_root: PathBuf,

    /// Run only the entry with this name
    #[arg(long, value_name = "ENTRY")]
    pub only: Option<String>,
}
