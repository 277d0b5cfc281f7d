use clap::Parser;
use std::path::PathBuf;

/// Arguments for the clone command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Clone the default matrix:\n    lintmatrix clone\n\n\
                  Clone into a custom root:\n    lintmatrix clone --root /ci/checkouts")]
pub struct CloneArgs {
    /// Matrix file listing the pinned repositories
    #[arg(long, short = 'm', value_name = "FILE", default_value = "matrix.yaml")]
    pub matrix: PathBuf,

    /// Directory the checkouts are created under
    #[arg(long, short = 'r', value_name = "DIR", default_value = "matrix-repos")]
    pub root: PathBuf,
}
