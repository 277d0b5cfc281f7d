use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install-plugins command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve plugins from an explicit command line:\n    \
                  lintmatrix install-plugins --dir repos/vscode --command 'oxlint -c .oxlintrc.json src'\n\n\
                  Resolve plugins from the CI-provided command:\n    \
                  LINTMATRIX_COMMAND='oxlint src' lintmatrix install-plugins --dir repos/vscode")]
pub struct InstallPluginsArgs {
    /// Target checkout directory
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: PathBuf,

    /// Command line whose lint configs are resolved. Empty or unset means
    /// there is nothing to install.
    #[arg(long, short = 'c', value_name = "COMMAND", env = "LINTMATRIX_COMMAND")]
    pub command: Option<String>,
}
