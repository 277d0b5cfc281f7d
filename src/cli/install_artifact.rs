use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install-artifact command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Place a release build into a checkout:\n    \
                  lintmatrix install-artifact --dir repos/vscode\n\n\
                  Search a different build tree:\n    \
                  lintmatrix install-artifact --dir repos/vscode --search-root ../oxc")]
pub struct InstallArtifactArgs {
    /// Target checkout directory
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: PathBuf,

    /// Name of the binary under test
    #[arg(long, value_name = "NAME", default_value = "oxlint")]
    pub name: String,

    /// Directory searched for the prebuilt binary
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub search_root: PathBuf,
}
