//! Install-artifact command implementation

use crate::cli::InstallArtifactArgs;
use crate::error::Result;
use crate::installer::artifact;

/// Run the install-artifact command
pub fn run(args: InstallArtifactArgs) -> Result<()> {
    artifact::install_artifact(&args.search_root, &args.dir, &args.name)?;
    Ok(())
}
