//! Clone command implementation
//!
//! A thin loop over the matrix: shallow-clone every entry's repository and
//! check out its pinned revision. Checkouts that already exist are left
//! alone so CI caches stay valid across runs.

use std::fs;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::CloneArgs;
use crate::error::Result;
use crate::git;
use crate::matrix::MatrixFile;

/// Run the clone command
pub fn run(args: CloneArgs) -> Result<()> {
    let matrix = MatrixFile::load(&args.matrix)?;
    fs::create_dir_all(&args.root)?;

    let pb = ProgressBar::new(matrix.entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut cloned = 0;
    for entry in &matrix.entries {
        pb.set_message(entry.name.clone());
        let dir = entry.checkout_dir(&args.root);

        if dir.join(".git").exists() {
            pb.println(format!("{} already cloned, skipping", entry.name));
            pb.inc(1);
            continue;
        }

        pb.println(format!("Cloning {} at {}", entry.repository, entry.rev));
        let repo = git::clone_shallow(&entry.repository, &dir)?;
        git::checkout_rev(&repo, &entry.rev)?;
        cloned += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "Cloned {} repositories into {} ({} reused)",
        cloned,
        args.root.display(),
        matrix.entries.len() - cloned
    );
    Ok(())
}
