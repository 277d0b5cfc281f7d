//! Shallow cloning and pinned-revision checkout of matrix targets.

use std::path::Path;

use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::{FetchOptions, Repository};

use crate::error::{LintmatrixError, Result};

/// Clone a repository with depth 1.
///
/// Matrix targets are large real-world repositories; full history is never
/// needed for a lint run.
pub fn clone_shallow(url: &str, target: &Path) -> Result<Repository> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.depth(1);

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    builder
        .clone(url, target)
        .map_err(|err| LintmatrixError::GitCloneFailed {
            url: url.to_string(),
            reason: err.message().to_string(),
        })
}

/// Check out a pinned revision, detached.
///
/// The pinned commit can fall outside the shallow history of the default
/// branch; in that case it is fetched directly before checkout.
pub fn checkout_rev(repo: &Repository, rev: &str) -> Result<()> {
    let object = match repo.revparse_single(rev) {
        Ok(object) => object,
        Err(_) => {
            let mut remote =
                repo.find_remote("origin")
                    .map_err(|err| LintmatrixError::GitCheckoutFailed {
                        rev: rev.to_string(),
                        reason: err.message().to_string(),
                    })?;
            remote
                .fetch(&[rev], None, None)
                .map_err(|err| LintmatrixError::GitCheckoutFailed {
                    rev: rev.to_string(),
                    reason: err.message().to_string(),
                })?;
            repo.revparse_single(rev)
                .map_err(|err| LintmatrixError::GitCheckoutFailed {
                    rev: rev.to_string(),
                    reason: err.message().to_string(),
                })?
        }
    };

    repo.checkout_tree(&object, Some(CheckoutBuilder::new().force()))
        .map_err(|err| LintmatrixError::GitCheckoutFailed {
            rev: rev.to_string(),
            reason: err.message().to_string(),
        })?;
    repo.set_head_detached(object.id())
        .map_err(|err| LintmatrixError::GitCheckoutFailed {
            rev: rev.to_string(),
            reason: err.message().to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed_repo(dir: &Path) -> (Repository, git2::Oid) {
        let repo = Repository::init(dir).unwrap();
        std::fs::write(dir.join("file.txt"), "one").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let oid = {
            let tree = repo.find_tree(tree_id).unwrap();
            let sig = git2::Signature::now("ci", "ci@example.com").unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap()
        };
        (repo, oid)
    }

    #[test]
    fn test_checkout_rev_detaches_head() {
        let temp = TempDir::new().unwrap();
        let (repo, oid) = seed_repo(temp.path());

        checkout_rev(&repo, &oid.to_string()).unwrap();
        assert!(repo.head_detached().unwrap());
        assert_eq!(repo.head().unwrap().target(), Some(oid));
    }

    #[test]
    fn test_checkout_unknown_rev_fails() {
        let temp = TempDir::new().unwrap();
        let (repo, _) = seed_repo(temp.path());

        let err = checkout_rev(&repo, "0000000000000000000000000000000000000000").unwrap_err();
        assert!(matches!(err, LintmatrixError::GitCheckoutFailed { .. }));
    }
}
