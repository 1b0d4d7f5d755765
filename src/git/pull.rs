//! Fast-forward pulls from `origin`

use std::path::Path;

use git2::build::CheckoutBuilder;
use git2::{ErrorCode, FetchOptions, Repository};
use tracing::debug;

use super::auth::remote_callbacks;
use super::error::{GitError, GitFailure};
use super::url::host_of;
use super::{ORIGIN, PullStatus};

/// Fetch the current branch from `origin` and fast-forward onto it.
///
/// Diverged histories are refused rather than merged. The working tree is
/// checked out safely before the branch moves, so local edits that the new
/// commit would overwrite fail the pull and leave branch and files as they
/// were.
pub fn pull(path: &Path) -> Result<PullStatus, GitError> {
    let repo = Repository::open(path)?;
    let shallow = repo.is_shallow();
    let host = repo
        .find_remote(ORIGIN)
        .ok()
        .and_then(|remote| remote.url().and_then(host_of));
    let classify = |e: git2::Error| GitError::from_git2(&e, shallow).with_host(host.clone());

    let head = repo.head().map_err(&classify)?;
    if !head.is_branch() {
        return Err(GitError::new(
            GitFailure::Other,
            "HEAD is detached; check out a branch before updating",
        ));
    }
    let branch = head.shorthand().unwrap_or("HEAD").to_string();

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(remote_callbacks());

    let mut remote = repo.find_remote(ORIGIN).map_err(&classify)?;
    debug!(branch = %branch, shallow, "fetching from origin");
    remote
        .fetch(&[branch.as_str()], Some(&mut fetch_options), None)
        .map_err(&classify)?;

    let fetch_head = repo.find_reference("FETCH_HEAD").map_err(&classify)?;
    let fetch_commit = repo
        .reference_to_annotated_commit(&fetch_head)
        .map_err(&classify)?;
    let (analysis, _) = repo.merge_analysis(&[&fetch_commit]).map_err(&classify)?;

    if analysis.is_up_to_date() {
        return Ok(PullStatus::UpToDate);
    }

    if !analysis.is_fast_forward() {
        return Err(GitError::new(
            GitFailure::Other,
            format!("local branch '{branch}' has diverged from origin; cannot fast-forward"),
        ));
    }

    let target = repo.find_commit(fetch_commit.id()).map_err(&classify)?;
    let mut checkout = CheckoutBuilder::new();
    checkout.safe();
    repo.checkout_tree(target.as_object(), Some(&mut checkout))
        .map_err(|e| match e.code() {
            ErrorCode::Conflict | ErrorCode::MergeConflict => GitError::new(
                GitFailure::Other,
                format!("local changes would be overwritten by the update: {}", e.message()),
            ),
            _ => classify(e),
        })?;

    let refname = format!("refs/heads/{branch}");
    let mut reference = repo.find_reference(&refname).map_err(&classify)?;
    reference
        .set_target(target.id(), "prion: fast-forward")
        .map_err(&classify)?;
    debug!(branch = %branch, commit = %fetch_commit.id(), "fast-forwarded");

    Ok(PullStatus::Updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::clone::clone;
    use crate::test_fixtures::{commit_file, create_source_repo, create_temp_dir};

    #[test]
    fn test_pull_without_changes_is_up_to_date() {
        let temp = create_temp_dir();
        let source = create_source_repo(temp.path(), "vim-sample");
        let checkout = temp.path().join("checkout");
        clone(&source.display().to_string(), &checkout, true).unwrap();

        assert_eq!(pull(&checkout).unwrap(), PullStatus::UpToDate);
    }

    #[test]
    fn test_pull_fast_forwards_new_commits() {
        let temp = create_temp_dir();
        let source = create_source_repo(temp.path(), "vim-sample");
        let checkout = temp.path().join("checkout");
        clone(&source.display().to_string(), &checkout, true).unwrap();

        commit_file(&source, "doc/vim-sample.txt", "*vim-sample*\n", "Add docs");

        assert_eq!(pull(&checkout).unwrap(), PullStatus::Updated);
        assert!(checkout.join("doc/vim-sample.txt").is_file());
        assert_eq!(pull(&checkout).unwrap(), PullStatus::UpToDate);
    }

    #[test]
    fn test_pull_keeps_unrelated_local_edits() {
        let temp = create_temp_dir();
        let source = create_source_repo(temp.path(), "vim-sample");
        let checkout = temp.path().join("checkout");
        clone(&source.display().to_string(), &checkout, true).unwrap();
        let local = checkout.join("plugin/vim-sample.vim");
        std::fs::write(&local, "\" my local tweak\n").unwrap();

        commit_file(&source, "doc/vim-sample.txt", "*vim-sample*\n", "Add docs");

        assert_eq!(pull(&checkout).unwrap(), PullStatus::Updated);
        assert!(checkout.join("doc/vim-sample.txt").is_file());
        assert_eq!(std::fs::read_to_string(&local).unwrap(), "\" my local tweak\n");
    }

    #[test]
    fn test_pull_refuses_to_overwrite_local_edits() {
        let temp = create_temp_dir();
        let source = create_source_repo(temp.path(), "vim-sample");
        let checkout = temp.path().join("checkout");
        clone(&source.display().to_string(), &checkout, true).unwrap();
        let head_before = Repository::open(&checkout)
            .unwrap()
            .head()
            .unwrap()
            .target()
            .unwrap();
        let local = checkout.join("plugin/vim-sample.vim");
        std::fs::write(&local, "\" my local tweak\n").unwrap();

        commit_file(&source, "plugin/vim-sample.vim", "\" upstream v2\n", "Rewrite plugin");

        let err = pull(&checkout).unwrap_err();
        assert_eq!(err.kind, GitFailure::Other);
        assert_eq!(std::fs::read_to_string(&local).unwrap(), "\" my local tweak\n");
        let head_after = Repository::open(&checkout)
            .unwrap()
            .head()
            .unwrap()
            .target()
            .unwrap();
        assert_eq!(head_before, head_after, "branch must not move");
    }

    #[test]
    fn test_pull_outside_repository_fails() {
        let temp = create_temp_dir();
        let err = pull(temp.path()).unwrap_err();
        assert!(!err.message.is_empty());
    }
}
