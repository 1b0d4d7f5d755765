//! Repository cloning

use std::path::Path;

use git2::FetchOptions;
use git2::build::RepoBuilder;
use tracing::debug;

use super::auth::remote_callbacks;
use super::error::GitError;
use super::url::{host_of, is_local_url, normalize_file_url_for_clone, normalize_ssh_url_for_clone};

/// Clone `url` into `target`, which must be missing or an empty directory.
///
/// Remote sources are cloned with `depth = 1` when `shallow` is set; local
/// sources always get full history.
pub fn clone(url: &str, target: &Path, shallow: bool) -> Result<(), GitError> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(remote_callbacks());

    let shallow = shallow && !is_local_url(url);
    if shallow {
        fetch_options.depth(1);
    }

    let url_to_clone = normalize_ssh_url_for_clone(url);
    let url_to_clone = normalize_file_url_for_clone(&url_to_clone);
    debug!(url = %url_to_clone, target = %target.display(), shallow, "cloning");

    RepoBuilder::new()
        .fetch_options(fetch_options)
        .clone(url_to_clone.as_ref(), target)
        .map(|_| ())
        .map_err(|e| GitError::from_git2(&e, false).with_host(host_of(url)))
}
