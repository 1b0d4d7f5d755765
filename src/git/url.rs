//! URL handling for git operations
//!
//! This module handles:
//! - Normalizing SCP-style SSH URLs (`git@host:path`) to `ssh://` form for libgit2
//! - Normalizing `file://` URLs
//! - Telling local sources apart from remote ones
//! - Extracting the host of a remote URL for diagnostics

use std::borrow::Cow;
use std::path::Path;

/// Whether `url` points at a repository on the local filesystem.
///
/// Shallow clones are not supported for local sources.
pub fn is_local_url(url: &str) -> bool {
    url.starts_with("file://")
        || url.starts_with('/')
        || url.starts_with("./")
        || url.starts_with("../")
        || Path::new(url).is_absolute()
        || (!url.contains("://") && !is_scp_style(url) && Path::new(url).exists())
}

/// Normalize SSH URLs from SCP-style (git@host:path) to ssh:// format.
pub fn normalize_ssh_url_for_clone(url: &str) -> Cow<'_, str> {
    if !is_scp_style(url) {
        return Cow::Borrowed(url);
    }

    match url.split_once(':') {
        Some((host_part, path_part)) => {
            let path = path_part.strip_prefix('/').unwrap_or(path_part);
            Cow::Owned(format!("ssh://{host_part}/{path}"))
        }
        None => Cow::Borrowed(url),
    }
}

/// Normalize file:// URLs so libgit2 can resolve them.
pub fn normalize_file_url_for_clone(url: &str) -> Cow<'_, str> {
    let Some(after) = url.strip_prefix("file://") else {
        return Cow::Borrowed(url);
    };
    if after.contains('\\') {
        let path = after.replace('\\', "/");
        return Cow::Owned(format!("file:///{}", path.trim_start_matches('/')));
    }
    if !after.is_empty() && !after.starts_with('/') {
        return Cow::Owned(format!("file:///{after}"));
    }
    Cow::Borrowed(url)
}

/// Host name of a remote URL, if it has one.
///
/// `https://github.com/o/r.git` and `git@github.com:o/r.git` both give `github.com`.
pub fn host_of(url: &str) -> Option<String> {
    if is_local_url(url) {
        return None;
    }

    let authority = if let Some((_, rest)) = url.split_once("://") {
        rest.split('/').next()?
    } else if is_scp_style(url) {
        url.split(':').next()?
    } else {
        return None;
    };

    let host = authority.rsplit('@').next()?;
    let host = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    };

    (!host.is_empty()).then(|| host.to_string())
}

/// `user@host:path` without a scheme.
fn is_scp_style(url: &str) -> bool {
    if url.contains("://") {
        return false;
    }
    match (url.find('@'), url.find(':')) {
        (Some(at), Some(colon)) => at < colon,
        _ => false,
    }
}
