//! Package names from source URLs

use crate::error::{Result, package};

/// Canonical package name for a source URL: the last path segment without
/// a trailing `.git`.
///
/// Works for `https://host/owner/repo.git`, `git@host:owner/repo.git`,
/// `git@host:repo.git` and local paths. Names starting with `.` are
/// rejected. URLs that end in the same segment
/// map to the same name, so they cannot be installed side by side.
pub fn derive_name(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches(['/', '\\']);
    let segment = trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed);
    // scp-style without a path separator: git@host:repo.git
    let segment = match segment.rsplit_once(':') {
        Some((_, rest)) if !trimmed.contains("://") => rest,
        _ => segment,
    };
    let name = segment.strip_suffix(".git").unwrap_or(segment);

    // Hidden names would never show up in the bundle listing.
    if name.is_empty() || name.starts_with('.') {
        return Err(package::invalid_source_url(url));
    }
    Ok(name.to_string())
}
