use tracing::debug;

use crate::domain::history::{HistoryResult, ReleaseHistory, RevRange};

/// The `limit` most recent release tags, newest first.
pub fn list_releases(history: &dyn ReleaseHistory, limit: usize) -> HistoryResult<Vec<String>> {
    let raw = history.tags_by_creation_desc()?;
    let releases: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .take(limit)
        .map(String::from)
        .collect();
    debug!(count = releases.len(), limit, "selected releases");
    Ok(releases)
}

/// One author line per commit that `release` added on top of `previous`.
///
/// Without a previous release every commit reachable from `release` counts.
/// Blank lines are passed through untouched; the caller decides what they mean.
pub fn fetch_release_authors(
    history: &dyn ReleaseHistory,
    release: &str,
    previous: Option<&str>,
) -> HistoryResult<Vec<String>> {
    let range = RevRange::for_release(release, previous);
    let raw = history.author_names(&range)?;
    Ok(raw.lines().map(String::from).collect())
}
