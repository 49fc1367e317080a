use std::collections::HashMap;

use crate::domain::contributions::ContributionTable;

/// Number of releases in which the author reached `min_commits`.
pub fn qualifying_releases(per_release: &HashMap<String, usize>, min_commits: usize) -> usize {
    per_release.values().filter(|&&n| n >= min_commits).count()
}

/// Authors with at least `min_commits` commits in at least `min_releases`
/// releases, each with their full per-release counts.
pub fn filter_active_authors(
    table: &ContributionTable,
    min_releases: usize,
    min_commits: usize,
) -> ContributionTable {
    table
        .iter()
        .filter(|(_, per_release)| qualifying_releases(per_release, min_commits) >= min_releases)
        .map(|(author, per_release)| (author.clone(), per_release.clone()))
        .collect()
}

/// Active authors who would drop below `min_releases` without the latest
/// release, i.e. the latest release is what made them qualify.
pub fn recent_qualifiers(
    table: &ContributionTable,
    releases: &[String],
    min_releases: usize,
    min_commits: usize,
) -> ContributionTable {
    let Some(latest) = releases.first() else {
        return ContributionTable::new();
    };

    table
        .iter()
        .filter(|(_, per_release)| {
            let in_latest = per_release.get(latest).is_some_and(|&n| n >= min_commits);
            if !in_latest {
                return false;
            }
            let total = qualifying_releases(per_release, min_commits);
            total >= min_releases && total - 1 < min_releases
        })
        .map(|(author, per_release)| (author.clone(), per_release.clone()))
        .collect()
}
