use std::collections::HashMap;
use std::fmt;

use tracing::{info, warn};

use crate::domain::history::ReleaseHistory;
use crate::domain::releases::{fetch_release_authors, list_releases};

/// author -> release -> commits in that release
pub type ContributionTable = HashMap<String, HashMap<String, usize>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailedStep {
    Releases,
    Authors { release: String },
}

/// A history query that failed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub step: FailedStep,
    pub message: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.step {
            FailedStep::Releases => write!(f, "Error getting releases: {}", self.message),
            FailedStep::Authors { release } => write!(
                f,
                "Error getting commits for release {release}: {}",
                self.message
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Contributions {
    pub table: ContributionTable,
    /// Releases that were analysed, newest first.
    pub releases: Vec<String>,
    pub failures: Vec<FetchFailure>,
}

/// Tally commits per author per release over the last `window` releases.
///
/// Query failures never abort the tally. A failed tag listing leaves nothing to
/// analyse, and a failed author query leaves that release out of every
/// author's counts. Each failure is kept in [`Contributions::failures`].
pub fn count_commits_per_author(history: &dyn ReleaseHistory, window: usize) -> Contributions {
    let mut out = Contributions::default();

    out.releases = match list_releases(history, window) {
        Ok(releases) => releases,
        Err(e) => {
            warn!(error = %e, "could not list releases");
            out.failures.push(FetchFailure {
                step: FailedStep::Releases,
                message: e.to_string(),
            });
            Vec::new()
        }
    };

    for (i, release) in out.releases.iter().enumerate() {
        let previous = out.releases.get(i + 1).map(String::as_str);

        let authors = match fetch_release_authors(history, release, previous) {
            Ok(authors) => authors,
            Err(e) => {
                warn!(%release, error = %e, "could not read release authors");
                out.failures.push(FetchFailure {
                    step: FailedStep::Authors {
                        release: release.clone(),
                    },
                    message: e.to_string(),
                });
                continue;
            }
        };

        for author in authors {
            if author.trim().is_empty() {
                continue;
            }
            *out.table
                .entry(author)
                .or_default()
                .entry(release.clone())
                .or_default() += 1;
        }
    }

    info!(
        releases = out.releases.len(),
        authors = out.table.len(),
        failures = out.failures.len(),
        "tallied contributions"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::RevRange;
    use crate::domain::testing::FakeHistory;

    fn three_releases() -> FakeHistory {
        FakeHistory::with_tags(&["v3", "v2", "v1"])
            .authors("v2..v3", &["Alice", "Bob", "Alice"])
            .authors("v1..v2", &["Bob", ""])
            .authors("v1", &["Alice", "Carol"])
    }

    #[test]
    fn queries_each_release_against_its_predecessor() {
        let history = three_releases();
        count_commits_per_author(&history, 20);

        let queried = history.queried.borrow();
        assert_eq!(
            queried.as_slice(),
            [
                RevRange::for_release("v3", Some("v2")),
                RevRange::for_release("v2", Some("v1")),
                RevRange::for_release("v1", None),
            ]
        );
    }

    #[test]
    fn tallies_commits_per_release() {
        let c = count_commits_per_author(&three_releases(), 20);

        assert_eq!(c.releases, ["v3", "v2", "v1"]);
        assert!(c.failures.is_empty());
        assert_eq!(c.table.len(), 3);
        assert_eq!(c.table["Alice"], HashMap::from([("v3".into(), 2), ("v1".into(), 1)]));
        assert_eq!(c.table["Bob"], HashMap::from([("v3".into(), 1), ("v2".into(), 1)]));
        assert_eq!(c.table["Carol"], HashMap::from([("v1".into(), 1)]));
    }

    #[test]
    fn window_limits_the_oldest_release() {
        let history = FakeHistory::with_tags(&["v3", "v2", "v1"])
            .authors("v2..v3", &["Alice"])
            .authors("v2", &["Bob", "Alice"]);
        let c = count_commits_per_author(&history, 2);

        assert_eq!(c.releases, ["v3", "v2"]);
        assert_eq!(c.table["Bob"], HashMap::from([("v2".into(), 1)]));
        assert_eq!(c.table["Alice"].len(), 2);
    }

    #[test]
    fn blank_authors_are_never_recorded() {
        let history = FakeHistory::with_tags(&["v1"]).authors("v1", &["", "  ", ""]);
        let c = count_commits_per_author(&history, 20);
        assert!(c.table.is_empty());
        assert!(!c.table.contains_key(""));
    }

    #[test]
    fn release_keys_come_from_release_list() {
        let c = count_commits_per_author(&three_releases(), 20);
        for releases in c.table.values() {
            assert!(releases.keys().all(|r| c.releases.contains(r)));
            assert!(releases.values().all(|n| *n > 0));
        }
    }

    #[test]
    fn listing_failure_yields_empty_tally() {
        let c = count_commits_per_author(&FakeHistory::failing_tags(), 20);
        assert!(c.releases.is_empty());
        assert!(c.table.is_empty());
        assert_eq!(c.failures.len(), 1);
        assert_eq!(c.failures[0].step, FailedStep::Releases);
        assert!(c.failures[0]
            .to_string()
            .starts_with("Error getting releases: "));
    }

    #[test]
    fn failed_release_contributes_nothing() {
        let history = FakeHistory::with_tags(&["v3", "v2", "v1"])
            .authors("v2..v3", &["Alice"])
            .authors("v1", &["Alice"]);
        let c = count_commits_per_author(&history, 20);

        assert_eq!(c.releases, ["v3", "v2", "v1"]);
        assert_eq!(c.table["Alice"], HashMap::from([("v3".into(), 1), ("v1".into(), 1)]));
        assert_eq!(
            c.failures,
            [FetchFailure {
                step: FailedStep::Authors {
                    release: "v2".into()
                },
                message: "unknown revision: v1..v2".into(),
            }]
        );
        assert_eq!(
            c.failures[0].to_string(),
            "Error getting commits for release v2: unknown revision: v1..v2"
        );
    }

    #[test]
    fn aggregation_is_repeatable() {
        let first = count_commits_per_author(&three_releases(), 20);
        let second = count_commits_per_author(&three_releases(), 20);
        assert_eq!(first.table, second.table);
        assert_eq!(first.releases, second.releases);
    }
}
