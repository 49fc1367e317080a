use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::domain::activity::qualifying_releases;
use crate::domain::contributions::{ContributionTable, FetchFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    Active,
    RecentQualifiers,
}

/// A filtered contribution table plus everything needed to describe it.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub mode: ReportMode,
    pub config: AnalysisConfig,
    pub releases: &'a [String],
    pub authors: &'a ContributionTable,
    pub failures: &'a [FetchFailure],
}

/// One author's row: name and (release, commits) newest first.
pub type AuthorRow<'a> = (&'a str, Vec<(&'a str, usize)>);

impl<'a> Report<'a> {
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Header line, or the "nobody matched" line when the report is empty.
    pub fn heading(&self) -> String {
        let AnalysisConfig {
            window,
            min_releases,
            min_commits,
        } = self.config;
        match (self.mode, self.is_empty()) {
            (ReportMode::Active, false) => format!(
                "Contributors with at least {min_commits} commits in at least {min_releases} of the last {window} releases:"
            ),
            (ReportMode::Active, true) => format!(
                "No contributors with at least {min_commits} commits in at least {min_releases} of the last {window} releases"
            ),
            (ReportMode::RecentQualifiers, false) => format!(
                "New contributors who just met the criteria in the latest release ({min_commits} commits in {min_releases} releases):"
            ),
            (ReportMode::RecentQualifiers, true) => format!(
                "No new contributors who just met the criteria in the latest release ({min_commits} commits in {min_releases} releases)"
            ),
        }
    }

    /// Authors by name; each author's releases in analysis order.
    pub fn rows(&self) -> Vec<AuthorRow<'a>> {
        let position = |release: &str| {
            self.releases
                .iter()
                .position(|r| r == release)
                .unwrap_or(usize::MAX)
        };

        let mut rows: Vec<AuthorRow<'a>> = self
            .authors
            .iter()
            .map(|(author, per_release)| {
                let mut releases: Vec<(&str, usize)> = per_release
                    .iter()
                    .map(|(release, n)| (release.as_str(), *n))
                    .collect();
                releases.sort_by(|a, b| position(a.0).cmp(&position(b.0)).then_with(|| a.0.cmp(b.0)));
                (author.as_str(), releases)
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    pub fn qualifying(&self, author: &str) -> usize {
        self.authors
            .get(author)
            .map_or(0, |per_release| qualifying_releases(per_release, self.config.min_commits))
    }

    /// Plain text: recovered errors, then the heading, then one line per author.
    pub fn to_text(&self) -> String {
        let mut lines: Vec<String> = self.failures.iter().map(ToString::to_string).collect();
        lines.push(self.heading());
        for (author, releases) in self.rows() {
            let info: Vec<String> = releases
                .iter()
                .map(|(release, n)| format!("{release} ({n} commits)"))
                .collect();
            lines.push(format!("{author}: {}", info.join(", ")));
        }
        lines.join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let authors = self
            .rows()
            .into_iter()
            .map(|(author, releases)| JsonAuthor {
                author,
                qualifying_releases: self.qualifying(author),
                releases: releases
                    .into_iter()
                    .map(|(release, commits)| JsonRelease { release, commits })
                    .collect(),
            })
            .collect();

        let payload = JsonReport {
            mode: self.mode,
            window: self.config.window,
            min_releases: self.config.min_releases,
            min_commits: self.config.min_commits,
            releases: self.releases,
            errors: self.failures.iter().map(ToString::to_string).collect(),
            authors,
        };
        serde_json::to_string_pretty(&payload)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    mode: ReportMode,
    window: usize,
    min_releases: usize,
    min_commits: usize,
    releases: &'a [String],
    errors: Vec<String>,
    authors: Vec<JsonAuthor<'a>>,
}

#[derive(Serialize)]
struct JsonAuthor<'a> {
    author: &'a str,
    qualifying_releases: usize,
    releases: Vec<JsonRelease<'a>>,
}

#[derive(Serialize)]
struct JsonRelease<'a> {
    release: &'a str,
    commits: usize,
}
