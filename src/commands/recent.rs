use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::Global;
use crate::domain::{activity, contributions};
use crate::presentation::{Report, ReportMode};

/// Authors who reached the thresholds with the latest release.
///
/// Authors who would still be active without the latest release are left out.
#[derive(Debug, Default, Args)]
pub struct Recent {}

impl super::Runnable for Recent {
    fn run(self, g: &Global) -> Result<()> {
        let cfg = g.config;
        let history = g.history();
        let c = contributions::count_commits_per_author(&*history, cfg.window);
        let recent =
            activity::recent_qualifiers(&c.table, &c.releases, cfg.min_releases, cfg.min_commits);
        info!(latest = ?c.releases.first(), recent = recent.len(), "filtered recent qualifiers");

        let report = Report {
            mode: ReportMode::RecentQualifiers,
            config: cfg,
            releases: &c.releases,
            authors: &recent,
            failures: &c.failures,
        };
        println!("{}", g.render(&report)?);
        Ok(())
    }
}
