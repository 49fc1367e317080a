use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::Global;
use crate::domain::{activity, contributions};
use crate::presentation::{Report, ReportMode};

/// Authors with enough commits in enough of the recent releases.
///
/// This is what runs when no subcommand is given.
#[derive(Debug, Default, Args)]
pub struct Active {}

impl super::Runnable for Active {
    fn run(self, g: &Global) -> Result<()> {
        let cfg = g.config;
        let history = g.history();
        let c = contributions::count_commits_per_author(&*history, cfg.window);
        let active = activity::filter_active_authors(&c.table, cfg.min_releases, cfg.min_commits);
        info!(active = active.len(), "filtered active authors");

        let report = Report {
            mode: ReportMode::Active,
            config: cfg,
            releases: &c.releases,
            authors: &active,
            failures: &c.failures,
        };
        println!("{}", g.render(&report)?);
        Ok(())
    }
}
