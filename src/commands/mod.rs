use anyhow::Result;
use clap::ValueEnum;

use crate::config::AnalysisConfig;
use crate::domain::{git_cli::GitCli, history::ReleaseHistory, libgit::LibGit};
use crate::presentation::{table, Report};

/// Where history answers come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Run the `git` binary
    #[default]
    Git,
    /// Read the repository in-process with libgit2
    Libgit2,
}

#[derive(Debug, Clone, Default)]
pub struct Global {
    /// Repository to analyse
    pub path: String,
    pub backend: Backend,
    /// JSON output instead of text
    pub json: bool,
    /// Render authors as a table
    pub table: bool,
    pub config: AnalysisConfig,
}

impl Global {
    pub fn history(&self) -> Box<dyn ReleaseHistory> {
        match self.backend {
            Backend::Git => Box::new(GitCli::new(&self.path)),
            Backend::Libgit2 => Box::new(LibGit::new(&self.path)),
        }
    }

    /// Render the report in the selected output format.
    pub fn render(&self, report: &Report<'_>) -> Result<String> {
        if self.json {
            Ok(report.to_json()?)
        } else if self.table {
            Ok(table::render(report))
        } else {
            Ok(report.to_text())
        }
    }
}

pub trait Runnable {
    fn run(self, g: &Global) -> Result<()>;
}

pub mod active;
pub mod recent;

pub use active::Active;
pub use recent::Recent;
