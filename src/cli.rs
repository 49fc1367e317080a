use clap::{Args, Parser, Subcommand};

use gitregulars::commands::{Active, Backend, Global, Recent};
use gitregulars::config::{
    AnalysisConfig, DEFAULT_MIN_COMMITS, DEFAULT_MIN_RELEASES, DEFAULT_WINDOW,
};

/// 🏷  Who keeps showing up release after release
#[derive(Parser)]
#[command(
    name = "gitregulars",
    version,
    about = "✨ Find the contributors who commit in release after release",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Args)]
pub struct Options {
    /// 📁 Path to the Git repo
    #[arg(short, long, default_value = ".", global = true)]
    pub path: String,

    /// 🔢 Number of most recent releases to analyse
    #[arg(short = 'n', long = "releases", default_value_t = DEFAULT_WINDOW,
          value_parser = parse_window, global = true)]
    pub window: usize,

    /// 🏷  Releases an author must have commits in
    #[arg(long, default_value_t = DEFAULT_MIN_RELEASES, global = true)]
    pub min_releases: usize,

    /// ✍️  Commits needed for a release to count
    #[arg(long, default_value_t = DEFAULT_MIN_COMMITS, global = true)]
    pub min_commits: usize,

    /// 🔌 How to read the repository
    #[arg(long, value_enum, default_value_t = Backend::Git, global = true)]
    pub backend: Backend,

    /// 🧾 JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// 📋 Render authors as a table
    #[arg(long, global = true, conflicts_with = "json")]
    pub table: bool,

    /// 🔊 Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Contributors active in enough recent releases (default)
    Active(Active),

    /// 🆕 Contributors who just qualified with the latest release
    Recent(Recent),
}

impl Options {
    pub fn global(&self) -> Global {
        Global {
            path: self.path.clone(),
            backend: self.backend,
            json: self.json,
            table: self.table,
            config: AnalysisConfig {
                window: self.window,
                min_releases: self.min_releases,
                min_commits: self.min_commits,
            },
        }
    }
}

fn parse_window(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
