/// How many of the most recent releases to look at.
pub const DEFAULT_WINDOW: usize = 20;
/// Releases an author must appear in to count as active.
pub const DEFAULT_MIN_RELEASES: usize = 3;
/// Commits needed within a release for that release to count.
pub const DEFAULT_MIN_COMMITS: usize = 1;

/// Release window and thresholds for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub window: usize,
    pub min_releases: usize,
    pub min_commits: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            min_releases: DEFAULT_MIN_RELEASES,
            min_commits: DEFAULT_MIN_COMMITS,
        }
    }
}
