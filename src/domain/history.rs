use std::fmt;

use thiserror::Error;

/// Commit range whose authors make up one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevRange {
    /// Everything reachable from the release (oldest analysed release).
    Ancestors(String),
    /// Reachable from `release` but not from `previous`.
    Between { previous: String, release: String },
}

impl RevRange {
    pub fn for_release(release: &str, previous: Option<&str>) -> Self {
        match previous {
            Some(previous) => Self::Between {
                previous: previous.to_string(),
                release: release.to_string(),
            },
            None => Self::Ancestors(release.to_string()),
        }
    }

    pub fn release(&self) -> &str {
        match self {
            Self::Ancestors(release) | Self::Between { release, .. } => release,
        }
    }
}

impl fmt::Display for RevRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestors(release) => write!(f, "{release}"),
            Self::Between { previous, release } => write!(f, "{previous}..{release}"),
        }
    }
}

/// Every way a history query can fail. All of them are recoverable: the
/// pipeline drops the affected data and keeps going.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to run `git {args}`: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {args}` failed ({}): {stderr}", describe_exit(.code))]
    Exit {
        args: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("unknown revision: {0}")]
    UnknownRevision(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// The two read-only questions the analysis asks of a repository.
///
/// Answers come back as raw newline-separated text, exactly as `git` would
/// print them, so callers own the parsing.
pub trait ReleaseHistory {
    /// Tag names, most recently created first.
    fn tags_by_creation_desc(&self) -> HistoryResult<String>;

    /// Author display name of every commit in `range`, one per line.
    fn author_names(&self, range: &RevRange) -> HistoryResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_display_matches_git_syntax() {
        assert_eq!(RevRange::for_release("v2", Some("v1")).to_string(), "v1..v2");
        assert_eq!(RevRange::for_release("v1", None).to_string(), "v1");
    }

    #[test]
    fn range_knows_its_release() {
        assert_eq!(RevRange::for_release("v2", Some("v1")).release(), "v2");
        assert_eq!(RevRange::Ancestors("v0.1".into()).release(), "v0.1");
    }

    #[test]
    fn exit_error_mentions_status_and_stderr() {
        let err = HistoryError::Exit {
            args: "log v1..v2".into(),
            code: Some(128),
            stderr: "fatal: bad revision".into(),
        };
        assert_eq!(
            err.to_string(),
            "`git log v1..v2` failed (exit status 128): fatal: bad revision"
        );

        let killed = HistoryError::Exit {
            args: "tag".into(),
            code: None,
            stderr: String::new(),
        };
        assert!(killed.to_string().contains("terminated by signal"));
    }
}
