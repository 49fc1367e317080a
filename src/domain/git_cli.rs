use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::domain::history::{HistoryError, HistoryResult, ReleaseHistory, RevRange};

/// Answers history queries by running the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_path: PathBuf,
    program: OsString,
}

impl GitCli {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            program: OsString::from("git"),
        }
    }

    /// Use another executable in place of `git`.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn run(&self, args: &[&str]) -> HistoryResult<String> {
        debug!(repo = %self.repo_path.display(), ?args, "running git");
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .output()
            .map_err(|source| HistoryError::Spawn {
                args: args.join(" "),
                source,
            })?;

        if !output.status.success() {
            return Err(HistoryError::Exit {
                args: args.join(" "),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ReleaseHistory for GitCli {
    fn tags_by_creation_desc(&self) -> HistoryResult<String> {
        self.run(&["tag", "--list", "--sort=-creatordate"])
    }

    fn author_names(&self, range: &RevRange) -> HistoryResult<String> {
        let range = range.to_string();
        // trailing `--` keeps a tag named like a file from being read as a path
        self.run(&["log", "--pretty=format:%an", &range, "--"])
    }
}
