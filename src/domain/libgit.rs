use std::path::PathBuf;

use git2::{Oid, Repository, Sort};
use tracing::debug;

use crate::domain::history::{HistoryError, HistoryResult, ReleaseHistory, RevRange};

/// In-process history backend on top of libgit2.
///
/// Mirrors what `git tag --sort=-creatordate` and `git log --pretty=%an`
/// print, for machines without a `git` binary. The repository is re-opened
/// per query so a bad path fails the query, not construction.
#[derive(Debug, Clone)]
pub struct LibGit {
    repo_path: PathBuf,
}

impl LibGit {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    fn open(&self) -> HistoryResult<Repository> {
        Ok(Repository::discover(&self.repo_path)?)
    }
}

/// Creation time of a tag: tagger date for annotated tags, committer date of
/// the target commit for lightweight ones.
fn tag_created(repo: &Repository, name: &str) -> HistoryResult<i64> {
    let object = repo.revparse_single(&format!("refs/tags/{name}"))?;
    if let Some(tagger) = object.as_tag().and_then(|tag| tag.tagger()) {
        return Ok(tagger.when().seconds());
    }
    Ok(object.peel_to_commit()?.committer().when().seconds())
}

fn resolve_commit(repo: &Repository, rev: &str) -> HistoryResult<Oid> {
    let object = repo
        .revparse_single(rev)
        .map_err(|_| HistoryError::UnknownRevision(rev.to_string()))?;
    Ok(object.peel_to_commit()?.id())
}

impl ReleaseHistory for LibGit {
    fn tags_by_creation_desc(&self) -> HistoryResult<String> {
        let repo = self.open()?;
        let names = repo.tag_names(None)?;

        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            tags.push((tag_created(&repo, name)?, name.to_string()));
        }
        // newest first, ties by name like git's refname fallback
        tags.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        debug!(count = tags.len(), "listed tags");

        Ok(tags
            .into_iter()
            .map(|(_, name)| name)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn author_names(&self, range: &RevRange) -> HistoryResult<String> {
        let repo = self.open()?;
        let mut walk = repo.revwalk()?;
        walk.set_sorting(Sort::TIME)?;
        walk.push(resolve_commit(&repo, range.release())?)?;
        if let RevRange::Between { previous, .. } = range {
            walk.hide(resolve_commit(&repo, previous)?)?;
        }

        let mut names = Vec::new();
        for oid in walk {
            let commit = repo.find_commit(oid?)?;
            names.push(String::from_utf8_lossy(commit.author().name_bytes()).into_owned());
        }
        debug!(%range, commits = names.len(), "walked range");
        Ok(names.join("\n"))
    }
}
