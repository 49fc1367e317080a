//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use git2::{Repository, Signature, Time};
use tempfile::TempDir;

use crate::domain::history::{HistoryError, HistoryResult, ReleaseHistory, RevRange};

/// Canned-text history. Tags and ranges that were not registered fail.
#[derive(Default)]
pub(crate) struct FakeHistory {
    tags: Option<String>,
    authors: HashMap<String, String>,
    pub queried: RefCell<Vec<RevRange>>,
}

impl FakeHistory {
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            tags: Some(tags.join("\n")),
            ..Self::default()
        }
    }

    pub fn with_raw_tags(raw: &str) -> Self {
        Self {
            tags: Some(raw.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_tags() -> Self {
        Self::default()
    }

    pub fn authors(mut self, range: &str, names: &[&str]) -> Self {
        self.authors.insert(range.to_string(), names.join("\n"));
        self
    }
}

impl ReleaseHistory for FakeHistory {
    fn tags_by_creation_desc(&self) -> HistoryResult<String> {
        self.tags.clone().ok_or_else(|| HistoryError::Exit {
            args: "tag --list --sort=-creatordate".into(),
            code: Some(128),
            stderr: "fatal: not a git repository".into(),
        })
    }

    fn author_names(&self, range: &RevRange) -> HistoryResult<String> {
        self.queried.borrow_mut().push(range.clone());
        self.authors
            .get(&range.to_string())
            .cloned()
            .ok_or_else(|| HistoryError::UnknownRevision(range.to_string()))
    }
}

/// Throw-away repository with fully controlled signatures and timestamps.
pub(crate) struct TestRepo {
    dir: TempDir,
    repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn commit(&self, author: &str, seconds: i64) -> git2::Oid {
        let sig = signature(author, seconds);
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, author, &tree, &parents)
            .unwrap()
    }

    /// Lightweight tag on HEAD; its creation date is the commit date.
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel(git2::ObjectType::Commit).unwrap();
        self.repo.tag_lightweight(name, &head, false).unwrap();
    }

    /// Annotated tag on HEAD, created at `seconds`.
    pub fn annotated_tag(&self, name: &str, seconds: i64) {
        let head = self.repo.head().unwrap().peel(git2::ObjectType::Commit).unwrap();
        let tagger = signature("Release Bot", seconds);
        self.repo.tag(name, &head, &tagger, name, false).unwrap();
    }
}

fn signature(name: &str, seconds: i64) -> Signature<'static> {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Signature::new(name, &email, &Time::new(seconds, 0)).unwrap()
}
