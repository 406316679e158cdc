//! Shared test fixtures

#![allow(dead_code)]

mod fake_history;
mod mock_source;

pub use fake_history::FakeHistory;
pub use mock_source::{ListCall, MockMergeRequestSource};

use mr_changelog::config::{Config, PRIVATE_TOKEN_ENV};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Configuration with defaults and a dummy token
pub fn test_config() -> Config {
    Config::from_lookup(|key| (key == PRIVATE_TOKEN_ENV).then(|| "test-token".to_string()))
        .expect("token is set")
}

/// Temporary git repository with helpers for building history
pub struct TempGitRepo {
    dir: TempDir,
}

impl TempGitRepo {
    /// Initialize an empty repository on branch `main`
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Self { dir };
        repo.git(&["init", "--quiet", "--initial-branch=main"]);
        repo
    }

    /// Repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository, panicking on failure
    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args([
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
                "-c",
                "tag.gpgsign=false",
            ])
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Create an empty commit with `message`
    pub fn commit(&self, message: &str) {
        self.git(&["commit", "--quiet", "--allow-empty", "-m", message]);
    }

    /// Create an empty commit carrying a merge request trailer
    pub fn merge_commit(&self, branch: &str, iid: u64) {
        self.commit(&format!(
            "Merge branch '{branch}' into 'main'\n\n{branch}\n\nSee merge request !{iid}"
        ));
    }

    /// Create `branch` at HEAD and switch to it
    pub fn checkout_new_branch(&self, branch: &str) {
        self.git(&["checkout", "--quiet", "-b", branch]);
    }

    /// Switch to an existing branch
    pub fn checkout(&self, branch: &str) {
        self.git(&["checkout", "--quiet", branch]);
    }

    /// Merge `branch` into the current branch with a real merge commit
    /// carrying a merge request trailer
    pub fn merge(&self, branch: &str, iid: u64) {
        let message = format!("Merge branch '{branch}' into 'main'\n\nSee merge request !{iid}");
        self.git(&["merge", "--quiet", "--no-ff", branch, "-m", &message]);
    }

    /// Create a lightweight tag at HEAD
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }
}
