//! GitHub API types.

use serde::{Deserialize, Serialize};

/// The authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Login name.
    pub login: String,
}

/// A label attached to an issue or pull request.
///
/// Only the name is consumed; colour and description are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

impl Label {
    /// Create a label from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body (Markdown).
    pub body: Option<String>,

    /// Labels on the issue.
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// A GitHub pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number.
    pub number: u64,

    /// PR title.
    pub title: String,

    /// Labels on the PR.
    pub labels: Vec<Label>,

    /// Head branch name.
    pub head_ref: String,

    /// Base branch name.
    pub base_ref: String,
}

/// Result of comparing two refs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comparison {
    /// Files changed between the refs.
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

impl Comparison {
    /// Sum of the per-file change counts.
    #[must_use]
    pub fn total_changes(&self) -> u64 {
        self.files.iter().map(|f| f.changes).sum()
    }
}

/// A single file in a comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
    /// Path of the file.
    pub filename: String,

    /// Lines added plus lines removed.
    #[serde(default)]
    pub changes: u64,
}

/// Request to add labels to an issue or PR.
#[derive(Debug, Serialize)]
pub struct AddLabels {
    /// Label names to add.
    pub labels: Vec<String>,
}
