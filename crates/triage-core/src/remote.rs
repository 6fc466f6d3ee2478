//! The repository operations workflows need.

use async_trait::async_trait;
use triage_github::{Comparison, GitHubClient, Issue, PullRequest, Result};

/// Read and label access to one hosted repository.
#[async_trait]
pub trait Remote: Sync {
    /// List open issues.
    async fn list_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>>;

    /// List open pull requests.
    async fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>>;

    /// Compare `head` against `base`.
    async fn compare(&self, owner: &str, repo: &str, base: &str, head: &str)
    -> Result<Comparison>;

    /// Add a label to an issue or pull request.
    async fn add_label(&self, owner: &str, repo: &str, number: u64, label: &str) -> Result<()>;

    /// Remove a label from an issue or pull request.
    async fn remove_label(&self, owner: &str, repo: &str, number: u64, label: &str)
    -> Result<()>;
}

#[async_trait]
impl Remote for GitHubClient {
    async fn list_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        Self::list_issues(self, owner, repo).await
    }

    async fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
        Self::list_pull_requests(self, owner, repo).await
    }

    async fn compare(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Comparison> {
        Self::compare(self, owner, repo, base, head).await
    }

    async fn add_label(&self, owner: &str, repo: &str, number: u64, label: &str) -> Result<()> {
        self.add_labels(owner, repo, number, &[label]).await?;
        Ok(())
    }

    async fn remove_label(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        label: &str,
    ) -> Result<()> {
        Self::remove_label(self, owner, repo, number, label).await
    }
}
