//! Triage configuration.
//!
//! Everything is compiled in. The value is built once at startup and passed
//! by reference into each workflow.

/// Repository owner that triage operates on.
pub const OWNER: &str = "kmwyatt";

/// Repository that triage operates on.
pub const REPO: &str = "github-cli-practice";

/// Label applied to oversized pull requests.
pub const LABEL_TOO_BIG: &str = "too-big";

/// Label marking bug reports.
pub const LABEL_BUG: &str = "bug";

/// Label applied to bug reports without a screenshot.
pub const LABEL_NEEDS_SCREENSHOT: &str = "needs-screenshot";

/// Pull requests with more changed lines than this are oversized.
pub const MAX_CHANGES: u64 = 100;

/// Number of comparisons fetched at once.
pub const FETCH_CONCURRENCY: usize = 4;

/// Label names used by the workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Applied to oversized pull requests.
    pub too_big: String,
    /// Marks bug reports.
    pub bug: String,
    /// Applied to bug reports without a screenshot.
    pub needs_screenshot: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            too_big: LABEL_TOO_BIG.to_string(),
            bug: LABEL_BUG.to_string(),
            needs_screenshot: LABEL_NEEDS_SCREENSHOT.to_string(),
        }
    }
}

/// Triage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Label names.
    pub labels: Labels,

    /// Change count a pull request must exceed to be oversized.
    pub max_changes: u64,

    /// Upper bound on concurrent read requests.
    pub fetch_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: OWNER.to_string(),
            repo: REPO.to_string(),
            labels: Labels::default(),
            max_changes: MAX_CHANGES,
            fetch_concurrency: FETCH_CONCURRENCY,
        }
    }
}

impl Config {
    /// `owner/repo`, for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
