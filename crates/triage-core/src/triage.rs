//! Label reconciliation workflows.
//!
//! Each workflow is split in two: a pure planning step that decides which
//! label changes an item needs, and [`execute_plan`], which walks the plan
//! one change at a time, asking the [`Gate`] before every mutation.

use std::fmt;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use triage_github::{Issue, Label};

use crate::config::Config;
use crate::error::Result;
use crate::gate::Gate;
use crate::labels::has_label;
use crate::markdown::contains_image;
use crate::remote::Remote;

/// What a label change does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAction {
    /// Add the label.
    Add,
    /// Remove the label.
    Remove,
}

/// Whether a change targets an issue or a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// An issue.
    Issue,
    /// A pull request.
    PullRequest,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issue => write!(f, "issue"),
            Self::PullRequest => write!(f, "PR"),
        }
    }
}

/// A single label change in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChange {
    /// Kind of item.
    pub kind: ItemKind,
    /// Issue or PR number.
    pub number: u64,
    /// Label to add or remove.
    pub label: String,
    /// Add or remove.
    pub action: LabelAction,
}

impl LabelChange {
    /// Question asked before applying the change.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self.action {
            LabelAction::Add => format!(
                "Do you really want to add label {} to {} #{}",
                self.label, self.kind, self.number
            ),
            LabelAction::Remove => format!(
                "Do you really want to remove label {} from {} #{}",
                self.label, self.kind, self.number
            ),
        }
    }

    /// Progress line shown before asking.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.action {
            LabelAction::Add => format!(
                "Adding {} label to {} #{}...",
                self.label, self.kind, self.number
            ),
            LabelAction::Remove => format!(
                "Removing {} label from {} #{}...",
                self.label, self.kind, self.number
            ),
        }
    }
}

/// Ordered list of label changes.
#[derive(Debug, Default)]
pub struct LabelPlan {
    /// Changes, in the order they will be proposed.
    pub changes: Vec<LabelChange>,
}

impl LabelPlan {
    /// Check if the plan is empty (nothing to change).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }
}

/// What happened to one proposed change.
#[derive(Debug)]
pub enum Outcome {
    /// Confirmed and applied.
    Applied,
    /// Not confirmed; nothing was changed.
    Declined,
    /// Confirmed, but the request failed.
    Failed(triage_github::Error),
}

/// A proposed change together with its outcome.
#[derive(Debug)]
pub struct ChangeResult {
    /// The change.
    pub change: LabelChange,
    /// What happened to it.
    pub outcome: Outcome,
}

/// Totals over an executed plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Changes applied.
    pub applied: usize,
    /// Changes declined.
    pub declined: usize,
    /// Changes that failed.
    pub failed: usize,
}

impl Summary {
    /// Tally a list of results.
    #[must_use]
    pub fn of(results: &[ChangeResult]) -> Self {
        results.iter().fold(Self::default(), |mut s, r| {
            match r.outcome {
                Outcome::Applied => s.applied += 1,
                Outcome::Declined => s.declined += 1,
                Outcome::Failed(_) => s.failed += 1,
            }
            s
        })
    }
}

/// Observer for plan execution, used to drive console output.
pub trait Reporter {
    /// Called before the gate is consulted for `change`.
    fn proposing(&mut self, _change: &LabelChange) {}

    /// Called once `change` has been resolved.
    fn finished(&mut self, _change: &LabelChange, _outcome: &Outcome) {}
}

impl Reporter for () {}

/// Apply a plan one change at a time.
///
/// Every change is confirmed through `gate` before its request is sent, and
/// each request completes before the next question is asked. A failed
/// request is recorded against its change and execution continues, unless
/// the failure is fatal (bad credentials, rate limit), which aborts the run.
/// Changes already applied stay applied.
///
/// # Errors
/// Returns error on a fatal GitHub failure.
pub async fn execute_plan<R, G>(
    remote: &R,
    config: &Config,
    gate: &G,
    plan: LabelPlan,
    reporter: &mut impl Reporter,
) -> Result<Vec<ChangeResult>>
where
    R: Remote + ?Sized,
    G: Gate + ?Sized,
{
    let mut results = Vec::with_capacity(plan.len());

    for change in plan.changes {
        reporter.proposing(&change);

        let outcome = if gate.confirm(&change.prompt()) {
            match apply(remote, config, &change).await {
                Ok(()) => {
                    tracing::info!(
                        number = change.number,
                        label = %change.label,
                        action = ?change.action,
                        "label change applied"
                    );
                    Outcome::Applied
                }
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(number = change.number, error = %e, "label change failed");
                    Outcome::Failed(e)
                }
            }
        } else {
            Outcome::Declined
        };

        reporter.finished(&change, &outcome);
        results.push(ChangeResult { change, outcome });
    }

    Ok(results)
}

async fn apply<R: Remote + ?Sized>(
    remote: &R,
    config: &Config,
    change: &LabelChange,
) -> triage_github::Result<()> {
    match change.action {
        LabelAction::Add => {
            remote
                .add_label(&config.owner, &config.repo, change.number, &change.label)
                .await
        }
        LabelAction::Remove => {
            remote
                .remove_label(&config.owner, &config.repo, change.number, &change.label)
                .await
        }
    }
}

// === Bug listing ===

/// A bug issue as printed by `list-bugs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugSummary {
    /// Issue title.
    pub title: String,
    /// Issue number.
    pub number: u64,
}

/// Issues carrying the bug label.
pub(crate) fn bug_issues<'a>(
    issues: &'a [Issue],
    config: &'a Config,
) -> impl Iterator<Item = &'a Issue> {
    issues
        .iter()
        .filter(|issue| has_label(&issue.labels, &config.labels.bug))
}

/// List open bug issues.
///
/// # Errors
/// Returns error if the issues cannot be listed.
pub async fn list_bugs<R: Remote + ?Sized>(remote: &R, config: &Config) -> Result<Vec<BugSummary>> {
    let issues = remote.list_issues(&config.owner, &config.repo).await?;

    Ok(bug_issues(&issues, config)
        .map(|issue| BugSummary {
            title: issue.title.clone(),
            number: issue.number,
        })
        .collect())
}

// === Oversized pull requests ===

/// An open pull request with its diff size.
#[derive(Debug, Clone)]
pub struct SizedPullRequest {
    /// PR number.
    pub number: u64,
    /// PR title.
    pub title: String,
    /// Labels on the PR.
    pub labels: Vec<Label>,
    /// Sum of per-file change counts between base and head.
    pub total_changes: u64,
}

/// Open pull requests with their sizes.
#[derive(Debug, Default)]
pub struct SizeReport {
    /// Pull requests whose comparison succeeded, in listing order.
    pub sized: Vec<SizedPullRequest>,
    /// Pull requests whose comparison failed, with the error.
    pub unmeasured: Vec<(u64, triage_github::Error)>,
}

/// List open pull requests and measure each one's diff.
///
/// Comparisons are fetched concurrently, at most
/// [`Config::fetch_concurrency`] at a time. A comparison that fails is
/// recorded in [`SizeReport::unmeasured`] rather than failing the batch.
///
/// # Errors
/// Returns error if the listing fails or a comparison fails fatally.
pub async fn size_pull_requests<R: Remote + ?Sized>(
    remote: &R,
    config: &Config,
) -> Result<SizeReport> {
    let prs = remote
        .list_pull_requests(&config.owner, &config.repo)
        .await?;

    let compared: Vec<_> = stream::iter(prs)
        .map(|pr| async move {
            let comparison = remote
                .compare(&config.owner, &config.repo, &pr.base_ref, &pr.head_ref)
                .await;
            (pr, comparison)
        })
        .buffered(config.fetch_concurrency.max(1))
        .collect()
        .await;

    let mut report = SizeReport::default();
    for (pr, comparison) in compared {
        match comparison {
            Ok(comparison) => report.sized.push(SizedPullRequest {
                number: pr.number,
                title: pr.title,
                labels: pr.labels,
                total_changes: comparison.total_changes(),
            }),
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                tracing::warn!(number = pr.number, error = %e, "comparison failed");
                report.unmeasured.push((pr.number, e));
            }
        }
    }

    Ok(report)
}

/// Pull requests with strictly more than `max_changes` changes.
#[must_use]
pub fn oversized(prs: &[SizedPullRequest], max_changes: u64) -> Vec<&SizedPullRequest> {
    prs.iter().filter(|pr| pr.total_changes > max_changes).collect()
}

/// Plan adding the too-big label to oversized PRs that lack it.
#[must_use]
pub fn plan_too_big(oversized: &[&SizedPullRequest], config: &Config) -> LabelPlan {
    let changes = oversized
        .iter()
        .filter(|pr| !has_label(&pr.labels, &config.labels.too_big))
        .map(|pr| LabelChange {
            kind: ItemKind::PullRequest,
            number: pr.number,
            label: config.labels.too_big.clone(),
            action: LabelAction::Add,
        })
        .collect();

    LabelPlan { changes }
}

// === Screenshots ===

/// What an issue's screenshot label should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenshotState {
    /// No screenshot and no label: add the label.
    Missing,
    /// Screenshot present and label still on: remove the label.
    Provided,
    /// Label present and still no screenshot: nothing to do.
    AwaitingScreenshot,
    /// Screenshot present and no label: nothing to do.
    Satisfied,
}

/// Classify an issue by screenshot and label presence.
#[must_use]
pub fn screenshot_state(issue: &Issue, config: &Config) -> ScreenshotState {
    let labelled = has_label(&issue.labels, &config.labels.needs_screenshot);
    let has_image = contains_image(issue.body.as_deref());

    match (has_image, labelled) {
        (false, false) => ScreenshotState::Missing,
        (true, true) => ScreenshotState::Provided,
        (false, true) => ScreenshotState::AwaitingScreenshot,
        (true, false) => ScreenshotState::Satisfied,
    }
}

/// Plan the screenshot label changes for a set of issues.
///
/// Only bug issues are considered. All additions come first, then all
/// removals.
#[must_use]
pub fn plan_screenshots(issues: &[Issue], config: &Config) -> LabelPlan {
    let bugs: Vec<(&Issue, ScreenshotState)> = bug_issues(issues, config)
        .map(|issue| (issue, screenshot_state(issue, config)))
        .collect();

    let change = |issue: &Issue, action: LabelAction| LabelChange {
        kind: ItemKind::Issue,
        number: issue.number,
        label: config.labels.needs_screenshot.clone(),
        action,
    };

    let additions = bugs
        .iter()
        .filter(|(_, state)| *state == ScreenshotState::Missing)
        .map(|(issue, _)| change(issue, LabelAction::Add));
    let removals = bugs
        .iter()
        .filter(|(_, state)| *state == ScreenshotState::Provided)
        .map(|(issue, _)| change(issue, LabelAction::Remove));

    LabelPlan {
        changes: additions.chain(removals).collect(),
    }
}
