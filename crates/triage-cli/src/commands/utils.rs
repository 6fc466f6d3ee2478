use anyhow::{Context, Result, bail};
use triage_core::{ChangeResult, LabelAction, LabelChange, Outcome, Reporter, Summary};
use triage_github::{Auth, GitHubClient};

use crate::output;

/// Overrides the API URL (GitHub Enterprise, local test servers).
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Helper to build the GitHub client from the environment.
pub fn connect() -> Result<GitHubClient> {
    let auth = Auth::auto();
    let client = match std::env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => GitHubClient::with_base_url(&auth, url),
        _ => GitHubClient::new(&auth),
    };

    client.context("Failed to authenticate with GitHub")
}

/// Helper to build the runtime a command drives its requests on.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to start async runtime")
}

/// Prints each change as it is proposed and resolved.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn proposing(&mut self, change: &LabelChange) {
        output::info(&change.describe());
    }

    fn finished(&mut self, change: &LabelChange, outcome: &Outcome) {
        match outcome {
            Outcome::Applied => {
                let verb = match change.action {
                    LabelAction::Add => "Added",
                    LabelAction::Remove => "Removed",
                };
                output::success(&format!(
                    "{verb} {} on {} #{}",
                    change.label, change.kind, change.number
                ));
            }
            Outcome::Declined => output::essential("Cancelled!"),
            Outcome::Failed(e) => output::error(&format!(
                "Failed to update {} #{}: {e}",
                change.kind, change.number
            )),
        }
    }
}

/// Print totals after a plan has run.
///
/// Fails if any confirmed change could not be applied.
pub fn finish(results: &[ChangeResult]) -> Result<()> {
    let summary = Summary::of(results);
    output::info(&format!(
        "{}, {}, {}",
        output::count(summary.applied, "applied"),
        output::count(summary.declined, "cancelled"),
        output::count(summary.failed, "failed"),
    ));

    if summary.failed > 0 {
        bail!("{} label change(s) failed", summary.failed);
    }
    Ok(())
}
