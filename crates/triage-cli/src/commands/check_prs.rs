//! `triage check-prs` command - Label oversized pull requests.

use anyhow::{Context, Result};
use triage_core::{Config, execute_plan, oversized, plan_too_big, size_pull_requests};

use super::utils::{ConsoleReporter, connect, finish, runtime};
use crate::output;
use crate::prompt::InteractiveGate;

/// Run the check-prs command.
pub fn run(config: &Config) -> Result<()> {
    let client = connect()?;
    let rt = runtime()?;

    output::info(&format!(
        "Checking pull requests in {}...",
        config.full_name()
    ));

    let report = rt
        .block_on(size_pull_requests(&client, config))
        .context("Failed to measure pull requests")?;

    for (number, e) in &report.unmeasured {
        output::warn(&format!("Skipping PR #{number}: could not compare ({e})"));
    }

    let big = oversized(&report.sized, config.max_changes);
    if big.is_empty() {
        output::success(&format!(
            "No pull requests over {} changes",
            config.max_changes
        ));
        return Ok(());
    }

    for pr in &big {
        output::essential(&format!(
            "PR #{}, Total Changes: {}",
            pr.number, pr.total_changes
        ));
    }

    let plan = plan_too_big(&big, config);
    if plan.is_empty() {
        output::success(&format!(
            "All oversized pull requests already have the {} label",
            config.labels.too_big
        ));
        return Ok(());
    }

    let results = rt
        .block_on(execute_plan(
            &client,
            config,
            &InteractiveGate,
            plan,
            &mut ConsoleReporter,
        ))
        .context("Stopped labelling pull requests")?;

    finish(&results)
}
