//! `triage check-screenshots` command - Keep needs-screenshot in step with bug reports.

use anyhow::{Context, Result};
use triage_core::{Config, execute_plan, plan_screenshots};

use super::utils::{ConsoleReporter, connect, finish, runtime};
use crate::output;
use crate::prompt::InteractiveGate;

/// Run the check-screenshots command.
pub fn run(config: &Config) -> Result<()> {
    let client = connect()?;
    let rt = runtime()?;

    let issues = rt
        .block_on(client.list_issues(&config.owner, &config.repo))
        .with_context(|| format!("Failed to list issues in {}", config.full_name()))?;

    let plan = plan_screenshots(&issues, config);
    if plan.is_empty() {
        output::success("Screenshot labels are up to date");
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
        .context("Stopped updating screenshot labels")?;

    finish(&results)
}
