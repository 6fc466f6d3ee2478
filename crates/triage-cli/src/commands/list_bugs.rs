//! `triage list-bugs` command - Print open issues labelled as bugs.

use anyhow::{Context, Result};
use triage_core::Config;

use super::utils::{connect, runtime};
use crate::output;

/// Run the list-bugs command.
pub fn run(config: &Config) -> Result<()> {
    let client = connect()?;
    let rt = runtime()?;

    let bugs = rt
        .block_on(triage_core::list_bugs(&client, config))
        .with_context(|| format!("Failed to list issues in {}", config.full_name()))?;

    output::essential(&serde_json::to_string_pretty(&bugs)?);
    Ok(())
}
