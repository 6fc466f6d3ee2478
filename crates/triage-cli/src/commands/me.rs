//! `triage me` command - Show the authenticated user.

use anyhow::{Context, Result};

use super::utils::{connect, runtime};
use crate::output;

/// Run the me command.
pub fn run() -> Result<()> {
    let client = connect()?;
    let rt = runtime()?;

    let user = rt
        .block_on(client.current_user())
        .context("Failed to fetch the authenticated user")?;

    output::essential(&format!("Hello, {}", user.login));
    Ok(())
}
