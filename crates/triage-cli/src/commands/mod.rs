//! CLI command definitions and handlers.

use clap::{Parser, Subcommand};

pub mod check_prs;
pub mod check_screenshots;
pub mod list_bugs;
pub mod me;
mod utils;

/// Triage - label triage for a GitHub repository.
///
/// Flags oversized pull requests and bug reports without screenshots,
/// asking for confirmation before every label change.
#[derive(Parser)]
#[command(name = "triage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Check my profile.
    ///
    /// Prints the login of the user the access token belongs to.
    Me,

    /// List issues with the bug label.
    ListBugs,

    /// Label pull requests with too many changes.
    ///
    /// Compares every open pull request's head against its base and offers
    /// to add the too-big label when the diff exceeds the change limit.
    CheckPrs,

    /// Label bug reports that are missing a screenshot.
    ///
    /// Offers to add needs-screenshot to bug issues without an image, and
    /// to remove it again once an image has been added.
    CheckScreenshots,
}
