//! # triage-github
//!
//! GitHub API integration for triage: listing issues and pull requests,
//! comparing refs, and adding or removing labels.

mod auth;
mod client;
mod error;
mod types;

pub use auth::{Auth, TOKEN_ENV_VARS};
pub use client::GitHubClient;
pub use error::{Error, Result};
pub use types::{AddLabels, ChangedFile, Comparison, Issue, Label, PullRequest, User};
