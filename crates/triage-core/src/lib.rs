//! # triage-core
//!
//! Core library for triage: label and screenshot predicates, planning of
//! label changes, and confirmation-gated execution of those plans.

pub mod config;
pub mod error;
pub mod gate;
pub mod labels;
pub mod markdown;
pub mod remote;
pub mod triage;

#[cfg(test)]
mod testing;

pub use config::{Config, Labels};
pub use error::{Error, Result};
pub use gate::Gate;
pub use labels::has_label;
pub use markdown::contains_image;
pub use remote::Remote;
pub use triage::{
    BugSummary, ChangeResult, ItemKind, LabelAction, LabelChange, LabelPlan, Outcome, Reporter,
    ScreenshotState, SizeReport, SizedPullRequest, Summary, execute_plan, list_bugs, oversized,
    plan_screenshots, plan_too_big, screenshot_state, size_pull_requests,
};
