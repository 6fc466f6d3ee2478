//! Label membership.

use triage_github::Label;

/// Whether `labels` contains a label named exactly `name`.
///
/// The comparison is case-sensitive and ignores order.
#[must_use]
pub fn has_label(labels: &[Label], name: &str) -> bool {
    labels.iter().any(|label| label.name == name)
}
