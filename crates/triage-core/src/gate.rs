//! Confirmation before mutating anything.

/// A yes/no checkpoint consulted before every label change.
///
/// Implementations must block until answered and must answer `false` when
/// no one can answer (interrupted or non-interactive sessions).
pub trait Gate {
    /// Show `message` and return whether the user agreed.
    fn confirm(&self, message: &str) -> bool;
}
