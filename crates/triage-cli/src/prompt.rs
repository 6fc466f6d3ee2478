//! Interactive confirmation.

use std::io::IsTerminal;

use inquire::{Confirm, InquireError};
use triage_core::Gate;

/// Asks on the terminal. Anything other than an explicit "yes" is a no.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveGate;

impl Gate for InteractiveGate {
    fn confirm(&self, message: &str) -> bool {
        // Never wait on a prompt nobody can see
        if !is_interactive(&std::io::stdin(), &std::io::stderr()) {
            tracing::debug!(message, "no terminal to prompt on, declining");
            return false;
        }

        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => answer,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => false,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed, declining");
                false
            }
        }
    }
}

/// Whether answers can be read from `input` and the prompt drawn on `output`.
///
/// inquire draws on stderr, so that is the stream that must be a terminal.
fn is_interactive(input: &impl IsTerminal, output: &impl IsTerminal) -> bool {
    input.is_terminal() && output.is_terminal()
}
