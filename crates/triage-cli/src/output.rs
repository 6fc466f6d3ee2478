//! Terminal output formatting utilities.

use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message.
pub fn info(msg: &str) {
    println!("{} {}", "→".blue(), msg);
}

/// Print plain output meant for reading or piping.
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Format a count with a dimmed label, e.g. `2 applied`.
#[must_use]
pub fn count(n: usize, label: &str) -> String {
    format!("{} {}", n.to_string().bold(), label.dimmed())
}
