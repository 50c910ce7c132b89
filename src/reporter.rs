//! Diagnostic output helpers.
//!
//! All diagnostics go to stderr so the collated documentation on stdout
//! stays clean enough to pipe into a file.

use colored::Colorize;

/// Print a non-fatal warning (unreadable directory entry, bad ignore pattern).
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "warning:".bold().yellow(), message.as_ref());
}

/// Print a per-file error. The run continues past these.
pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", "error:".bold().red(), message.as_ref());
}

/// Print an informational note (binary file skipped).
pub fn note(message: impl AsRef<str>) {
    eprintln!("{} {}", "note:".bold().cyan(), message.as_ref());
}

/// Diagnostic for a run that produced no documentation at all.
pub fn no_documentation() {
    eprintln!("\nNo documentation found in any files.");
}
