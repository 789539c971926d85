//! Diagnostic output.
//!
//! Stdout is reserved for the computed version, so everything here writes to
//! stderr.

use console::style;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a warning with a yellow marker.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

/// Print a status line with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print argument guidance for a usage error.
pub fn display_usage(message: &str) {
    eprintln!("{}", message);
    eprintln!(
        "{} version-determiner <release-version|version-tag|snapshot-version> <MAJOR|MINOR|PATCH>",
        style("Usage:").bold()
    );
}
