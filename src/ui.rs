//! Terminal output.
//!
//! stdout carries only the resolved version so builds can capture it
//! directly; every diagnostic goes to stderr.

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a non-fatal warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33mWARNING:\x1b[0m {}", warning);
}

/// Print the resolved version, the only line written to stdout.
pub fn display_version(version: &str) {
    println!("{}", version);
}
