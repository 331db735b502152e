//! Colored terminal output.
//!
//! Uses owo-colors for terminal colors.

use owo_colors::OwoColorize;

/// Print an action header (blue, bold)
/// Example: "==> Configure connections"
pub fn action(message: &str) {
    println!("{} {}", "==>".blue().bold(), message.bold());
}

/// Print an error message (red)
/// Example: "Error: command failed: systemctl stop ungit"
pub fn error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
