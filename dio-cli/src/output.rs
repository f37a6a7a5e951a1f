//! Terminal output helpers.
//!
//! Results go to stdout; status and failures go to stderr. Color is used
//! only when the target stream supports it.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

fn stderr_has_color() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

/// Reports a per-file failure as `Failed: <path> -- <error>`.
pub fn print_failure(path: &Path, error: impl Display) {
    if stderr_has_color() {
        eprintln!("{} {} -- {}", "Failed:".bright_red().bold(), path.display(), error);
    } else {
        eprintln!("Failed: {} -- {}", path.display(), error);
    }
}

/// Reports an error that stopped the whole command.
pub fn print_error(error: impl Display) {
    if stderr_has_color() {
        eprintln!("{} {}", "Error:".bright_red().bold(), error);
    } else {
        eprintln!("Error: {}", error);
    }
}

/// Prints a one-line batch summary to stderr.
pub fn print_summary(verb: &str, succeeded: usize, failed: usize) {
    let text = format!("{succeeded} {verb}, {failed} failed");
    if !stderr_has_color() {
        eprintln!("{text}");
    } else if failed == 0 {
        eprintln!("{}", text.bright_green());
    } else {
        eprintln!("{}", text.yellow());
    }
}

/// Spinner shown on stderr while a batch runs. Hidden when stderr is not a
/// terminal.
pub fn batch_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
