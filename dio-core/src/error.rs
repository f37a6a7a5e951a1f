//! Error types for the dio-core library.
//!
//! `CoreError` is the single error enum returned by the library's fallible
//! operations. The margin detector has its own narrower `HomogeneityError`
//! so callers that only run detection can match on it directly; it converts
//! into `CoreError` with `?`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Raised when the corner sample of an image is not uniform enough to be
/// treated as a border color.
#[derive(Debug, Clone, PartialEq)]
pub struct HomogeneityError {
    /// Per-channel (R, G, B) standard deviation of the corner sample.
    pub deviation: [f64; 3],
    /// Threshold the sample was checked against.
    pub stdmax: f64,
}

impl fmt::Display for HomogeneityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.deviation;
        write!(
            f,
            "standard deviation of corner pixels is too large: ({r:.2}, {g:.2}, {b:.2}) exceeds {}",
            self.stdmax
        )
    }
}

impl std::error::Error for HomogeneityError {}

/// Custom error types for dio-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("WAV format error: {0}")]
    Wav(#[from] hound::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Homogeneity(#[from] HomogeneityError),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input file named with output prefix: {}", .0.display())]
    PrefixedInput(PathBuf),

    #[error("Output file exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("No suitable media files found")]
    NoFilesFound,

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, std::io::Error),

    #[error("{0} failed: {1}")]
    CommandFailed(String, String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for dio-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds the error for a tool that could not be spawned.
pub fn command_start_error(tool: &str, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(tool.to_string(), err)
}

/// Builds the error for a tool that ran but did not succeed.
pub fn command_failed_error(
    tool: &str,
    status: std::process::ExitStatus,
    detail: impl Into<String>,
) -> CoreError {
    let detail = detail.into();
    let message = if detail.is_empty() {
        format!("exit status {status}")
    } else {
        format!("exit status {status}: {detail}")
    };
    CoreError::CommandFailed(tool.to_string(), message)
}
