//! Configuration structures and constants for the dio-core library.
//!
//! This module provides the options that drive margin trimming and silence
//! detection, together with the extension table used by file discovery.
//! Options are plain values passed into the functions that use them; nothing
//! here is global or mutable.

mod builder;
mod extensions;

use crate::processing::avatar::AvatarFormat;
use crate::processing::margin::CornerSampling;

pub use builder::TrimOptionsBuilder;
pub use extensions::ExtensionTable;

// Default constants

/// Default maximum per-channel standard deviation for a region to count as
/// homogeneous margin.
pub const DEFAULT_STDMAX: f64 = 3.0;

/// Default file name prefix for trimmed images.
pub const DEFAULT_TRIM_PREFIX: &str = "IMT.";

/// Default length of one audio energy window, in seconds.
pub const DEFAULT_ENERGY_WINDOW_SECS: f64 = 0.1;

/// Default highest energy level (0-9) still counted as silence.
pub const DEFAULT_SILENCE_THRESHOLD: u8 = 3;

/// Default minimum silence length, in seconds.
pub const DEFAULT_SILENCE_DURATION_SECS: f64 = 1.0;

/// Default side length of the average hash grid (8 gives a 64-bit hash).
pub const DEFAULT_HASH_SIZE: u32 = 8;

/// Default side length of generated avatars, in pixels.
pub const DEFAULT_AVATAR_SIZE: u32 = 160;

/// Options for trimming homogeneous margins off image files.
///
/// # Examples
///
/// ```rust
/// use dio_core::config::TrimOptions;
///
/// let options = TrimOptions::builder()
///     .stdmax(5.0)
///     .prefix("cropped.")
///     .delete_original(true)
///     .build();
/// assert_eq!(options.prefix, "cropped.");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrimOptions {
    /// Maximum per-channel standard deviation of the margin
    pub stdmax: f64,

    /// Prefix added to the input file name to form the output file name
    pub prefix: String,

    /// Remove the input file after the trimmed copy is written
    pub delete_original: bool,

    /// Detect and report only; no file is written or removed
    pub dry_run: bool,

    /// Corner blocks used as the border reference
    pub sampling: CornerSampling,

    /// Process batches with a rayon thread pool
    pub parallel: bool,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            stdmax: DEFAULT_STDMAX,
            prefix: DEFAULT_TRIM_PREFIX.to_string(),
            delete_original: false,
            dry_run: false,
            sampling: CornerSampling::default(),
            parallel: false,
        }
    }
}

impl TrimOptions {
    /// Creates a builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> TrimOptionsBuilder {
        TrimOptionsBuilder::new()
    }
}

/// Options for locating silences in an audio track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SilenceOptions {
    /// Length of one energy window in seconds
    pub window_secs: f64,

    /// Highest energy level (0-9) counted as silent
    pub threshold: u8,

    /// Shortest run of silent windows reported, in seconds
    pub min_duration_secs: f64,
}

impl Default for SilenceOptions {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_ENERGY_WINDOW_SECS,
            threshold: DEFAULT_SILENCE_THRESHOLD,
            min_duration_secs: DEFAULT_SILENCE_DURATION_SECS,
        }
    }
}

/// Options for turning images into square avatars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Width and height of the output
    pub size: u32,

    /// Output encoding, which also sets the file extension
    pub format: AvatarFormat,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_AVATAR_SIZE,
            format: AvatarFormat::default(),
        }
    }
}
