//! Core library for the dio media file utilities.
//!
//! This crate provides margin (border) detection and trimming for images,
//! silence detection for audio, perceptual image hashing, square avatar
//! thumbnails, and the file discovery the command-line batch layer builds on.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use dio_core::config::TrimOptions;
//! use dio_core::{CoreError, trim_margins};
//! use std::path::Path;
//!
//! let options = TrimOptions::builder().stdmax(3.0).build();
//! match trim_margins(Path::new("scan.png"), &options) {
//!     Ok(outcome) => println!("kept {}", outcome.crop),
//!     Err(CoreError::Homogeneity(e)) => println!("no uniform border: {e}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{AvatarOptions, ExtensionTable, SilenceOptions, TrimOptions};
pub use discovery::{expand_inputs, find_media_files};
pub use error::{CoreError, CoreResult, HomogeneityError};
pub use media::{MediaKind, open_image};
pub use processing::{
    AudioEnergySeries, AvatarFormat, CornerSampling, CropBox, ImageHash, MarginDetector,
    SilenceSpan, TrimOutcome, average_hash, detect, find_silences_in_file, hash_file, hash_files,
    make_avatar, make_avatars, trim_batch, trim_margins,
};
pub use utils::{format_bytes, format_timestamp};
