//! Image and audio analysis.
//!
//! This module groups the array scans dio performs on decoded media: margin
//! detection and trimming for images, silence detection for audio, and
//! perceptual hashing, and avatar thumbnails.

/// Homogeneous border detection
pub mod margin;

/// Applying detected margins to image files
pub mod trim;

/// Silence detection from quantized audio energy
pub mod silence;

/// Average hash for images
pub mod image_hash;

/// Square avatar thumbnails
pub mod avatar;

pub use avatar::{AvatarFormat, avatar_path, make_avatar, make_avatars};
pub use image_hash::{ImageHash, average_hash, hash_file, hash_files};
pub use margin::{CornerSampling, CropBox, MarginDetector, detect};
pub use silence::{AudioEnergySeries, SilenceSpan, find_silences_in_file};
pub use trim::{TrimOutcome, trim_batch, trim_margins};
