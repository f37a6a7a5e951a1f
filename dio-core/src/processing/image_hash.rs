//! Perceptual average hash for images.
//!
//! The image is reduced to a tiny grayscale thumbnail; each thumbnail pixel
//! contributes one bit, set when it is brighter than the thumbnail mean.
//! Visually similar images end up with hashes a small Hamming distance apart.

use image::DynamicImage;
use image::imageops::{self, FilterType};
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::media::open_image;

/// Bits of an average hash, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHash {
    bits: Vec<bool>,
}

impl ImageHash {
    #[must_use]
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of differing bits, or `None` if the hashes have different sizes.
    #[must_use]
    pub fn distance(&self, other: &ImageHash) -> Option<usize> {
        if self.bits.len() != other.bits.len() {
            return None;
        }
        Some(
            self.bits
                .iter()
                .zip(&other.bits)
                .filter(|(a, b)| a != b)
                .count(),
        )
    }
}

/// Uppercase hex of the bit string read as one binary number, left-padded to
/// `ceil(bits / 4)` digits.
impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = (4 - self.bits.len() % 4) % 4;
        let padded: Vec<bool> = std::iter::repeat_n(false, pad)
            .chain(self.bits.iter().copied())
            .collect();
        for nibble in padded.chunks(4) {
            let value = nibble.iter().fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit));
            write!(f, "{value:X}")?;
        }
        Ok(())
    }
}

/// Computes the average hash of `image` on a `hash_size × hash_size` grid.
pub fn average_hash(image: &DynamicImage, hash_size: u32) -> CoreResult<ImageHash> {
    if hash_size == 0 {
        return Err(CoreError::InvalidInput("hash size must be at least 1".to_string()));
    }

    let gray = image.to_luma8();
    let small = imageops::resize(&gray, hash_size, hash_size, FilterType::Lanczos3);
    let pixels: Vec<u8> = small.into_raw();
    let mean = pixels.iter().map(|&p| f64::from(p)).sum::<f64>() / pixels.len() as f64;

    Ok(ImageHash::from_bits(
        pixels.iter().map(|&p| f64::from(p) > mean).collect(),
    ))
}

/// Opens an image file and hashes it. The format is detected from the
/// file contents.
pub fn hash_file(path: &Path, hash_size: u32) -> CoreResult<ImageHash> {
    let image = open_image(path)?;
    average_hash(&image, hash_size)
}

/// Hashes many files in parallel. Results keep the input order.
pub fn hash_files(paths: &[PathBuf], hash_size: u32) -> Vec<(PathBuf, CoreResult<ImageHash>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), hash_file(path, hash_size)))
        .collect()
}
