//! Square avatar thumbnails.
//!
//! An avatar is the whole image squeezed (not cropped) into an `N×N` RGB
//! square and written next to the input as `<stem>.<N>x<N>.<jpg|png>`.
//! Existing avatars are overwritten.

use image::imageops::{self, FilterType};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::AvatarOptions;
use crate::error::{CoreError, CoreResult};
use crate::media::open_image;

/// Encoding of a generated avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AvatarFormat {
    #[default]
    Jpg,
    Png,
}

impl AvatarFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            AvatarFormat::Jpg => "jpg",
            AvatarFormat::Png => "png",
        }
    }
}

impl fmt::Display for AvatarFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Output path for the avatar of `input`: `photo.png` at size 160 in JPEG
/// becomes `photo.160x160.jpg` in the same directory.
pub fn avatar_path(input: &Path, options: &AvatarOptions) -> CoreResult<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            CoreError::InvalidInput(format!("no usable file name in {}", input.display()))
        })?;
    let size = options.size;
    Ok(input.with_file_name(format!(
        "{stem}.{size}x{size}.{}",
        options.format.extension()
    )))
}

/// Writes the avatar of one image and returns its path.
pub fn make_avatar(input: &Path, options: &AvatarOptions) -> CoreResult<PathBuf> {
    if options.size == 0 {
        return Err(CoreError::InvalidInput(
            "avatar size must be at least 1".to_string(),
        ));
    }
    let output = avatar_path(input, options)?;

    let rgb = open_image(input)?.to_rgb8();
    let square = imageops::resize(&rgb, options.size, options.size, FilterType::CatmullRom);
    square.save(&output)?;

    debug!(
        "Avatar {} -> {} ({}x{})",
        input.display(),
        output.display(),
        options.size,
        options.size
    );
    Ok(output)
}

/// Makes avatars for every file in parallel. Results keep the input order.
pub fn make_avatars(
    paths: &[PathBuf],
    options: &AvatarOptions,
) -> Vec<(PathBuf, CoreResult<PathBuf>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), make_avatar(path, options)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, RgbaImage, Rgba};

    fn options(size: u32, format: AvatarFormat) -> AvatarOptions {
        AvatarOptions { size, format }
    }

    #[test]
    fn test_avatar_path_naming() {
        let path = avatar_path(Path::new("/pics/me.v2.png"), &AvatarOptions::default()).unwrap();
        assert_eq!(path, PathBuf::from("/pics/me.v2.160x160.jpg"));

        let path = avatar_path(Path::new("face"), &options(32, AvatarFormat::Png)).unwrap();
        assert_eq!(path, PathBuf::from("face.32x32.png"));
    }

    #[test]
    fn test_make_avatar_squares_image() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("wide.png");
        RgbImage::from_pixel(300, 100, Rgb([200, 10, 10])).save(&input).unwrap();

        let output = make_avatar(&input, &options(64, AvatarFormat::Jpg)).unwrap();
        assert_eq!(output, dir.path().join("wide.64x64.jpg"));
        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (64, 64));
    }

    #[test]
    fn test_make_avatar_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("icon.png");
        RgbaImage::from_pixel(10, 10, Rgba([0, 255, 0, 128])).save(&input).unwrap();

        let output = make_avatar(&input, &options(4, AvatarFormat::Png)).unwrap();
        let written = image::open(&output).unwrap();
        assert!(!written.color().has_alpha());
        assert_eq!(written.to_rgb8().get_pixel(0, 0), &Rgb([0, 255, 0]));
    }

    #[test]
    fn test_make_avatar_rejects_zero_size() {
        let result = make_avatar(Path::new("any.png"), &options(0, AvatarFormat::Png));
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_make_avatars_keeps_order_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a.png");
        RgbImage::from_pixel(8, 8, Rgb([1, 1, 1])).save(&good).unwrap();
        let bad = dir.path().join("b.png");
        std::fs::write(&bad, "nope").unwrap();

        let results = make_avatars(&[good.clone(), bad.clone()], &options(4, AvatarFormat::Png));
        assert_eq!(results[0].0, good);
        assert!(results[0].1.is_ok());
        assert_eq!(results[1].0, bad);
        assert!(matches!(results[1].1, Err(CoreError::Image(_))));
    }
}
