//! Media classification and decoded media containers.

pub mod audio;

use image::{DynamicImage, ImageReader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::CoreResult;

pub use audio::{PcmAudio, load_audio, read_wav};

/// Kind of media a file or track holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Audio,
    Image,
    General,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
            MediaKind::General => "general",
        };
        f.write_str(name)
    }
}

/// Opens and decodes an image file.
///
/// The format is taken from the file's leading bytes; the extension is only
/// used when the contents are not recognized.
pub fn open_image(path: &Path) -> CoreResult<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}
