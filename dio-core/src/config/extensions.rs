//! File extension to media kind table.

use std::collections::HashMap;
use std::path::Path;

use crate::media::MediaKind;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "ts", "mov", "avi", "webm", "flv", "m4v"];
const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "aac", "m4a", "flac", "ogg", "opus", "wma"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

/// Immutable mapping from lowercase file extensions to a media kind.
///
/// Built once by the caller and passed to discovery; lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionTable {
    entries: HashMap<String, MediaKind>,
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::from_entries(
            VIDEO_EXTENSIONS
                .iter()
                .map(|ext| (*ext, MediaKind::Video))
                .chain(AUDIO_EXTENSIONS.iter().map(|ext| (*ext, MediaKind::Audio)))
                .chain(IMAGE_EXTENSIONS.iter().map(|ext| (*ext, MediaKind::Image))),
        )
    }
}

impl ExtensionTable {
    /// Builds a table from `(extension, kind)` pairs. A leading dot is ignored.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, MediaKind)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(ext, kind)| (ext.trim_start_matches('.').to_ascii_lowercase(), kind))
                .collect(),
        }
    }

    /// Kind registered for an extension, if any.
    #[must_use]
    pub fn kind_of_extension(&self, ext: &str) -> Option<MediaKind> {
        self.entries
            .get(&ext.trim_start_matches('.').to_ascii_lowercase())
            .copied()
    }

    /// Kind of a path, judged by its extension.
    #[must_use]
    pub fn kind_of(&self, path: &Path) -> Option<MediaKind> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.kind_of_extension(ext))
    }

    #[must_use]
    pub fn matches(&self, path: &Path, kind: MediaKind) -> bool {
        self.kind_of(path) == Some(kind)
    }
}
