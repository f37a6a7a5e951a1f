//! File discovery for batch commands.
//!
//! Resolves the paths given on the command line into the media files a
//! command should process. Directories are scanned at the top level only;
//! membership is decided by an `ExtensionTable` passed in by the caller.

use crate::config::ExtensionTable;
use crate::error::{CoreError, CoreResult};
use crate::media::MediaKind;

use std::path::{Path, PathBuf};

/// Finds files of the given kind in the top level of `input_dir`.
///
/// The extension match is case-insensitive; subdirectories are not
/// searched. Results are sorted.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The matching files
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoFilesFound)` - If nothing matches
///
/// # Examples
///
/// ```rust,no_run
/// use dio_core::config::ExtensionTable;
/// use dio_core::find_media_files;
/// use dio_core::media::MediaKind;
/// use std::path::Path;
///
/// let table = ExtensionTable::default();
/// match find_media_files(Path::new("/path/to/scans"), &table, MediaKind::Image) {
///     Ok(files) => println!("Found {} images", files.len()),
///     Err(e) => println!("Error finding images: {}", e),
/// }
/// ```
pub fn find_media_files(
    input_dir: &Path,
    table: &ExtensionTable,
    kind: MediaKind,
) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            (path.is_file() && table.matches(&path, kind)).then_some(path)
        })
        .collect();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        files.sort();
        Ok(files)
    }
}

/// Expands command-line inputs: files pass through unchanged (whatever
/// their extension), directories are replaced by their matching files.
///
/// A directory without matching files contributes nothing; the call only
/// fails with `NoFilesFound` when the overall result is empty.
pub fn expand_inputs(
    inputs: &[PathBuf],
    table: &ExtensionTable,
    kind: MediaKind,
) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            match find_media_files(input, table, kind) {
                Ok(found) => files.extend(found),
                Err(CoreError::NoFilesFound) => {
                    log::warn!("No {kind} files in {}", input.display());
                }
                Err(e) => return Err(e),
            }
        } else {
            files.push(input.clone());
        }
    }

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
