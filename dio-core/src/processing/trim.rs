//! Margin trimming for image files.
//!
//! Decodes an image, detects its homogeneous margins and writes the cropped
//! result next to the input under a prefixed file name. Batches never stop
//! on a single bad file; each file gets its own result.

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::TrimOptions;
use crate::error::{CoreError, CoreResult};
use crate::media::open_image;
use crate::processing::margin::{CropBox, MarginDetector};

/// What happened to one trimmed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimOutcome {
    pub input: PathBuf,
    /// Written file, `None` on a dry run.
    pub output: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub crop: CropBox,
    pub deleted_original: bool,
}

impl TrimOutcome {
    /// Returns true if the detected box removes nothing.
    #[must_use]
    pub fn is_uncropped(&self) -> bool {
        self.crop.is_full(self.width, self.height)
    }
}

/// Output path for `input`: same directory, `prefix` prepended to the name.
///
/// # Errors
///
/// * `CoreError::InvalidInput` for an empty prefix or a path without a
///   file name.
/// * `CoreError::PrefixedInput` if the input name already carries the
///   prefix, which would make it look like an earlier output.
pub fn output_path(input: &Path, prefix: &str) -> CoreResult<PathBuf> {
    if prefix.is_empty() {
        return Err(CoreError::InvalidInput(
            "output prefix must not be empty".to_string(),
        ));
    }
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CoreError::InvalidInput(format!("no usable file name in {}", input.display()))
        })?;
    if name.starts_with(prefix) {
        return Err(CoreError::PrefixedInput(input.to_path_buf()));
    }
    Ok(input.with_file_name(format!("{prefix}{name}")))
}

/// Trims the homogeneous margins of one image file.
pub fn trim_margins(input: &Path, options: &TrimOptions) -> CoreResult<TrimOutcome> {
    let output = output_path(input, &options.prefix)?;
    if !options.dry_run && output.exists() {
        return Err(CoreError::OutputExists(output));
    }

    let image = open_image(input)?;
    let (width, height) = (image.width(), image.height());
    let crop = MarginDetector::new(options.stdmax)
        .with_sampling(options.sampling)
        .detect(&image.to_rgb8())?;
    debug!("{}: {width}x{height}, crop box {crop}", input.display());

    if options.dry_run {
        return Ok(TrimOutcome {
            input: input.to_path_buf(),
            output: None,
            width,
            height,
            crop,
            deleted_original: false,
        });
    }

    image
        .crop_imm(crop.left, crop.top, crop.width(), crop.height())
        .save(&output)?;
    info!(
        "Trimmed {} -> {} ({}x{})",
        input.display(),
        output.display(),
        crop.width(),
        crop.height()
    );

    if options.delete_original {
        fs::remove_file(input)?;
        debug!("Removed original {}", input.display());
    }

    Ok(TrimOutcome {
        input: input.to_path_buf(),
        output: Some(output),
        width,
        height,
        crop,
        deleted_original: options.delete_original,
    })
}

/// Trims every file in `paths`, in parallel when `options.parallel` is set.
/// Results keep the input order.
pub fn trim_batch(paths: &[PathBuf], options: &TrimOptions) -> Vec<(PathBuf, CoreResult<TrimOutcome>)> {
    let run = |path: &PathBuf| (path.clone(), trim_margins(path, options));
    if options.parallel {
        paths.par_iter().map(run).collect()
    } else {
        paths.iter().map(run).collect()
    }
}
