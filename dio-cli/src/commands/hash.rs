//! `dio ihash`: prints the average hash of each image.
//!
//! Files that cannot be decoded are listed with the `NotImage` marker in
//! place of a hash. That is a regular result, not a failure.

use crate::cli::HashArgs;
use crate::commands::BatchSummary;
use crate::error::{CliErrorContext, CliResult};

use dio_core::{CoreResult, ExtensionTable, ImageHash, MediaKind, expand_inputs, hash_files};

use log::warn;
use std::path::Path;

/// Printed instead of a hash for files that are not images.
pub const NOT_IMAGE: &str = "NotImage";

/// `HASH<TAB>path`, or `NotImage<TAB>path`.
pub fn format_hash_line(path: &Path, result: &CoreResult<ImageHash>) -> String {
    match result {
        Ok(hash) => format!("{}\t{}", hash, path.display()),
        Err(_) => format!("{}\t{}", NOT_IMAGE, path.display()),
    }
}

/// Runs `dio ihash`.
pub fn run_hash(args: HashArgs) -> CliResult<BatchSummary> {
    let files = expand_inputs(&args.files, &ExtensionTable::default(), MediaKind::Image)
        .cli_context("Nothing to hash")?;

    let mut summary = BatchSummary::default();
    for (path, result) in hash_files(&files, args.size) {
        if let Err(e) = &result {
            warn!("{}: {}", path.display(), e);
        }
        println!("{}", format_hash_line(&path, &result));
        summary.succeeded += 1;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dio_core::CoreError;

    #[test]
    fn test_format_hash_line() {
        let ok: CoreResult<ImageHash> = Ok(ImageHash::from_bits(vec![true; 8]));
        assert_eq!(format_hash_line(Path::new("a.png"), &ok), "FF\ta.png");

        let err: CoreResult<ImageHash> = Err(CoreError::InvalidImage("x".into()));
        assert_eq!(format_hash_line(Path::new("b.txt"), &err), "NotImage\tb.txt");
    }
}
