// ============================================================================
// dio-cli/src/commands/trim.rs
// ============================================================================
//
// TRIM COMMAND: crops homogeneous margins off images
//
// Collects the input images, runs the core batch trimmer and prints one
// line per file. A file that fails is reported on stderr and the rest of
// the batch keeps going.

use crate::cli::TrimArgs;
use crate::commands::BatchSummary;
use crate::error::{CliErrorContext, CliResult};
use crate::output;

use dio_core::config::TrimOptions;
use dio_core::processing::trim::TrimOutcome;
use dio_core::{CornerSampling, ExtensionTable, MediaKind, expand_inputs, format_bytes, trim_batch};

use log::{debug, info};

/// Builds the core options from the parsed arguments.
pub fn trim_options(args: &TrimArgs) -> TrimOptions {
    let sampling = if args.legacy_corners {
        CornerSampling::Legacy
    } else {
        CornerSampling::FourCorners
    };
    TrimOptions::builder()
        .stdmax(args.stdmax)
        .prefix(args.prefix.clone())
        .delete_original(args.delete)
        .dry_run(args.dry)
        .sampling(sampling)
        .parallel(args.parallel)
        .build()
}

/// Text form of one result: `path<TAB>l,t,r,b<TAB>crop=w:h:x:y`.
pub fn format_outcome(outcome: &TrimOutcome) -> String {
    format!(
        "{}\t{}\t{}",
        outcome.input.display(),
        outcome.crop,
        outcome.crop.to_ffmpeg_filter()
    )
}

/// Runs `dio imt`.
pub fn run_trim(args: TrimArgs) -> CliResult<BatchSummary> {
    let table = ExtensionTable::default();
    let files = expand_inputs(&args.files, &table, MediaKind::Image)
        .cli_context("Nothing to trim")?;
    let options = trim_options(&args);
    debug!("Trim options: {:?}", options);
    info!("Trimming {} file(s)", files.len());

    let spinner = output::batch_spinner(format!("Trimming {} image(s)", files.len()));
    let results = trim_batch(&files, &options);
    spinner.finish_and_clear();

    let mut summary = BatchSummary::default();
    for (path, result) in &results {
        summary.record(result);
        match result {
            Ok(outcome) => {
                if args.json {
                    println!("{}", serde_json::to_string(outcome)?);
                } else {
                    println!("{}", format_outcome(outcome));
                }
                if let Some(written) = &outcome.output {
                    if let Ok(meta) = std::fs::metadata(written) {
                        debug!("{}: {}", written.display(), format_bytes(meta.len()));
                    }
                }
                if outcome.is_uncropped() {
                    debug!("{}: no margin found", path.display());
                }
            }
            Err(e) => output::print_failure(path, e),
        }
    }

    output::print_summary(
        if options.dry_run { "checked" } else { "trimmed" },
        summary.succeeded,
        summary.failed,
    );
    Ok(summary)
}
