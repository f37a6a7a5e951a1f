//! `dio avatar`: writes an `N×N` thumbnail next to each image.
//!
//! Output lines are `input<TAB>avatar`. Failures are reported per file and
//! the rest of the batch keeps going.

use crate::cli::AvatarArgs;
use crate::commands::BatchSummary;
use crate::error::{CliErrorContext, CliResult};
use crate::output;

use dio_core::{AvatarOptions, ExtensionTable, MediaKind, expand_inputs, make_avatars};

use log::info;

/// Builds the core options from the parsed arguments.
pub fn avatar_options(args: &AvatarArgs) -> AvatarOptions {
    AvatarOptions {
        size: args.size,
        format: args.format.into(),
    }
}

/// Runs `dio avatar`.
pub fn run_avatar(args: AvatarArgs) -> CliResult<BatchSummary> {
    let files = expand_inputs(&args.files, &ExtensionTable::default(), MediaKind::Image)
        .cli_context("Nothing to convert")?;
    let options = avatar_options(&args);
    info!(
        "Making {}x{} {} avatars for {} file(s)",
        options.size,
        options.size,
        options.format,
        files.len()
    );

    let spinner = output::batch_spinner(format!("Converting {} image(s)", files.len()));
    let results = make_avatars(&files, &options);
    spinner.finish_and_clear();

    let mut summary = BatchSummary::default();
    for (path, result) in &results {
        summary.record(result);
        match result {
            Ok(avatar) => println!("{}\t{}", path.display(), avatar.display()),
            Err(e) => output::print_failure(path, e),
        }
    }

    output::print_summary("converted", summary.succeeded, summary.failed);
    Ok(summary)
}
