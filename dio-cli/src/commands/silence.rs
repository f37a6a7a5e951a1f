// ============================================================================
// dio-cli/src/commands/silence.rs
// ============================================================================
//
// SILENCE COMMAND: lists silent stretches in audio or video files
//
// Files are processed one after another; each one may go through ffmpeg,
// which already uses several threads.

use crate::cli::SilenceArgs;
use crate::commands::BatchSummary;
use crate::error::CliResult;
use crate::output;

use dio_core::config::SilenceOptions;
use dio_core::processing::silence::AudioEnergySeries;
use dio_core::{CoreResult, SilenceSpan, find_silences_in_file, format_timestamp};

use log::info;
use serde_json::json;
use std::path::Path;

/// Text form of one silence: `path<TAB>midpoint<TAB>HH:MM:SS.mmm<TAB>duration`.
pub fn format_span(path: &Path, span: &SilenceSpan) -> String {
    let mid = span.midpoint_secs();
    format!(
        "{}\t{:.3}\t{}\t{:.3}",
        path.display(),
        mid,
        format_timestamp(mid),
        span.duration_secs()
    )
}

/// Builds the core options from the parsed arguments.
pub fn silence_options(args: &SilenceArgs) -> SilenceOptions {
    SilenceOptions {
        window_secs: args.window,
        threshold: args.threshold,
        min_duration_secs: args.duration,
    }
}

fn process_file(path: &Path, args: &SilenceArgs, options: &SilenceOptions) -> CoreResult<()> {
    // The level string is only needed for --show-levels.
    let (levels, spans) = if args.show_levels {
        let series = AudioEnergySeries::from_file(path, options.window_secs)?;
        let spans = series.silences(options)?;
        (Some(series.to_string()), spans)
    } else {
        (None, find_silences_in_file(path, options)?)
    };
    info!("{}: {} silence(s)", path.display(), spans.len());

    if args.json {
        let record = json!({
            "path": path.display().to_string(),
            "levels": levels,
            "silences": spans,
        });
        println!("{}", serde_json::to_string(&record)?);
        return Ok(());
    }

    if let Some(levels) = &levels {
        println!("{}\t{}", path.display(), levels);
    }
    for span in &spans {
        println!("{}", format_span(path, span));
    }
    Ok(())
}

/// Runs `dio sil`.
pub fn run_silence(args: SilenceArgs) -> CliResult<BatchSummary> {
    let options = silence_options(&args);
    let mut summary = BatchSummary::default();
    for path in &args.files {
        let result = process_file(path, &args, &options);
        summary.record(&result);
        if let Err(e) = result {
            output::print_failure(path, e);
        }
    }
    if summary.succeeded + summary.failed > 1 {
        output::print_summary("scanned", summary.succeeded, summary.failed);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_options_from_args() {
        let args = SilenceArgs {
            threshold: 5,
            duration: 2.5,
            window: 0.05,
            show_levels: false,
            json: false,
            files: vec![],
        };
        assert_eq!(
            silence_options(&args),
            SilenceOptions {
                window_secs: 0.05,
                threshold: 5,
                min_duration_secs: 2.5,
            }
        );
    }

    #[test]
    fn test_format_span() {
        let span = SilenceSpan {
            start_secs: 61.0,
            end_secs: 63.5,
        };
        assert_eq!(
            format_span(Path::new("talk.wav"), &span),
            "talk.wav\t62.250\t00:01:02.250\t2.500"
        );
    }
}
