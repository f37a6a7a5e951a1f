//! FFmpeg invocations used by dio.
//!
//! The only transcoding dio needs is turning an arbitrary audio or video file
//! into a WAV file that `hound` can read.

use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use log::{debug, trace};
use std::path::Path;

use super::ffmpeg_builder::FfmpegCommandBuilder;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

/// Decodes the audio of `input` into a WAV file at `output`.
///
/// Equivalent to `ffmpeg -hide_banner -y -i <input> -vn -f wav <output>`.
/// Existing output is overwritten.
pub fn decode_to_wav(input: &Path, output: &Path) -> CoreResult<()> {
    let mut cmd = FfmpegCommandBuilder::new().with_overwrite(true).build();
    cmd.input(input);
    cmd.args(["-vn", "-f", "wav"]);
    cmd.output(output);

    debug!(
        "Decoding audio: {} -> {}",
        input.display(),
        output.display()
    );

    let mut child = cmd
        .spawn()
        .map_err(|e| command_start_error("ffmpeg", e))?;

    let mut errors = Vec::new();
    let events = child
        .iter()
        .map_err(|e| CoreError::CommandFailed("ffmpeg".to_string(), e.to_string()))?;
    for event in events {
        match event {
            FfmpegEvent::Error(line) | FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                errors.push(line);
            }
            FfmpegEvent::Log(_, line) => trace!("ffmpeg: {line}"),
            _ => {}
        }
    }

    let status = child
        .wait()
        .map_err(|e| CoreError::CommandFailed("ffmpeg".to_string(), e.to_string()))?;
    if !status.success() {
        return Err(command_failed_error("ffmpeg", status, errors.join("; ")));
    }
    Ok(())
}
