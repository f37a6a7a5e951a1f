//! FFmpeg command builder utilities
//!
//! This module provides a builder pattern for constructing FFmpeg commands
//! with the common options dio passes to every invocation.

use ffmpeg_sidecar::command::FfmpegCommand;

/// Builder for creating `FFmpeg` commands with common configurations
pub struct FfmpegCommandBuilder {
    cmd: FfmpegCommand,
    hide_banner: bool,
    overwrite: bool,
}

impl Default for FfmpegCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegCommandBuilder {
    /// Creates a new `FFmpeg` command builder with sensible defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            cmd: FfmpegCommand::new(),
            hide_banner: true,
            overwrite: false,
        }
    }

    /// Sets whether to hide the `FFmpeg` banner
    #[must_use]
    pub fn with_hide_banner(mut self, hide: bool) -> Self {
        self.hide_banner = hide;
        self
    }

    /// Sets whether existing output files are overwritten (`-y`)
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Builds the `FFmpeg` command with all configured options
    #[must_use]
    pub fn build(mut self) -> FfmpegCommand {
        if self.hide_banner {
            self.cmd.arg("-hide_banner");
        }

        if self.overwrite {
            self.cmd.arg("-y");
        }

        self.cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffmpeg_command_builder_defaults() {
        let builder = FfmpegCommandBuilder::new();
        assert!(builder.hide_banner);
        assert!(!builder.overwrite);
    }

    #[test]
    fn test_ffmpeg_command_builder_with_options() {
        let builder = FfmpegCommandBuilder::new().with_overwrite(true);
        assert!(builder.overwrite);

        let builder = FfmpegCommandBuilder::new()
            .with_hide_banner(false)
            .with_overwrite(true);
        assert!(!builder.hide_banner);
        assert!(builder.overwrite);
    }
}
