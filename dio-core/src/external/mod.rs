// ============================================================================
// dio-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools
//
// This module encapsulates the ffmpeg invocations dio makes. Everything that
// spawns a child process lives here so the analysis code stays pure.

/// Contains the ffmpeg command builder
pub mod ffmpeg_builder;

/// Contains the ffmpeg invocations (audio decoding)
pub mod ffmpeg;

pub use ffmpeg::decode_to_wav;
pub use ffmpeg_builder::FfmpegCommandBuilder;
