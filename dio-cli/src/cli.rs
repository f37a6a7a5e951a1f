// dio-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dio_core::AvatarFormat;
use dio_core::config::{
    DEFAULT_AVATAR_SIZE, DEFAULT_ENERGY_WINDOW_SECS, DEFAULT_HASH_SIZE, DEFAULT_SILENCE_DURATION_SECS,
    DEFAULT_SILENCE_THRESHOLD, DEFAULT_STDMAX, DEFAULT_TRIM_PREFIX,
};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "dio",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "dio: media file utilities",
    long_about = "Trims uniform image margins, finds silences in audio, hashes images and makes avatars using the dio-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crop images with homogeneously colored margins
    Imt(TrimArgs),

    /// Find silences in audio or video files
    Sil(SilenceArgs),

    /// Print average hashes of images
    Ihash(HashArgs),

    /// Make square avatar thumbnails of images
    Avatar(AvatarArgs),
}

#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Maximum standard deviation of margin pixels, per channel
    #[arg(short, long, value_name = "STDMAX", default_value_t = DEFAULT_STDMAX)]
    pub stdmax: f64,

    /// Name prefix for generated files
    #[arg(short, long, value_name = "PREFIX", default_value = DEFAULT_TRIM_PREFIX)]
    pub prefix: String,

    /// Delete original files after a successful crop
    #[arg(short = 'D', long)]
    pub delete: bool,

    /// Only report the detected crop boxes; write and delete nothing
    #[arg(long)]
    pub dry: bool,

    /// Sample corners the way earlier releases did (bottom-left skipped)
    #[arg(long)]
    pub legacy_corners: bool,

    /// Process files on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Print one JSON object per file instead of text
    #[arg(long)]
    pub json: bool,

    /// Images, or directories of images, to crop
    #[arg(value_name = "PATH", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SilenceArgs {
    /// Highest energy level (0-9) counted as silence
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        default_value_t = DEFAULT_SILENCE_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    pub threshold: u8,

    /// Minimum silence length in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = DEFAULT_SILENCE_DURATION_SECS)]
    pub duration: f64,

    /// Length of one energy window in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = DEFAULT_ENERGY_WINDOW_SECS)]
    pub window: f64,

    /// Also print the energy level string of each file
    #[arg(long)]
    pub show_levels: bool,

    /// Print one JSON object per file instead of text
    #[arg(long)]
    pub json: bool,

    /// Audio or video files
    #[arg(value_name = "PATH", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Side length of the hash grid (hash has SIZE*SIZE bits)
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value_t = DEFAULT_HASH_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=64)
    )]
    pub size: u32,

    /// Images, or directories of images, to hash
    #[arg(value_name = "PATH", required = true)]
    pub files: Vec<PathBuf>,
}

/// Avatar output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarFormatArg {
    Jpg,
    Png,
}

impl From<AvatarFormatArg> for AvatarFormat {
    fn from(arg: AvatarFormatArg) -> Self {
        match arg {
            AvatarFormatArg::Jpg => AvatarFormat::Jpg,
            AvatarFormatArg::Png => AvatarFormat::Png,
        }
    }
}

#[derive(Args, Debug)]
pub struct AvatarArgs {
    /// Width and height of the avatar in pixels
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value_t = DEFAULT_AVATAR_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub size: u32,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = AvatarFormatArg::Jpg)]
    pub format: AvatarFormatArg,

    /// Images, or directories of images
    #[arg(value_name = "PATH", required = true)]
    pub files: Vec<PathBuf>,
}
