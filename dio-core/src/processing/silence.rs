//! Silence detection over quantized audio energy.
//!
//! The track is cut into fixed windows (0.1 s by default). Each window's
//! loudness is the mean of the per-frame peak amplitude across channels,
//! quantized on a log scale to a level between 0 and 15 and written as one
//! hex digit. Silences are then runs of low digits in that string.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::config::SilenceOptions;
use crate::error::{CoreError, CoreResult};
use crate::media::{PcmAudio, load_audio};

/// Divisor applied to `log2(1 + amplitude)`. Full-scale 16-bit audio lands
/// on level 9.
const LEVEL_DIVISOR: f64 = 1.501;

/// Highest level a window can take (one hex digit).
const MAX_LEVEL: u8 = 15;

/// Highest threshold accepted by silence searches.
pub const MAX_SILENCE_THRESHOLD: u8 = 9;

/// A run of silent windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SilenceSpan {
    pub start_secs: f64,
    pub end_secs: f64,
}

impl SilenceSpan {
    #[must_use]
    pub fn midpoint_secs(&self) -> f64 {
        (self.start_secs + self.end_secs) / 2.0
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

/// Quantized loudness of an audio track, one level per window.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioEnergySeries {
    levels: Vec<u8>,
    symbols: String,
    window_secs: f64,
}

impl fmt::Display for AudioEnergySeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

/// Maps a mean amplitude to its energy level.
#[must_use]
pub fn energy_level(mean_amplitude: f64) -> u8 {
    let level = ((1.0 + mean_amplitude.max(0.0)).log2() / LEVEL_DIVISOR).floor();
    level.min(f64::from(MAX_LEVEL)) as u8
}

impl AudioEnergySeries {
    /// Wraps precomputed levels. Levels above 15 are clamped.
    pub fn from_levels(levels: Vec<u8>, window_secs: f64) -> CoreResult<Self> {
        if !(window_secs > 0.0 && window_secs.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "energy window must be a positive number of seconds, got {window_secs}"
            )));
        }
        let levels: Vec<u8> = levels.into_iter().map(|l| l.min(MAX_LEVEL)).collect();
        let symbols = levels
            .iter()
            .map(|&l| format!("{l:X}"))
            .collect::<String>();
        Ok(Self {
            levels,
            symbols,
            window_secs,
        })
    }

    /// Computes the series from decoded PCM.
    ///
    /// Trailing frames that do not fill a whole window are dropped.
    pub fn from_pcm(audio: &PcmAudio, window_secs: f64) -> CoreResult<Self> {
        let window = (f64::from(audio.sample_rate) * window_secs).floor();
        if !(window >= 1.0 && window.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "energy window of {window_secs}s is shorter than one sample at {} Hz",
                audio.sample_rate
            )));
        }
        let window = window as usize;
        let channels = usize::from(audio.channels.max(1));

        let peaks = audio
            .samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0));

        let mut levels = Vec::with_capacity(audio.frame_count() / window);
        let mut sum = 0u64;
        let mut filled = 0usize;
        for peak in peaks {
            sum += u64::from(peak);
            filled += 1;
            if filled == window {
                levels.push(energy_level(sum as f64 / window as f64));
                sum = 0;
                filled = 0;
            }
        }

        log::debug!(
            "Computed {} energy windows of {} frames from {} frames",
            levels.len(),
            window,
            audio.frame_count()
        );
        Self::from_levels(levels, window_secs)
    }

    /// Loads `path` (decoding through ffmpeg unless it is WAV) and computes
    /// its series.
    pub fn from_file(path: &Path, window_secs: f64) -> CoreResult<Self> {
        let audio = load_audio(path)?;
        Self::from_pcm(&audio, window_secs)
    }

    #[must_use]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    #[must_use]
    pub fn window_secs(&self) -> f64 {
        self.window_secs
    }

    /// Every maximal run of windows at or below `threshold` lasting at least
    /// `min_duration_secs`. The duration is rounded to whole windows, ties to
    /// even, and is at least one window.
    pub fn find_silence_spans(
        &self,
        threshold: u8,
        min_duration_secs: f64,
    ) -> CoreResult<Vec<SilenceSpan>> {
        if threshold > MAX_SILENCE_THRESHOLD {
            return Err(CoreError::InvalidInput(format!(
                "silence threshold must be between 0 and {MAX_SILENCE_THRESHOLD}, got {threshold}"
            )));
        }
        let min_windows = ((min_duration_secs / self.window_secs).round_ties_even() as usize).max(1);

        let pattern = Regex::new(&format!("[0-{threshold}]+"))
            .map_err(|e| CoreError::InvalidInput(e.to_string()))?;

        Ok(pattern
            .find_iter(&self.symbols)
            .filter(|m| m.len() >= min_windows)
            .map(|m| SilenceSpan {
                start_secs: m.start() as f64 * self.window_secs,
                end_secs: m.end() as f64 * self.window_secs,
            })
            .collect())
    }

    /// `find_silence_spans` with the threshold and duration from `options`.
    pub fn silences(&self, options: &SilenceOptions) -> CoreResult<Vec<SilenceSpan>> {
        self.find_silence_spans(options.threshold, options.min_duration_secs)
    }

    /// Midpoints, in seconds, of the silences found by `find_silence_spans`.
    pub fn find_silences(&self, threshold: u8, min_duration_secs: f64) -> CoreResult<Vec<f64>> {
        Ok(self
            .find_silence_spans(threshold, min_duration_secs)?
            .iter()
            .map(SilenceSpan::midpoint_secs)
            .collect())
    }
}

/// Finds silences in an audio or video file.
pub fn find_silences_in_file(path: &Path, options: &SilenceOptions) -> CoreResult<Vec<SilenceSpan>> {
    AudioEnergySeries::from_file(path, options.window_secs)?.silences(options)
}
