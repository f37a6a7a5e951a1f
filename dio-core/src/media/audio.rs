//! PCM audio loading.
//!
//! WAV files are read directly with `hound`. Other formats are decoded to a
//! temporary WAV file by ffmpeg first.

use log::{debug, info};
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::external::decode_to_wav;

/// Interleaved PCM samples.
///
/// Integer sources keep their native scale. Float sources are scaled to the
/// 16-bit range so that energy levels are comparable across formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmAudio {
    pub sample_rate: u32,
    pub channels: u16,
    pub samples: Vec<i32>,
}

impl PcmAudio {
    /// Number of frames (samples per channel).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / usize::from(self.channels)
        }
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frame_count() as f64 / f64::from(self.sample_rate)
        }
    }
}

/// Reads a WAV file into memory.
pub fn read_wav(path: &Path) -> CoreResult<PcmAudio> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.sample_rate == 0 || spec.channels == 0 {
        return Err(CoreError::Wav(hound::Error::FormatError(
            "invalid sample rate or channel count",
        )));
    }

    debug!(
        "WAV spec for {}: {} Hz, {} channels, {} bits, {:?}",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    let samples = match spec.sample_format {
        hound::SampleFormat::Int => reader.samples::<i32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i32))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(PcmAudio {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        samples,
    })
}

/// Loads any audio (or video) file the local ffmpeg can decode.
pub fn load_audio(path: &Path) -> CoreResult<PcmAudio> {
    let is_wav = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
    if is_wav {
        return read_wav(path);
    }

    let tmp = tempfile::Builder::new()
        .prefix("dio-")
        .suffix(".wav")
        .tempfile()?;
    info!("Decoding {} to WAV", path.display());
    decode_to_wav(path, tmp.path())?;
    read_wav(tmp.path())
}
