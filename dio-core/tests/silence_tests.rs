// dio-core/tests/silence_tests.rs

use dio_core::config::SilenceOptions;
use dio_core::processing::silence::AudioEnergySeries;
use dio_core::{CoreError, find_silences_in_file};
use std::path::Path;
use tempfile::tempdir;

const RATE: u32 = 8000;

// Writes a stereo 16-bit WAV made of (seconds, amplitude) segments. Loud
// segments are a square wave, quiet ones are digital silence.
fn write_segments(path: &Path, segments: &[(f64, i16)]) {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV");
    for &(seconds, amplitude) in segments {
        let frames = (seconds * f64::from(RATE)).round() as usize;
        for i in 0..frames {
            let s = if i % 2 == 0 { amplitude } else { -amplitude };
            writer.write_sample(s).unwrap();
            writer.write_sample(s / 2).unwrap();
        }
    }
    writer.finalize().expect("Failed to finalize WAV");
}

#[test]
fn test_silences_in_wav_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("speech.wav");
    write_segments(
        &path,
        &[(2.0, 12000), (1.5, 0), (1.0, 12000), (0.5, 0), (1.0, 12000), (2.0, 0)],
    );

    let spans = find_silences_in_file(&path, &SilenceOptions::default())?;

    // The 0.5s pause is too short to count.
    assert_eq!(spans.len(), 2);
    assert!((spans[0].start_secs - 2.0).abs() < 1e-6);
    assert!((spans[0].end_secs - 3.5).abs() < 1e-6);
    assert!((spans[0].midpoint_secs() - 2.75).abs() < 1e-6);
    assert!((spans[1].start_secs - 6.0).abs() < 1e-6);
    assert!((spans[1].end_secs - 8.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_energy_string_of_wav_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("steps.wav");
    write_segments(&path, &[(0.2, 0), (0.2, 32767), (0.1, 3)]);

    let series = AudioEnergySeries::from_file(&path, 0.1)?;
    assert_eq!(series.to_string(), "00991");
    Ok(())
}

#[test]
fn test_invalid_threshold_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("short.wav");
    write_segments(&path, &[(1.0, 0)]);

    let options = SilenceOptions {
        threshold: 12,
        ..SilenceOptions::default()
    };
    assert!(matches!(
        find_silences_in_file(&path, &options),
        Err(CoreError::InvalidInput(_))
    ));
    Ok(())
}
