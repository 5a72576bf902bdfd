//! WAV container writer for placeholder sounds.
//!
//! Writes mono 16-bit PCM using the hound crate.

use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{ErrorCode, GenError, Result};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (2-byte signed integers).
pub const BITS_PER_SAMPLE: u16 = 16;

/// File extension of the uncompressed container.
pub const WAV_EXTENSION: &str = "wav";

/// Returns the container format used for every placeholder.
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes samples to a WAV file, creating missing parent directories.
///
/// # Arguments
///
/// * `samples` - Mono 16-bit samples
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz (typically 44100)
///
/// # Example
///
/// ```ignore
/// use placeholder_audio::audio::write_wav;
///
/// let samples = vec![0i16, 3277, 0, -3277];
/// write_wav(&samples, Path::new("assets/audio/ui/click.wav"), 44100)?;
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            GenError::output_write_failed(format!("create directory {}", parent.display()), e)
        })?;
    }

    let mut writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(|e| {
        GenError::output_write_failed(format!("create WAV file {}", path.display()), e)
    })?;

    for &sample in samples {
        writer.write_sample(sample).map_err(|e| {
            GenError::output_write_failed(format!("write sample to {}", path.display()), e)
        })?;
    }

    writer.finalize().map_err(|e| {
        GenError::output_write_failed(format!("finalize WAV file {}", path.display()), e)
    })?;

    tracing::debug!(path = %path.display(), samples = samples.len(), "wrote WAV");
    Ok(())
}

/// Reads a 16-bit WAV file back into its header and samples.
pub fn read_wav(path: &Path) -> Result<(WavSpec, Vec<i16>)> {
    let mut reader = WavReader::open(path).map_err(|e| {
        GenError::with_source(
            ErrorCode::OutputWriteFailed,
            format!("Failed to open WAV file {}", path.display()),
            e,
        )
    })?;

    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            GenError::with_source(
                ErrorCode::OutputWriteFailed,
                format!("Failed to read samples from {}", path.display()),
                e,
            )
        })?;

    Ok((spec, samples))
}

/// Calculates the duration of mono audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{sine_wave, SAMPLE_RATE};
    use tempfile::tempdir;

    #[test]
    fn write_wav_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("click.wav");

        let samples = sine_wave(0.05, 800.0, SAMPLE_RATE).unwrap();
        write_wav(&samples, &path, SAMPLE_RATE).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.sample_format, SampleFormat::Int);
        assert_eq!(reader.len() as usize, samples.len());

        let (_, read_back) = read_wav(&path).unwrap();
        assert_eq!(read_back, samples);
    }

    #[test]
    fn write_wav_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("audio").join("ui").join("tick.wav");

        write_wav(&[0, 1, -1], &path, SAMPLE_RATE).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_wav_empty_buffer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        write_wav(&[], &path, SAMPLE_RATE).unwrap();
        let (spec, samples) = read_wav(&path).unwrap();
        assert_eq!(spec.channels, CHANNELS);
        assert!(samples.is_empty());
    }

    #[test]
    fn write_wav_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = write_wav(&[0], &blocker.join("x.wav"), SAMPLE_RATE).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutputWriteFailed);
    }

    #[test]
    fn write_wav_byte_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.wav");
        write_wav(&[0x0102, -2], &path, SAMPLE_RATE).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // PCM payload is little-endian and comes last.
        assert_eq!(&bytes[bytes.len() - 4..], &[0x02, 0x01, 0xFE, 0xFF]);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(22050, 44100), 0.5);
    }
}
