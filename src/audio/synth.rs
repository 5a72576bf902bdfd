//! Tone and silence synthesis.
//!
//! Produces mono signed 16-bit sample buffers. Every function here is pure:
//! identical inputs always give identical samples.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};
use crate::types::SoundSpec;

/// Default output sample rate (44.1kHz).
pub const SAMPLE_RATE: u32 = 44100;

/// Attenuation applied to every tone so placeholders stay quiet and never clip.
pub const AMPLITUDE_SCALE: f64 = 0.1;

/// Largest positive value of a signed 16-bit sample.
pub const FULL_SCALE: f64 = 32767.0;

/// Largest sample count a mono 16-bit WAV data chunk can hold.
const MAX_SAMPLES: usize = (u32::MAX / 2) as usize;

/// Content generated for each sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Sine tone at the sound's frequency.
    #[default]
    Beep,

    /// All-zero samples; the frequency is ignored.
    Silence,
}

impl Waveform {
    /// Returns the string representation of the waveform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Beep => "beep",
            Waveform::Silence => "silence",
        }
    }

    /// Parses a waveform from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beep" | "sine" | "tone" => Some(Waveform::Beep),
            "silence" | "silent" => Some(Waveform::Silence),
            _ => None,
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of samples for `duration_sec` at `sample_rate`, rounded to nearest.
pub fn sample_count(duration_sec: f64, sample_rate: u32) -> usize {
    (sample_rate as f64 * duration_sec).round() as usize
}

/// Generates a sine tone.
///
/// `sample[i] = round(32767 * 0.1 * sin(2π * frequency_hz * i / sample_rate))`
///
/// Returns an empty buffer when the duration rounds to zero samples.
///
/// # Example
///
/// ```
/// use placeholder_audio::audio::{sine_wave, SAMPLE_RATE};
///
/// let samples = sine_wave(0.05, 800.0, SAMPLE_RATE).unwrap();
/// assert_eq!(samples.len(), 2205);
/// assert_eq!(samples[0], 0);
/// ```
pub fn sine_wave(duration_sec: f64, frequency_hz: f64, sample_rate: u32) -> Result<Vec<i16>> {
    check_frequency(frequency_hz)?;
    let n = checked_sample_count(duration_sec, sample_rate)?;

    let amplitude = FULL_SCALE * AMPLITUDE_SCALE;
    let step = 2.0 * PI * frequency_hz / sample_rate as f64;

    Ok((0..n)
        .map(|i| (amplitude * (step * i as f64).sin()).round() as i16)
        .collect())
}

/// Generates `round(sample_rate * duration_sec)` zero samples.
pub fn silence(duration_sec: f64, sample_rate: u32) -> Result<Vec<i16>> {
    let n = checked_sample_count(duration_sec, sample_rate)?;
    Ok(vec![0; n])
}

/// Generates the samples for one sound.
pub fn synthesize(spec: &SoundSpec, waveform: Waveform, sample_rate: u32) -> Result<Vec<i16>> {
    match waveform {
        Waveform::Beep => sine_wave(spec.duration_sec, spec.frequency_hz, sample_rate),
        Waveform::Silence => silence(spec.duration_sec, sample_rate),
    }
}

fn check_frequency(frequency_hz: f64) -> Result<()> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(GenError::invalid_specification(format!(
            "frequency_hz must be finite and positive, got {}",
            frequency_hz
        )));
    }
    Ok(())
}

fn checked_sample_count(duration_sec: f64, sample_rate: u32) -> Result<usize> {
    if !duration_sec.is_finite() || duration_sec <= 0.0 {
        return Err(GenError::invalid_specification(format!(
            "duration_sec must be finite and positive, got {}",
            duration_sec
        )));
    }

    if sample_rate == 0 {
        return Err(GenError::invalid_specification("sample_rate must be > 0"));
    }

    // Compare in f64 first; the `as usize` cast saturates.
    let exact = (sample_rate as f64 * duration_sec).round();
    if exact > MAX_SAMPLES as f64 {
        return Err(GenError::invalid_specification(format!(
            "duration_sec {} needs {} samples (maximum {})",
            duration_sec, exact, MAX_SAMPLES
        )));
    }

    Ok(sample_count(duration_sec, sample_rate))
}
