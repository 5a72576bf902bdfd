//! Audio module.
//!
//! Sample synthesis and WAV container output.

pub mod synth;
pub mod wav;

// Re-export commonly used items
pub use synth::{
    sample_count, silence, sine_wave, synthesize, Waveform, AMPLITUDE_SCALE, FULL_SCALE,
    SAMPLE_RATE,
};
pub use wav::{
    read_wav, samples_to_duration, wav_spec, write_wav, BITS_PER_SAMPLE, CHANNELS, WAV_EXTENSION,
};
