//! CLI argument parser.
//!
//! Command-line flags override values from the environment, which in turn
//! override built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::audio::Waveform;
use crate::config::GeneratorConfig;

/// Waveform choices exposed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum WaveformArg {
    /// Quiet sine tone at each sound's frequency
    #[default]
    Beep,
    /// All-zero samples of each sound's duration
    Silence,
}

impl From<WaveformArg> for Waveform {
    fn from(arg: WaveformArg) -> Self {
        match arg {
            WaveformArg::Beep => Waveform::Beep,
            WaveformArg::Silence => Waveform::Silence,
        }
    }
}

/// placeholder-audio: generate placeholder beep sounds for a game
#[derive(Parser, Debug)]
#[command(name = "placeholder-audio")]
#[command(about = "Generate placeholder beep sounds, transcoded with ffmpeg when available")]
#[command(version)]
pub struct Cli {
    /// Base output directory (one subdirectory per category)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON manifest to use instead of the built-in sound table
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Only generate these categories (repeatable)
    #[arg(short, long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Content to generate for each sound
    #[arg(short, long, value_enum)]
    pub waveform: Option<WaveformArg>,

    /// Output sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Encoder program name or path
    #[arg(long)]
    pub encoder: Option<String>,

    /// Encoder audio codec
    #[arg(long)]
    pub codec: Option<String>,

    /// Encoder quality (0 = best, 9 = smallest)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub quality: Option<u8>,

    /// Extension of the compressed files
    #[arg(long)]
    pub extension: Option<String>,

    /// Keep WAV placeholders and never call the encoder
    #[arg(long)]
    pub no_transcode: bool,

    /// Print the manifest and exit without generating anything
    #[arg(long)]
    pub list: bool,

    /// Print the run summary as JSON instead of progress lines
    #[arg(long)]
    pub json: bool,

    /// Read every WAV placeholder back after the run and check its format
    #[arg(long)]
    pub verify: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(ref dir) = self.output_dir {
            config.output_dir = dir.clone();
        }

        if let Some(waveform) = self.waveform {
            config.waveform = waveform.into();
        }

        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }

        if let Some(ref program) = self.encoder {
            config.encoder.program = program.clone();
        }

        if let Some(ref codec) = self.codec {
            config.encoder.codec = codec.clone();
        }

        if let Some(quality) = self.quality {
            config.encoder.quality = quality;
        }

        if let Some(ref extension) = self.extension {
            config.encoder.extension = extension.trim_start_matches('.').to_lowercase();
        }

        if self.no_transcode {
            config.transcode = false;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::try_parse_from(["placeholder-audio"]).unwrap();
        assert!(cli.categories.is_empty());
        assert!(!cli.list);
        assert!(!cli.verify);
        assert_eq!(cli.apply(GeneratorConfig::default()), GeneratorConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "placeholder-audio",
            "--output-dir",
            "out",
            "--category",
            "ui",
            "-c",
            "music",
            "--waveform",
            "silence",
            "--sample-rate",
            "22050",
            "--encoder",
            "/usr/local/bin/ffmpeg",
            "--codec",
            "libvorbis",
            "--quality",
            "2",
            "--extension",
            ".ogg",
            "--no-transcode",
            "--verify",
        ])
        .unwrap();

        assert_eq!(cli.categories, ["ui", "music"]);
        assert!(cli.verify);

        let config = cli.apply(GeneratorConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.waveform, Waveform::Silence);
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.encoder.program, "/usr/local/bin/ffmpeg");
        assert_eq!(config.encoder.codec, "libvorbis");
        assert_eq!(config.encoder.quality, 2);
        assert_eq!(config.encoder.extension, "ogg");
        assert!(!config.transcode);
        assert!(config.validate().is_none());
    }

    #[test]
    fn quality_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["placeholder-audio", "--quality", "12"]).is_err());
    }

    #[test]
    fn waveform_arg_conversion() {
        assert_eq!(Waveform::from(WaveformArg::Beep), Waveform::Beep);
        assert_eq!(Waveform::from(WaveformArg::default()), Waveform::Beep);
    }
}
