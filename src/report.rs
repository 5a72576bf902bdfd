//! Console reporting.
//!
//! Human-readable progress output. Nothing here is meant to be parsed; use
//! the JSON summary for that.

use std::io::{self, Write};

use crate::audio::Waveform;
use crate::config::GeneratorConfig;
use crate::generation::ProgressEvent;
use crate::transcode::{EncoderSettings, Strategy};
use crate::types::{ArtifactOutcome, FallbackReason, Manifest, RunSummary};

const RULE_WIDTH: usize = 60;

/// Writes console progress for a run.
pub struct ConsoleReporter<W: Write> {
    out: W,
    encoder: EncoderSettings,
    waveform: Waveform,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `out` for a run with `config`.
    pub fn new(out: W, config: &GeneratorConfig) -> Self {
        Self {
            out,
            encoder: config.encoder.clone(),
            waveform: config.waveform,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the run header and the encoder probe result.
    pub fn header(&mut self, strategy: &Strategy) -> io::Result<()> {
        writeln!(self.out, "Generating placeholder audio files...")?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;

        match strategy {
            Strategy::Transcode(encoder) => {
                let ext = &encoder.settings().extension;
                writeln!(
                    self.out,
                    "✓ {} found - will generate {} files",
                    encoder.program().display(),
                    ext.to_uppercase()
                )?;
            }
            Strategy::Placeholder(FallbackReason::Disabled) => {
                writeln!(self.out, "- transcoding disabled - will generate WAV files")?;
            }
            Strategy::Placeholder(_) => {
                writeln!(self.out, "✗ encoder not found - will generate WAV placeholders")?;
                writeln!(self.out, "  Install ffmpeg to generate compressed files")?;
            }
        }

        writeln!(self.out)
    }

    /// Prints one progress event.
    pub fn event(&mut self, event: &ProgressEvent<'_>) -> io::Result<()> {
        match event {
            ProgressEvent::CategoryStarted { category } => {
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "{} sounds ({} files):",
                    category.name.to_uppercase(),
                    category.sounds.len()
                )
            }
            ProgressEvent::ArtifactFinished { artifact } => match &artifact.outcome {
                ArtifactOutcome::Transcoded { .. } => {
                    writeln!(self.out, "  ✓ {}", artifact.file_name())
                }
                ArtifactOutcome::Fallback {
                    reason: FallbackReason::EncoderFailed { .. },
                    ..
                } => writeln!(
                    self.out,
                    "  ✗ {}.{} (conversion failed)",
                    artifact.name, self.encoder.extension
                ),
                ArtifactOutcome::Fallback { .. } => {
                    writeln!(self.out, "  ⚠ {} (placeholder)", artifact.file_name())
                }
            },
        }
    }

    /// Prints the final counts and, if any placeholders were kept, how to
    /// convert them by hand.
    pub fn footer(&mut self, summary: &RunSummary) -> io::Result<()> {
        let encoder = &self.encoder;
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.out,
            "Created {} placeholder audio files ({} transcoded, {} placeholders, {} failed conversions)",
            summary.total(),
            summary.transcoded(),
            summary.placeholders(),
            summary.failed_conversions()
        )?;

        if summary.placeholders() > 0 {
            writeln!(self.out)?;
            writeln!(self.out, "NOTE: Placeholder files are in WAV format.")?;
            writeln!(
                self.out,
                "To convert to {}, install ffmpeg and run:",
                encoder.extension.to_uppercase()
            )?;
            writeln!(self.out, "  for f in <output-dir>/*/*.wav; do")?;
            writeln!(
                self.out,
                "    ffmpeg -i \"$f\" -c:a {} -q:a {} \"${{f%.wav}}.{}\"",
                encoder.codec, encoder.quality, encoder.extension
            )?;
            writeln!(self.out, "    rm \"$f\"")?;
            writeln!(self.out, "  done")?;
        }

        writeln!(self.out)?;
        match self.waveform {
            Waveform::Beep => writeln!(self.out, "These are test placeholders with simple beeps.")?,
            Waveform::Silence => writeln!(self.out, "These are silent test placeholders.")?,
        }
        writeln!(self.out, "Replace them with real sounds before shipping.")
    }

    /// Prints the manifest without generating anything.
    pub fn manifest(&mut self, manifest: &Manifest) -> io::Result<()> {
        for category in &manifest.categories {
            writeln!(self.out, "{} ({} sounds)", category.name, category.sounds.len())?;
            for sound in &category.sounds {
                writeln!(
                    self.out,
                    "  {:<24} {:>5.2}s {:>7.1} Hz",
                    sound.name, sound.duration_sec, sound.frequency_hz
                )?;
            }
        }
        writeln!(self.out, "{} sounds total", manifest.len())
    }
}
