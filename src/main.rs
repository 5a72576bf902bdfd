//! placeholder-audio: generates placeholder sounds for every manifest entry.
//!
//! Probes for the encoder once, then walks the manifest category by category,
//! printing a line per generated file.

use std::io::{self, Write};

use placeholder_audio::cli::Cli;
use placeholder_audio::config::GeneratorConfig;
use placeholder_audio::error::{ErrorCode, GenError, Result};
use placeholder_audio::generation::{generate_manifest, verify_placeholders};
use placeholder_audio::report::ConsoleReporter;
use placeholder_audio::transcode::Strategy;
use placeholder_audio::types::Manifest;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = cli.apply(GeneratorConfig::from_env());
    if let Some(reason) = config.validate() {
        return Err(GenError::invalid_config(reason));
    }

    let manifest = match cli.manifest {
        Some(ref path) => Manifest::load(path)?,
        None => Manifest::builtin(),
    };
    let manifest = manifest.filter(&cli.categories)?;

    if cli.list {
        let stdout = io::stdout();
        let mut reporter = ConsoleReporter::new(stdout.lock(), &config);
        return reporter.manifest(&manifest).map_err(console_error);
    }

    tracing::info!(
        output_dir = %config.output_dir.display(),
        sounds = manifest.len(),
        waveform = %config.waveform,
        "starting run"
    );

    let strategy = Strategy::detect(&config.encoder, config.transcode);

    if cli.json {
        let summary = generate_manifest(&manifest, &config, &strategy, |_| {})?;
        if cli.verify {
            verify_placeholders(&summary, config.sample_rate)?;
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &summary).map_err(|e| {
            GenError::with_source(
                ErrorCode::OutputWriteFailed,
                "Failed to write JSON run summary to stdout",
                e,
            )
        })?;
        return writeln!(out).and_then(|_| out.flush()).map_err(console_error);
    }

    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock(), &config);
    reporter.header(&strategy).map_err(console_error)?;

    // Console output is best effort; a closed stdout must not abort generation.
    let summary = generate_manifest(&manifest, &config, &strategy, |event| {
        if let Err(e) = reporter.event(&event) {
            tracing::debug!(error = %e, "console write failed");
        }
    })?;

    if cli.verify {
        verify_placeholders(&summary, config.sample_rate)?;
    }

    reporter.footer(&summary).map_err(console_error)?;
    reporter.into_inner().flush().map_err(console_error)
}

fn console_error(e: io::Error) -> GenError {
    GenError::output_write_failed("write to stdout", e)
}
