mod cli;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use persian_pdf::core::mime;
use persian_pdf::core::parser::{AutoDetectParser, DocumentParser};
use persian_pdf::language_detection::{LanguageDetector, default_detector};
use persian_pdf::{ExtractionConfig, ExtractionMode, ExtractionResult, TextExtractor};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, DetectArgs, ExtractArgs, OutputFormat, is_stdin};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Extract(args) => run_extract(args),
        Commands::Detect(args) => run_detect(args),
    }
}

/// Explicit `--config` wins; otherwise a discovered `persian-pdf.toml`, otherwise defaults.
fn load_config(path: Option<&Path>) -> Result<ExtractionConfig> {
    match path {
        Some(path) => ExtractionConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ExtractionConfig::discover()
            .context("failed to discover config file")?
            .unwrap_or_default()),
    }
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mode = args.mode.map(ExtractionMode::from).unwrap_or(config.mode);
    let extractor = TextExtractor::from_config(&config).context("failed to initialize extractor")?;

    tracing::info!(input = %args.input.display(), %mode, "extracting");

    let result = if is_stdin(&args.input) {
        extractor
            .extract(&mut io::stdin().lock(), mode)
            .context("failed to extract text from stdin")?
    } else {
        extractor
            .extract_file(&args.input, mode)
            .with_context(|| format!("failed to extract text from {}", args.input.display()))?
    };

    write_result(&result, args.format)
}

fn write_result(result: &ExtractionResult, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => out.write_all(result.content.as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, result).context("failed to serialize result")?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn run_detect(args: DetectArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let parser = AutoDetectParser::new().context("failed to initialize parser")?;

    let parsed = if is_stdin(&args.input) {
        parser.parse(&mut io::stdin().lock())
    } else {
        let mime_hint = mime::detect_mime_type(&args.input, false).ok();
        let mut file = std::fs::File::open(&args.input)
            .with_context(|| format!("failed to open {}", args.input.display()))?;
        parser.parse_with_hint(&mut file, mime_hint.as_deref())
    };
    let document = parsed.with_context(|| format!("failed to parse {}", args.input.display()))?;

    let detector = default_detector(&config.language_detection);
    let language = detector.detect(&document.content);
    println!("{}", language.as_deref().unwrap_or("unknown"));

    Ok(())
}
