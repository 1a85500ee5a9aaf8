use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use persian_pdf::ExtractionMode;

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "persian-pdf",
    version,
    about = "Extract text from documents, repairing Persian and Arabic character order"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Increase logging verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the text of a document.
    Extract(ExtractArgs),
    /// Print the detected language of a document's raw text.
    Detect(DetectArgs),
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Document to read, or `-` for stdin.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
    /// Extraction mode (defaults to the config file's mode, then `normal`).
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
    /// Configuration file (TOML, YAML or JSON). Without it `persian-pdf.toml`
    /// is searched for in the current directory and its parents.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Document to read, or `-` for stdin.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Normal,
    Advanced,
}

impl From<ModeArg> for ExtractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Normal => ExtractionMode::Normal,
            ModeArg::Advanced => ExtractionMode::Advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Whether `path` names standard input.
pub fn is_stdin(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}
