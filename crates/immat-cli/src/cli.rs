//! CLI argument definitions for the plate checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use immat_core::{PlateCategory, PlateScheme};

#[derive(Parser)]
#[command(
    name = "immat",
    version,
    about = "Validate and format French vehicle registration numbers",
    long_about = "Validate and format French vehicle registration numbers.\n\n\
                  Recognises SIV plates (AB-123-CD, W garage, WW, mopeds) and\n\
                  FNI plates (123 AB 75, W garage, WW). Only the shape of a\n\
                  plate is checked, never whether it was actually issued."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify plates given as arguments (or one per line on stdin).
    Check(CheckArgs),

    /// Print the canonical form of each plate without validating it.
    Format(FormatArgs),

    /// Classify every plate in a column of a CSV file.
    Batch(BatchArgs),

    /// List the supported plate categories.
    Categories,
}

/// Options deciding which plates count as acceptable.
#[derive(Parser)]
pub struct PolicyArgs {
    /// Only accept plates of this scheme.
    #[arg(long = "scheme", value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Only accept plates of these categories (repeatable, e.g. siv-normal).
    #[arg(long = "category", value_name = "CODE")]
    pub categories: Vec<PlateCategory>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Plates to check; read from stdin when omitted.
    #[arg(value_name = "PLATE")]
    pub plates: Vec<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct FormatArgs {
    /// Plates to format; read from stdin when omitted.
    #[arg(value_name = "PLATE")]
    pub plates: Vec<String>,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub path: PathBuf,

    /// Header of the column holding plates (case-insensitive).
    #[arg(long = "column", default_value = "plate")]
    pub column: String,

    /// Field delimiter.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Check cells exactly as written instead of trimming whitespace.
    #[arg(long = "keep-whitespace")]
    pub keep_whitespace: bool,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Exit successfully even when some plates are rejected.
    #[arg(long = "allow-invalid")]
    pub allow_invalid: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    Siv,
    Fni,
}

impl From<SchemeArg> for PlateScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Siv => PlateScheme::Siv,
            SchemeArg::Fni => PlateScheme::Fni,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
