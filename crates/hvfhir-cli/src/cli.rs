//! CLI argument definitions for the HealthVault to FHIR converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hvfhir",
    version,
    about = "Convert HealthVault things to FHIR Observation resources",
    long_about = "Convert HealthVault things to FHIR STU3 Observation resources.\n\n\
                  Reads a JSON thing (or an array of things) and writes the\n\
                  corresponding Observation JSON."
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

    /// Allow thing identifiers to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a JSON thing document to FHIR Observation JSON.
    Convert(ConvertArgs),

    /// List the thing kinds that can be converted.
    Kinds,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// JSON file holding one thing or an array of things.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write observations to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON file with code system overrides per vocabulary.
    #[arg(long = "vocabulary", value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Write single-line JSON instead of pretty-printed JSON.
    #[arg(long = "compact")]
    pub compact: bool,

    /// Write the observations that converted even if others failed.
    #[arg(long = "keep-going")]
    pub keep_going: bool,
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
