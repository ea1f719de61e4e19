//! CLI argument definitions for the order cleansing pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use orders_clean::DEFAULT_PIPELINE_VERSION;

#[derive(Parser)]
#[command(
    name = "order-cleanse",
    version,
    about = "Order cleansing pipeline - validate and type raw order exports",
    long_about = "Clean a batch of raw order exports into a validated, typed dataset.\n\n\
                  Deduplicates, normalizes fields, parses mixed date formats, drops\n\
                  records failing mandatory or range checks, derives order totals, and\n\
                  writes status-partitioned Parquet with a run-wide audit stamp."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Clean a batch of raw order exports and write partitioned Parquet.
    Run(RunArgs),

    /// List the accepted order_date input formats, in match order.
    Formats,
}

#[derive(Parser)]
pub struct RunArgs {
    /// A raw export CSV file, or a directory of them.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for partitioned Parquet (default: <INPUT>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run identifier used in logs (default: derived from the input name).
    #[arg(long = "run-id", value_name = "NAME")]
    pub run_id: Option<String>,

    /// Version tag stamped onto every cleaned record.
    #[arg(long = "pipeline-version", default_value = DEFAULT_PIPELINE_VERSION)]
    pub pipeline_version: String,

    /// Clean and report without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
