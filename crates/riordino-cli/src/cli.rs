//! CLI argument definitions for the reorder analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "riordino",
    version,
    about = "Riordino - Reorder signals for SME inventories",
    long_about = "Compute reorder points, safety stock, suggested order quantities and\n\
                  stockout risk from a stock-keeping-unit table.\n\n\
                  Reads CSV exports (comma or semicolon separated), writes a prioritized\n\
                  results CSV and a KPI report."
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
    /// Analyze an inventory file and generate reorder signals.
    Analyze(AnalyzeArgs),

    /// List the input columns the analyzer expects.
    Columns,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the inventory CSV file.
    #[arg(value_name = "INVENTORY_FILE")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Year of the target period (default: current year).
    #[arg(long = "year", value_name = "YYYY")]
    pub year: Option<i32>,

    /// Month of the target period, 1-12 (default: current month).
    #[arg(long = "month", value_name = "MM")]
    pub month: Option<u32>,

    /// Explicit working-days count, bypassing the Monday-Friday calendar.
    #[arg(long = "workdays", conflicts_with_all = ["year", "month"])]
    pub workdays: Option<u32>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Always use the simple criticality formula for safety stock.
    ///
    /// By default, rows carrying a `deviazione_standard` value get the
    /// service-level formula. Use this flag when the deviation column is
    /// unreliable and every row should be treated the same way.
    #[arg(long = "simple-only")]
    pub simple_only: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Both,
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
