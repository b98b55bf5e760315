//! CLI argument definitions for the Trackman data tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use trackman_ingest::{DEFAULT_EXCLUDE_TOKEN, DEFAULT_MIN_SIZE_BYTES};

#[derive(Parser)]
#[command(
    name = "trackman",
    version,
    about = "Combine and clean per-game Trackman CSV exports",
    long_about = "Combine per-game Trackman CSV exports into a single analysis-ready dataset.\n\n\
                  Exports are discovered under <ROOT>/<month>/<day>/csv and merged onto the\n\
                  union of all observed columns. Companion subcommands clean numeric columns,\n\
                  filter rows with missing team names, and backfill team-name aliases."
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
    /// Discover eligible game exports and merge them into one dataset.
    Combine(CombineArgs),

    /// Drop vendor columns and coerce numeric columns on a combined dataset.
    Clean(CleanArgs),

    /// Drop rows whose full team names are missing.
    FilterTeams(FilterTeamsArgs),

    /// Copy HomeTeam/AwayTeam into the *TeamFull alias columns.
    BackfillTeams(BackfillTeamsArgs),
}

#[derive(Parser)]
pub struct CombineArgs {
    /// Root directory containing <month>/<day>/csv subdirectories.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Combined output file (default: <ROOT>/combined.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Minimum source file size in bytes, exclusive; smaller files are
    /// treated as placeholder exports.
    #[arg(long = "min-size", value_name = "BYTES", default_value_t = DEFAULT_MIN_SIZE_BYTES)]
    pub min_size: u64,

    /// Case-insensitive file-name substring that excludes an export.
    #[arg(
        long = "exclude-token",
        value_name = "TOKEN",
        default_value = DEFAULT_EXCLUDE_TOKEN
    )]
    pub exclude_token: String,

    /// Overwrite AutoPitchType with TaggedPitchType where a tag is present.
    #[arg(long = "fix-pitch-types")]
    pub fix_pitch_types: bool,

    /// Write a machine-readable run report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Combined CSV file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned output file (default: rewrite INPUT in place).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FilterTeamsArgs {
    /// Combined CSV file to filter.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Filtered output file (default: rewrite INPUT in place).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct BackfillTeamsArgs {
    /// Combined CSV file to update.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: rewrite INPUT in place).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
