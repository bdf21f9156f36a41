//! CLI argument definitions for the sanctions list normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sanctions",
    version,
    about = "Normalize the UK consolidated sanctions list into one row per entity",
    long_about = "Normalize the UK consolidated sanctions list.\n\n\
                  Reads the raw list (one row per name variant), parses dates of birth,\n\
                  standardizes countries, consolidates each Group ID into a single\n\
                  record and runs a data quality gate before writing the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Allow row values (names, document numbers) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a raw list file and write the consolidated CSV.
    Run(RunArgs),

    /// Print the country variant table used for standardization.
    Countries(CountriesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Raw consolidated list CSV.
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = "ConList.csv")]
    pub input: PathBuf,

    /// Destination of the consolidated CSV.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "Structured_Sanctions_Data.csv"
    )]
    pub output: PathBuf,

    /// Zero-based line index of the header row (the published list has one
    /// banner line above it).
    #[arg(long = "header-row", value_name = "N", default_value_t = 1)]
    pub header_row: usize,

    /// JSON object of extra `{"variant": "canonical"}` country mappings,
    /// merged over the built-in table.
    #[arg(long = "country-map", value_name = "PATH")]
    pub country_map: Option<PathBuf>,

    /// Accepted group classification (repeatable; replaces the built-in set).
    #[arg(long = "group-type", value_name = "VALUE")]
    pub group_types: Vec<String>,

    /// Keep the aggregated raw date-of-birth strings in the output.
    #[arg(long = "keep-raw-dob")]
    pub keep_raw_dob: bool,

    /// Run every stage and print the report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 2 when the quality gate reports the table as not ready.
    ///
    /// The output file is still written.
    #[arg(long = "fail-on-issues")]
    pub fail_on_issues: bool,
}

#[derive(Parser)]
pub struct CountriesArgs {
    /// JSON object of extra country mappings to merge before printing.
    #[arg(long = "country-map", value_name = "PATH")]
    pub country_map: Option<PathBuf>,
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
