//! CLI argument definitions for rowcheck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowcheck",
    version,
    about = "Validate delimited data files against configurable rules",
    long_about = "Validate CSV and other delimited files against a JSON rule configuration.\n\n\
                  Checks header presence and order, empty values, fixed values,\n\
                  maximum lengths, Yes/No columns and composite-key uniqueness."
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

    /// Output format for findings and rules.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more files.
    Validate(ValidateArgs),

    /// Show the rules a configuration defines.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// JSON file with columns, rules and reader options.
    #[arg(long = "config", short = 'c', value_name = "RULES_JSON")]
    pub config: PathBuf,

    /// Files to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// JSON file with columns, rules and reader options.
    #[arg(long = "config", short = 'c', value_name = "RULES_JSON")]
    pub config: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
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
