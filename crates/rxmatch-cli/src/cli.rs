//! CLI argument definitions for `rxmatch`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rxmatch",
    version,
    about = "Typo-tolerant drug lookup and interaction cross-checking",
    long_about = "Look up drug and condition names in a catalog with edit-distance matching,\n\
                  resolve medication lists, and check drug lists for interactions with a\n\
                  prescribed drug."
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

    /// Allow drug and condition names to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML configuration file with matcher thresholds and severity labels.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Result output format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the closest catalog entry to a drug or condition name.
    Search(SearchArgs),

    /// Resolve a list of medication names against the drug catalog.
    Meds(MedsArgs),

    /// Show the interaction record of one drug.
    Interactions(InteractionsArgs),

    /// Check a list of drugs for interactions naming a prescribed drug.
    Check(CheckArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Name to look up.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Catalog JSON file (`{"name": "reference", ...}`).
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: PathBuf,

    /// Minimum similarity an entry must exceed (overrides config).
    #[arg(long = "threshold")]
    pub threshold: Option<f64>,
}

#[derive(Args)]
pub struct MedsArgs {
    /// Medication names as typed.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Drug catalog JSON file.
    #[arg(long = "drugs", value_name = "PATH")]
    pub drugs: PathBuf,

    /// Largest accepted list (overrides config).
    #[arg(long = "max-medications")]
    pub max_medications: Option<usize>,
}

#[derive(Args)]
pub struct InteractionsArgs {
    /// Drug whose interactions to show.
    #[arg(value_name = "DRUG")]
    pub drug: String,

    /// Drug catalog JSON file.
    #[arg(long = "drugs", value_name = "PATH")]
    pub drugs: PathBuf,

    /// Interaction fixture JSON file.
    #[arg(long = "source", value_name = "PATH")]
    pub source: PathBuf,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Comma-separated list of drugs the patient takes.
    #[arg(value_name = "DRUGS")]
    pub drugs_list: String,

    /// Drug being prescribed.
    #[arg(long = "prescribed", value_name = "DRUG")]
    pub prescribed: String,

    /// Drug catalog JSON file.
    #[arg(long = "drugs", value_name = "PATH")]
    pub drugs: PathBuf,

    /// Interaction fixture JSON file.
    #[arg(long = "source", value_name = "PATH")]
    pub source: PathBuf,

    #[command(flatten)]
    pub matching: NameMatchArgs,
}

/// Interaction-name matching overrides.
#[derive(Args)]
pub struct NameMatchArgs {
    /// Sliding window length in characters.
    #[arg(long = "window")]
    pub window: Option<usize>,

    /// Per-window normalized distance threshold.
    #[arg(long = "inner-threshold")]
    pub inner_threshold: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
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
