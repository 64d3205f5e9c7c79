//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pricelist_report::{DEFAULT_OUTPUT_DIR, OutputFormat, ReportContext};

#[derive(Parser)]
#[command(
    name = "pricelist",
    version,
    about = "Compare supplier price lists and pick the cheapest supplier per product",
    long_about = "Compare supplier price lists and pick the cheapest supplier per product.\n\n\
                  `consolidate` merges a folder of price lists into one comparison sheet;\n\
                  `regroup` splits that sheet into one file per winning supplier;\n\
                  `run` picks the next step from the state of the output directory."
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
    /// Consolidate every price list in a folder into one comparison sheet.
    Consolidate(ConsolidateArgs),

    /// Split a consolidated sheet into one file per cheapest supplier.
    Regroup(RegroupArgs),

    /// Consolidate or regroup depending on what the output directory holds.
    ///
    /// An empty or missing output directory triggers consolidation. A
    /// directory holding only the consolidated sheet triggers regrouping.
    /// Anything else is an error.
    Run(RunArgs),
}

#[derive(Args)]
pub struct ConsolidateArgs {
    /// Folder containing the supplier price lists (.xlsx, .xls, .ods, .csv).
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct RegroupArgs {
    /// Consolidated sheet to split.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct RunArgs {
    /// Folder containing the supplier price lists.
    #[arg(value_name = "FOLDER", default_value = ".")]
    pub folder: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options shared by every command that writes reports.
#[derive(Args, Clone)]
pub struct OutputArgs {
    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// File format of generated reports.
    #[arg(long = "format", value_enum, default_value = "xlsx")]
    pub format: OutputFormatArg,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

impl OutputArgs {
    pub fn report_context(&self) -> ReportContext {
        ReportContext::new(&self.output_dir).with_format(match self.format {
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Xlsx => OutputFormat::Xlsx,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Xlsx,
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
