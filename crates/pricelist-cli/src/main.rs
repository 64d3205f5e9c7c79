//! Supplier price-list comparison CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use pricelist_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use pricelist_cli::commands::{run_auto, run_consolidate, run_regroup};
use pricelist_cli::logging::{LogConfig, LogFormat, init_logging};
use pricelist_cli::types::{ConsolidateOutcome, RunOutcome};

mod summary;

use crate::summary::{print_consolidate_summary, print_regroup_summary, print_run_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Consolidate(args) => finish(
            run_consolidate(args),
            args.output.json,
            print_consolidate_summary,
            ConsolidateOutcome::has_errors,
        ),
        Command::Regroup(args) => finish(
            run_regroup(args),
            args.output.json,
            print_regroup_summary,
            |_| false,
        ),
        Command::Run(args) => finish(
            run_auto(args),
            args.output.json,
            print_run_summary,
            RunOutcome::has_errors,
        ),
    };
    std::process::exit(exit_code);
}

/// Prints a command outcome and maps it to an exit code.
fn finish<T: Serialize>(
    result: Result<T>,
    json: bool,
    print: fn(&T),
    has_errors: fn(&T) -> bool,
) -> i32 {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(text) => println!("{text}"),
            Err(error) => {
                eprintln!("error: failed to serialize result: {error}");
                return 1;
            }
        }
    } else {
        print(&outcome);
    }
    i32::from(has_errors(&outcome))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
