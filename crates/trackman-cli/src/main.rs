//! Trackman combine CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use trackman_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use trackman_cli::commands::{run_backfill_teams, run_clean, run_combine, run_filter_teams};
use trackman_cli::logging::{LogConfig, LogFormat, init_logging};
use trackman_cli::summary::{
    print_backfill_summary, print_clean_summary, print_combine_summary, print_filter_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Combine(args) => match run_combine(&args) {
            Ok(report) => {
                print_combine_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Clean(args) => match run_clean(&args) {
            Ok(report) => {
                print_clean_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::FilterTeams(args) => match run_filter_teams(&args) {
            Ok(report) => {
                print_filter_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::BackfillTeams(args) => match run_backfill_teams(&args) {
            Ok(report) => {
                print_backfill_summary(&report);
                0
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
    };
    std::process::exit(exit_code);
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
