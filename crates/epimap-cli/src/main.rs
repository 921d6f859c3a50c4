//! Outbreak Atlas CLI.

use clap::{ColorChoice, Parser};
use epimap_cli::logging::{LogConfig, LogFormat, init_logging};
use epimap_ingest::EndpointConfig;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod terminal;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_countries, run_lookup, run_playback, run_snapshot};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = endpoint_config_from_cli(&cli);
    let result = match &cli.command {
        Command::Snapshot(args) => run_snapshot(config, args),
        Command::Countries => run_countries(config),
        Command::Lookup(args) => run_lookup(config, args),
        Command::Playback(args) => run_playback(config, args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
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

fn endpoint_config_from_cli(cli: &Cli) -> EndpointConfig {
    let mut config = EndpointConfig::default();
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(series_url) = &cli.series_url {
        config.series_url = series_url.clone();
    }
    config
}
