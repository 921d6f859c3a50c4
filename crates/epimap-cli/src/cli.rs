//! CLI argument definitions for the outbreak atlas.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "epimap",
    version,
    about = "Outbreak Atlas - reconcile epidemic feeds for choropleth rendering",
    long_about = "Reconcile the countries, cases, neighbours and historical feeds\n\
                  into one canonical per-country model, and replay or inspect it\n\
                  from the terminal."
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

    /// Base URL the countries, cases and neighbours paths are appended to.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Absolute URL of the historical series feed.
    #[arg(long = "series-url", value_name = "URL", global = true)]
    pub series_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the feeds and print the current worldwide snapshot.
    Snapshot(SnapshotArgs),

    /// List every resolvable country name.
    Countries,

    /// Select countries as if typed into the search box.
    Lookup(LookupArgs),

    /// Replay the historical series as an animation.
    Playback(PlaybackArgs),
}

#[derive(Parser)]
pub struct SnapshotArgs {
    /// Only show the N most affected countries.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Country names, applied in order; naming a country twice deselects it.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(Parser)]
pub struct PlaybackArgs {
    /// Stop after this many frames instead of looping forever.
    #[arg(long, value_name = "N")]
    pub frames: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
