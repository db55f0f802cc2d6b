//! CLI argument parsing for callwrap

use crate::demos::Demo;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the wrapper statistics summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "callwrap")]
#[command(version)]
#[command(about = "Run call-counting, timing and tracing wrapper demonstrations", long_about = None)]
pub struct Cli {
    /// Demonstrations to run, in order (default: all)
    #[arg(value_enum, value_name = "DEMO")]
    pub demos: Vec<Demo>,

    /// List available demonstrations and exit
    #[arg(long)]
    pub list: bool,

    /// Append-mode file receiving redirected output (default: log.txt)
    #[arg(short = 'o', long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Configuration file (default: callwrap.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Wrapper flags for configurable demos (e.g., --options count,time or --options all)
    #[arg(short = 'O', long = "options", value_name = "EXPR")]
    pub options: Option<String>,

    /// Print a statistics summary of the wrappers used
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Summary format (text or json, requires -c)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing output on stderr
    #[arg(long)]
    pub debug: bool,
}
