//! Metalint CLI library — exposed for integration tests

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "metalint")]
#[command(about = "Aggregate and normalise the output of a whole bunch of code checkers", long_about = None)]
#[command(version = metalint_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of concurrent tools to run
    #[arg(short = 'j', long, value_name = "N", global = true)]
    pub concurrency: Option<usize>,

    /// Tools to disable
    #[arg(short = 'D', long = "disable", value_name = "TOOL", global = true)]
    pub disable: Vec<String>,

    /// Only run fast tools
    #[arg(long, global = true)]
    pub fast: bool,

    /// Exclude issues matching this regular expression
    #[arg(short = 'e', long, value_name = "REGEXP", global = true)]
    pub exclude: Option<String>,

    /// Display messages for failed tools, timing, etc.
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Add or override a tool
    #[arg(long = "tool", value_name = "NAME=COMMAND:PATTERN", value_parser = parse_key_val, global = true)]
    pub tools: Vec<(String, String)>,

    /// Override a tool's message; {message} expands to the original
    #[arg(long = "message-override", value_name = "NAME=TEMPLATE", value_parser = parse_key_val, global = true)]
    pub message_overrides: Vec<(String, String)>,

    /// Override a tool's severity
    #[arg(long = "severity", value_name = "NAME=SEVERITY", value_parser = parse_key_val, global = true)]
    pub severities: Vec<(String, String)>,

    /// Explicit config file (default: .metalint.toml in the target or ancestors)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the configured tools and print the aggregated report (default)
    Run {
        /// Directory to check (default: current directory)
        path: Option<String>,
    },

    /// Initialize .metalint.toml with the built-in configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },

    /// Print the effective tool table
    Tools,
}

/// Parse a `NAME=VALUE` flag argument
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("`{s}` must be NAME=VALUE")),
    }
}
