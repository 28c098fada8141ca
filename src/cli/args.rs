//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// disable-autofix - Lint with every discovered rule, never auto-fixing.
#[derive(Debug, Parser)]
#[command(name = "disable-autofix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Installed packages directory (overrides the settings file)
    #[arg(long, global = true, value_name = "DIR")]
    pub packages_dir: Option<PathBuf>,

    /// Do not register the built-in rules
    #[arg(long, global = true)]
    pub no_builtins: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every registered rule
    List(ListArgs),

    /// Run the registered rules over a file
    Check(CheckArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output the plugin descriptor as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// File to check
    pub file: PathBuf,

    /// Run only this rule (repeatable)
    #[arg(short, long = "rule", value_name = "NAME")]
    pub rules: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}
