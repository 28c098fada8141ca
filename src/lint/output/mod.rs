//! Problem output formatters.
//!
//! This module provides formatters for printing reported problems
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::LintMessage;
use std::io::Write;

/// Output format for reported problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting reported problems.
pub trait ProblemFormatter {
    /// Format messages to the given writer.
    fn format<W: Write>(&self, messages: &[LintMessage], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
