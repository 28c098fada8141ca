//! JSON output formatter.
//!
//! Formats reported problems as machine-readable JSON for tooling integration.

use super::ProblemFormatter;
use crate::lint::LintMessage;
use serde::Serialize;
use std::io::Write;

/// Formats problems as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    problems: &'a [LintMessage],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    rules: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemFormatter for JsonFormatter {
    fn format<W: Write>(&self, messages: &[LintMessage], writer: &mut W) -> std::io::Result<()> {
        let mut rules: Vec<&str> = messages.iter().map(|m| m.rule_id.as_str()).collect();
        rules.sort_unstable();
        rules.dedup();

        let output = JsonOutput {
            problems: messages,
            summary: JsonSummary {
                total: messages.len(),
                rules: rules.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
