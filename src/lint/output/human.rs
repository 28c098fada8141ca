//! Human-readable output formatter.
//!
//! Formats reported problems for terminal display with optional color support.

use super::ProblemFormatter;
use crate::lint::LintMessage;
use console::style;
use std::io::Write;
use std::path::PathBuf;

/// Formats problems for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
    /// File shown in location lines.
    pub file: Option<PathBuf>,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            file: None,
        }
    }

    /// Show `file` in location lines.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    fn rule_label(&self, rule_id: &str) -> String {
        if self.use_color {
            style(rule_id).yellow().bold().to_string()
        } else {
            rule_id.to_string()
        }
    }
}

impl ProblemFormatter for HumanFormatter {
    fn format<W: Write>(&self, messages: &[LintMessage], writer: &mut W) -> std::io::Result<()> {
        for message in messages {
            // Header line: problem[rule-id]: message
            writeln!(
                writer,
                "problem[{}]: {}",
                self.rule_label(&message.rule_id),
                message.problem.display_message()
            )?;

            let start = message.problem.loc.start;
            match &self.file {
                Some(file) => writeln!(
                    writer,
                    "  --> {}:{}:{}",
                    file.display(),
                    start.line,
                    start.column + 1
                )?,
                None => writeln!(writer, "  --> {}:{}", start.line, start.column + 1)?,
            }

            writeln!(writer)?;
        }

        if !messages.is_empty() {
            writeln!(writer, "Found {} problem(s)", messages.len())?;
        }

        Ok(())
    }
}
