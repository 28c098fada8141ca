//! Check command implementation.
//!
//! The `disable-autofix check` command runs the registered rules over a
//! single file and prints what they report. Fixes never appear in the
//! output since every registered rule is fix-disabled.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::CheckArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::lint::{HumanFormatter, JsonFormatter, LintMessage, OutputFormat, ProblemFormatter};
use crate::registry::Plugin;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'p> {
    project_root: PathBuf,
    plugin: &'p Plugin,
    args: CheckArgs,
    use_color: bool,
    settings: Settings,
}

impl<'p> CheckCommand<'p> {
    /// Create a new check command.
    pub fn new(project_root: &Path, plugin: &'p Plugin, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            plugin,
            args,
            use_color: false,
            settings: Settings::default(),
        }
    }

    /// Enable or disable colored human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Settings and rule options handed to the rules.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Path of the checked file. Relative paths resolve against the project root.
    fn file_path(&self) -> PathBuf {
        self.project_root.join(&self.args.file)
    }

    fn format_output(&self, messages: &[LintMessage]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(messages, &mut output)?,
            OutputFormat::Human => HumanFormatter::new(self.use_color)
                .with_file(&self.args.file)
                .format(messages, &mut output)?,
        }
        Ok(output)
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let path = self.file_path();
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let messages = self
            .plugin
            .check_with(&path, &source, &self.args.rules, &self.settings)?;
        tracing::debug!("{} problems in {}", messages.len(), path.display());

        if messages.is_empty() && self.args.format == OutputFormat::Human {
            writeln!(out, "No problems found")?;
            return Ok(CommandResult::success());
        }

        out.write_all(&self.format_output(&messages)?)?;

        if messages.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
