//! List command implementation.
//!
//! The `disable-autofix list` command prints every registered rule name.

use std::io::Write;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::Plugin;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'p> {
    plugin: &'p Plugin,
    args: ListArgs,
}

impl<'p> ListCommand<'p> {
    /// Create a new list command.
    pub fn new(plugin: &'p Plugin, args: ListArgs) -> Self {
        Self { plugin, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(self.plugin).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        for (name, rule) in self.plugin.iter() {
            match rule.meta().rule_type {
                Some(rule_type) => writeln!(out, "{} ({})", name, rule_type)?,
                None => writeln!(out, "{}", name)?,
            }
        }
        writeln!(out)?;
        writeln!(out, "{} rules registered, none fixable", self.plugin.len())?;

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BuiltinSource, Discovery};

    fn builtins() -> Plugin {
        Discovery::new()
            .with_source(BuiltinSource::new())
            .discover()
            .unwrap()
    }

    #[test]
    fn lists_names_with_types() {
        let plugin = builtins();
        let mut out = Vec::new();

        let result = ListCommand::new(&plugin, ListArgs::default())
            .execute(&mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(result.success);
        assert!(text.contains("no-var (suggestion)"));
        assert!(text.contains("rules registered, none fixable"));
    }

    #[test]
    fn json_is_descriptor_without_fixable() {
        let plugin = builtins();
        let mut out = Vec::new();

        ListCommand::new(&plugin, ListArgs { json: true })
            .execute(&mut out)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["meta"]["name"], "eslint-plugin-disable-autofix");
        assert!(json["rules"]["no-var"]["meta"].get("fixable").is_none());
    }
}
