//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_settings, Settings};
use crate::error::Result;
use crate::registry::{Discovery, Plugin};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    packages_dir: Option<PathBuf>,
    builtins: bool,
    use_color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            packages_dir: None,
            builtins: true,
            use_color: true,
        }
    }

    /// Create a dispatcher configured from the global flags.
    pub fn from_cli(project_root: PathBuf, cli: &Cli) -> Self {
        Self {
            project_root,
            packages_dir: cli.packages_dir.clone(),
            builtins: !cli.no_builtins,
            use_color: !cli.no_color,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Project settings with the global flags applied.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = load_settings(&self.project_root)?;
        if let Some(dir) = &self.packages_dir {
            settings.packages_dir = dir.clone();
        }
        if !self.builtins {
            settings.builtins = false;
        }
        Ok(settings)
    }

    /// Build the registry for the project.
    pub fn plugin(&self) -> Result<Plugin> {
        self.plugin_for(&self.settings()?)
    }

    fn plugin_for(&self, settings: &Settings) -> Result<Plugin> {
        tracing::debug!("Resolved settings: {:?}", settings);
        Discovery::for_project(&self.project_root, settings).discover()
    }

    /// Dispatch and execute a command.
    ///
    /// The registry is built before the subcommand runs; a discovery failure
    /// fails the whole invocation.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let settings = self.settings()?;
        let plugin = self.plugin_for(&settings)?;

        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&plugin, args.clone());
                cmd.execute(out)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(&self.project_root, &plugin, args.clone())
                    .with_color(self.use_color)
                    .with_settings(settings);
                cmd.execute(out)
            }
        }
    }
}
