//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Settings;
use crate::error::{DisableAutofixError, Result};

/// Settings file name, looked up in the project root.
pub const CONFIG_FILE: &str = ".disable-autofix.yml";

/// Path of the settings file for a project.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}

/// Load the settings for a project.
///
/// A missing settings file yields the defaults.
///
/// # Errors
///
/// Returns `ConfigParseError` if the file is not valid settings YAML.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    let path = config_path(project_root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(DisableAutofixError::Io(e)),
    };

    parse_settings(&content, &path)
}

/// Parse settings YAML.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| DisableAutofixError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
