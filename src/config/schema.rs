//! Configuration schema for `.disable-autofix.yml`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Project settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Installed packages directory, relative to the project root
    pub packages_dir: PathBuf,

    /// Include the rules bundled with the engine
    pub builtins: bool,

    /// Provider packages to skip, by raw package name
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Settings shared by every rule, visible as `context.settings()`
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub shared_settings: serde_json::Value,

    /// Options per registry rule name, visible as `context.options()`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rule_options: BTreeMap<String, Vec<serde_json::Value>>,
}

impl Settings {
    /// Options configured for a rule, empty when none are.
    pub fn options_for(&self, rule: &str) -> &[serde_json::Value] {
        self.rule_options.get(rule).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            builtins: true,
            exclude: Vec::new(),
            shared_settings: serde_json::Value::Null,
            rule_options: BTreeMap::new(),
        }
    }
}

/// Default packages directory.
pub const DEFAULT_PACKAGES_DIR: &str = "node_modules";
