//! Provider manifests.
//!
//! An installed provider package carries a `plugin.yml` at its root whose
//! `rules` key maps short rule names to rule definitions:
//!
//! ```yaml
//! rules:
//!   jsx-key:
//!     meta:
//!       fixable: code
//!       messages:
//!         missingKey: Missing "key" prop for element in iterator
//!     pattern: '\.map\(\s*\w+\s*=>\s*<li>'
//!     messageId: missingKey
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{DisableAutofixError, Result};
use crate::lint::{PatternRule, RuleDefinition};

use super::source::{Provider, ProviderId, RuleTable};

/// File name of a provider manifest inside its package directory.
pub const MANIFEST_FILE: &str = "plugin.yml";

/// Parsed contents of a provider manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginManifest {
    /// Rule definitions by short name. A manifest without rules is valid.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleDefinition>,
}

/// Parse manifest text and compile its rule table.
///
/// Text that is not YAML at all fails to load; YAML whose `rules` is not a
/// mapping of name to rule definition is a malformed rule table.
pub fn parse_manifest(id: ProviderId, content: &str, path: &Path) -> Result<Provider> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| DisableAutofixError::ProviderLoad {
            provider: id.to_string(),
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses to null; treat it like a manifest without rules.
    let manifest: PluginManifest = if value.is_null() {
        PluginManifest::default()
    } else {
        serde_yaml::from_value(value).map_err(|e| DisableAutofixError::MalformedRuleTable {
            provider: id.to_string(),
            message: e.to_string(),
        })?
    };

    let rules = compile_rules(&id, manifest.rules)?;
    Ok(Provider { id, rules })
}

/// Read and parse the manifest of the package at `package_dir`.
pub fn load_manifest(id: ProviderId, package_dir: &Path) -> Result<Provider> {
    let path = package_dir.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path).map_err(|e| DisableAutofixError::ProviderLoad {
        provider: id.to_string(),
        path: path.clone(),
        message: e.to_string(),
    })?;
    parse_manifest(id, &content, &path)
}

/// Compile rule definitions into a rule table.
pub(crate) fn compile_rules(
    id: &ProviderId,
    definitions: BTreeMap<String, RuleDefinition>,
) -> Result<RuleTable> {
    let mut rules = RuleTable::new();
    for (name, definition) in definitions {
        let rule = PatternRule::compile(definition).map_err(|e| {
            DisableAutofixError::MalformedRuleTable {
                provider: id.to_string(),
                message: format!("rule '{}': {}", name, e),
            }
        })?;
        rules.insert(name, Arc::new(rule));
    }
    Ok(rules)
}
