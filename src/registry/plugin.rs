//! The registry artifact handed to the host engine.
//!
//! A [`Plugin`] is a static descriptor: plugin metadata, the flat map of
//! wrapped rules, and empty `configs` and `processors` tables. It is built
//! once by [`Discovery`](super::Discovery) and never modified afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::Settings;
use crate::error::{DisableAutofixError, Result};
use crate::lint::{LintMessage, Problem, Rule, RuleContext};

use super::naming::SELF_PACKAGE;

/// Name and version of the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginMeta {
    pub name: String,
    pub version: String,
}

impl Default for PluginMeta {
    fn default() -> Self {
        Self {
            name: SELF_PACKAGE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Immutable registry of wrapped rules.
#[derive(Serialize)]
pub struct Plugin {
    pub meta: PluginMeta,
    #[serde(serialize_with = "serialize_rules")]
    rules: BTreeMap<String, Arc<dyn Rule>>,
    configs: BTreeMap<String, serde_json::Value>,
    processors: BTreeMap<String, serde_json::Value>,
}

fn serialize_rules<S: Serializer>(
    rules: &BTreeMap<String, Arc<dyn Rule>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct RuleEntry<'a> {
        meta: &'a crate::lint::RuleMeta,
    }

    let mut map = serializer.serialize_map(Some(rules.len()))?;
    for (name, rule) in rules {
        map.serialize_entry(name, &RuleEntry { meta: rule.meta() })?;
    }
    map.end()
}

impl Plugin {
    pub(crate) fn new(rules: BTreeMap<String, Arc<dyn Rule>>) -> Self {
        Self {
            meta: PluginMeta::default(),
            rules,
            configs: BTreeMap::new(),
            processors: BTreeMap::new(),
        }
    }

    /// Look up a rule by registry name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.get(name)
    }

    /// Check if a rule is registered.
    pub fn has(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, rule)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Rule>)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Shareable configurations. Always empty.
    pub fn configs(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.configs
    }

    /// Source processors. Always empty.
    pub fn processors(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.processors
    }

    /// Run rules over a source text and collect their problems.
    ///
    /// With an empty `only`, every registered rule runs, in name order.
    /// Otherwise the named rules run in the given order, each once.
    pub fn check(&self, filename: &Path, source: &str, only: &[String]) -> Result<Vec<LintMessage>> {
        self.check_with(filename, source, only, &Settings::default())
    }

    /// Like [`Plugin::check`], handing rules the shared settings and their
    /// configured options.
    pub fn check_with(
        &self,
        filename: &Path,
        source: &str,
        only: &[String],
        settings: &Settings,
    ) -> Result<Vec<LintMessage>> {
        let selected: Vec<(&str, &Arc<dyn Rule>)> = if only.is_empty() {
            self.iter().collect()
        } else {
            let mut selected: Vec<(&str, &Arc<dyn Rule>)> = Vec::new();
            for name in only {
                let (name, rule) = self
                    .rules
                    .get_key_value(name)
                    .ok_or_else(|| DisableAutofixError::UnknownRule { name: name.clone() })?;
                if !selected.iter().any(|(seen, _)| *seen == name.as_str()) {
                    selected.push((name.as_str(), rule));
                }
            }
            selected
        };

        let mut messages = Vec::new();
        for (name, rule) in selected {
            let mut problems: Vec<Problem> = Vec::new();
            let mut context = RuleContext::new(source, &mut problems)
                .with_rule_id(name)
                .with_filename(filename)
                .with_settings(&settings.shared_settings)
                .with_options(settings.options_for(name));
            rule.create(&mut context);
            messages.extend(problems.into_iter().map(|p| LintMessage::new(name, p)));
        }

        Ok(messages)
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("meta", &self.meta)
            .field("rules", &self.rule_names())
            .finish()
    }
}
